extern crate crayon_res;

mod utils;

use crayon_res::prelude::*;
use crayon_res::res::manifest::Manifest;

#[test]
fn parse() {
    let text = "
        # sprites of the title screen
        directory, res:sprites

        bitmap ,res:logo.png , logo
    ";

    let entries = Manifest::parse("title.manifest", text, ',').unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].name(), "title.manifest");
    assert_eq!(entries[0].prefix(), Some("directory"));
    assert_eq!(entries[0].arguments(), &["directory", "res:sprites"]);

    assert_eq!(entries[1].prefix(), Some("bitmap"));
    assert_eq!(entries[1].argument(2), Some("logo"));
    assert_eq!(entries[1].argument(3), None);

    let entries = Manifest::parse("tabs", "directory\tres:sprites", '\t').unwrap();
    assert_eq!(entries[0].argument(1), Some("res:sprites"));

    assert!(Manifest::parse("err", ", res:sprites", ',').is_err());
    assert!(Manifest::parse_line("err", "   ", ',').unwrap().is_none());
}

#[test]
fn require() {
    let origin = ManifestOrigin::new("inline", vec!["directory"]);
    assert_eq!(origin.require(0).unwrap(), "directory");

    match origin.require(1) {
        Err(Error::MalformedManifest(_, _)) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn load_line() {
    let dir = utils::sprites();
    let loader = utils::loader(dir.path());

    let sprites = loader.load_line("directory, res:sprites").unwrap();
    assert_eq!(sprites, "sprites");
    assert_eq!(loader.children(&sprites), vec!["a.img", "b.img"]);
    assert_eq!(loader.parent("a.img").as_deref(), Some("sprites"));

    let info = loader.resolve(&sprites).unwrap();
    assert_eq!(
        info.origin,
        Origin::Manifest(ManifestOrigin::new(
            "inline",
            vec!["directory", "res:sprites"]
        ))
    );

    // The manifest origin survives reloads.
    utils::write(dir.path(), "sprites/c.img", "c");
    loader.reload(&sprites).unwrap();

    let reloaded = loader.resolve(&sprites).unwrap();
    assert_eq!(reloaded.origin, info.origin);
    assert_eq!(reloaded.children, vec!["a.img", "b.img", "c.img"]);
}

#[test]
fn load_line_errors() {
    let dir = utils::sprites();
    let loader = utils::loader(dir.path());

    match loader.load_line("sound, res:boom.wav") {
        Err(Error::UnregisteredPrefix(prefix)) => assert_eq!(prefix, "sound"),
        other => panic!("unexpected {:?}", other),
    }

    match loader.load_line("directory") {
        Err(Error::MalformedManifest(_, _)) => {}
        other => panic!("unexpected {:?}", other),
    }

    match loader.load_line("# nothing") {
        Err(Error::MalformedManifest(_, _)) => {}
        other => panic!("unexpected {:?}", other),
    }

    match loader.load_manifest_entry(&ManifestOrigin::new("inline", Vec::<String>::new())) {
        Err(Error::MalformedManifest(_, _)) => {}
        other => panic!("unexpected {:?}", other),
    }

    assert!(loader.is_empty());
}

#[test]
fn prefix_is_case_insensitive() {
    let dir = utils::sprites();
    let loader = utils::loader(dir.path());

    assert_eq!(loader.load_line("DIRECTORY, res:sprites").unwrap(), "sprites");
}

#[test]
fn bitmap_with_alias() {
    let dir = utils::sprites();
    let loader = utils::loader(dir.path());

    let hero = loader.load_line("bitmap, res:sprites/b.img, hero").unwrap();
    assert_eq!(hero, "hero");

    utils::write(dir.path(), "sprites/b.img", "bbbbb");
    loader.reload(&hero).unwrap();

    let bitmaps = loader.storage::<BitmapStorage>().unwrap();
    assert_eq!(bitmaps.get("hero", |v| v.width), Some(5));

    // Without alias, the identifier is the file name.
    assert_eq!(loader.load_line("bitmap, res:sprites/b.img").unwrap(), "b.img");
}

#[test]
fn load_manifest() {
    let dir = utils::sprites();
    utils::write(dir.path(), "icons/ok.img", "ok");
    utils::write(
        dir.path(),
        "game.manifest",
        "# everything\ndirectory, res:sprites\n\nbitmap, res:icons/ok.img, ok\n",
    );

    let loader = utils::loader(dir.path());
    let ids = loader.load_manifest("res:game.manifest").unwrap();
    assert_eq!(ids, vec!["sprites", "ok"]);

    match loader.resolve("ok").unwrap().origin {
        Origin::Manifest(ref v) => {
            assert_eq!(v.name(), dir.path().join("game.manifest").to_string_lossy());
            assert_eq!(v.argument(1), Some("res:icons/ok.img"));
        }
        ref other => panic!("unexpected {:?}", other),
    }

    match loader.load_manifest("res:missing.manifest") {
        Err(Error::IO(_)) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn load_manifest_invalid_utf8() {
    let dir = utils::sprites();
    std::fs::write(dir.path().join("bad.manifest"), b"directory, res:\xff\xfe").unwrap();

    let loader = utils::loader(dir.path());
    match loader.load_manifest("res:bad.manifest") {
        Err(Error::MalformedManifest(name, _)) => assert!(name.ends_with("bad.manifest")),
        other => panic!("unexpected {:?}", other),
    }

    assert!(loader.is_empty());
}
