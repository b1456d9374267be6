extern crate crayon_res;

mod utils;

use std::any::Any;

use crayon_res::prelude::*;
use crayon_res::res::vfs;

/// Text files, loaded as strings.
struct TextStorage {
    resources: ResourceMap<String>,
    extensions: Vec<&'static str>,
}

impl TextStorage {
    fn new(extensions: &[&'static str]) -> Self {
        TextStorage {
            resources: ResourceMap::new("text"),
            extensions: extensions.to_vec(),
        }
    }
}

impl Storage for TextStorage {
    fn name(&self) -> &'static str {
        "text"
    }

    fn table(&self) -> &dyn Table {
        &self.resources
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_file_loadable(&self) -> Option<&dyn FileLoadable> {
        Some(self)
    }
}

impl FileLoadable for TextStorage {
    fn extensions(&self) -> &[&'static str] {
        &self.extensions
    }

    fn load_from_file(&self, origin: &FileOrigin, loader: &ResourceLoader) -> Result<ResourceId> {
        let id = ResourceId::from(vfs::base_name(origin.path()));
        loader.ensure_vacant(&id)?;

        let mut buf = Vec::new();
        loader.filesystem().read_to_end(origin.path(), &mut buf)?;
        let text = String::from_utf8_lossy(&buf).into_owned();

        self.resources.insert(id, origin.clone(), Vec::new(), text)
    }
}

/// Holds nothing and declares no capability.
struct InertStorage {
    resources: ResourceMap<()>,
}

impl Storage for InertStorage {
    fn name(&self) -> &'static str {
        "inert"
    }

    fn table(&self) -> &dyn Table {
        &self.resources
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn register() {
    let mut master = utils::master();

    match master.register(DirectoryStorage::new()) {
        Err(Error::DuplicateRegistration(_)) => {}
        other => panic!("unexpected {:?}", other),
    }

    // `img` is claimed by the bitmap storage, so `txt` must not be registered either.
    match master.register(TextStorage::new(&["txt", "IMG"])) {
        Err(Error::DuplicateRegistration(_)) => {}
        other => panic!("unexpected {:?}", other),
    }

    assert!(master.storage::<TextStorage>().is_none());

    master.register(TextStorage::new(&["txt", "md"])).unwrap();
    master
        .register(InertStorage {
            resources: ResourceMap::new("inert"),
        })
        .unwrap();

    assert!(master.storage::<TextStorage>().is_some());
    assert!(master.storage_by_name("inert").is_some());
    assert_eq!(
        master.storages().map(|v| v.name()).collect::<Vec<_>>(),
        vec!["directory", "bitmap", "text", "inert"]
    );
}

#[test]
fn custom_storage() {
    let dir = utils::sprites();
    utils::write(dir.path(), "sprites/readme.md", "# sprites");

    let mut master = utils::master();
    master.register(TextStorage::new(&["txt", "md"])).unwrap();

    let params = ResourceParams::default().shortcut("res:", format!("{}/", dir.path().display()));
    let loader = ResourceLoader::new(params, master).unwrap();

    loader.load("res:sprites").unwrap();
    assert_eq!(loader.children("sprites"), vec!["a.img", "b.img", "readme.md"]);
    assert_eq!(loader.resolve("readme.md").unwrap().storage, "text");
    assert_eq!(loader.parent("readme.md").as_deref(), Some("sprites"));

    utils::write(dir.path(), "sprites/readme.md", "# hello");
    loader.reload("readme.md").unwrap();

    let texts = loader.storage::<TextStorage>().unwrap();
    assert_eq!(
        texts.resources.value("readme.md", |v| v.clone()),
        Some("# hello".to_owned())
    );
    assert_eq!(loader.children("sprites"), vec!["a.img", "b.img", "readme.md"]);

    // Manifest entries are not supported by text storage.
    match loader.load_line("text, res:sprites/readme.md") {
        Err(Error::UnregisteredPrefix(prefix)) => assert_eq!(prefix, "text"),
        other => panic!("unexpected {:?}", other),
    }
}
