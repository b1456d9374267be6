extern crate crayon_res;

mod utils;

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crayon_res::prelude::*;

/// Files kept in memory, directories are implied by the paths of files.
#[derive(Default)]
struct Memory {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl Memory {
    fn add(mut self, path: &str, contents: &[u8]) -> Self {
        self.files.insert(PathBuf::from(path), contents.to_vec());
        self
    }

    fn not_found(location: &Path) -> Error {
        Error::IO(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found", location.display()),
        ))
    }
}

impl FileSystem for Memory {
    fn for_each_entry(
        &self,
        location: &Path,
        visit: &mut dyn FnMut(&Path) -> Result<()>,
    ) -> Result<()> {
        if !self.is_dir(location) {
            return Err(Memory::not_found(location));
        }

        let mut entries = BTreeSet::new();
        for path in self.files.keys() {
            if let Ok(relative) = path.strip_prefix(location) {
                if let Some(component) = relative.components().next() {
                    entries.insert(location.join(component));
                }
            }
        }

        for v in entries {
            visit(&v)?;
        }

        Ok(())
    }

    fn read_to_end(&self, location: &Path, buf: &mut Vec<u8>) -> Result<usize> {
        let bytes = self
            .files
            .get(location)
            .ok_or_else(|| Memory::not_found(location))?;

        buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn is_dir(&self, location: &Path) -> bool {
        self.files
            .keys()
            .any(|v| v != location && v.starts_with(location))
    }

    fn exists(&self, location: &Path) -> bool {
        self.files.contains_key(location) || self.is_dir(location)
    }
}

fn loader(fs: Memory) -> ResourceLoader {
    let params = ResourceParams::default().shortcut("mem:", "/");
    ResourceLoader::with_filesystem(params, utils::master(), fs).unwrap()
}

#[test]
fn memory() {
    let fs = Memory::default()
        .add("/sprites/b.img", b"bbb")
        .add("/sprites/a.img", b"aa")
        .add("/sprites/ui/ok.img", b"o");

    let loader = loader(fs);
    loader.load("mem:sprites").unwrap();

    assert_eq!(loader.children("sprites"), vec!["a.img", "b.img", "ui"]);
    assert_eq!(loader.children("ui"), vec!["ok.img"]);
    assert_eq!(loader.parent("ok.img").as_deref(), Some("ui"));

    let bitmaps = loader.storage::<BitmapStorage>().unwrap();
    assert_eq!(bitmaps.get("b.img", |v| v.width), Some(3));

    assert!(loader.filesystem().is_dir(Path::new("/sprites/ui")));
    assert!(!loader.filesystem().is_dir(Path::new("/sprites/a.img")));
}

#[test]
fn directory_entry_names_a_file() {
    let fs = Memory::default().add("/sprites/a.img", b"aa");
    let loader = loader(fs);

    match loader.load_line("directory, mem:sprites/a.img") {
        Err(Error::MalformedManifest(_, _)) => {}
        other => panic!("unexpected {:?}", other),
    }

    match loader.load_line("directory, mem:missing") {
        Err(Error::IO(_)) => {}
        other => panic!("unexpected {:?}", other),
    }

    assert!(loader.is_empty());
}
