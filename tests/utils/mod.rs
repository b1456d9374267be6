#![allow(dead_code)]

use std::fs;
use std::path::Path;

use crayon_res::prelude::*;
use tempfile::TempDir;

/// Pretends every file is a bitmap of one row, with one pixel per byte.
pub fn raw(bytes: &[u8]) -> Result<Bitmap> {
    Ok(Bitmap::new(bytes.len() as u32, 1, bytes.to_vec()))
}

pub fn master() -> ResourceMasterStorage {
    let mut master = ResourceMasterStorage::new();
    master.register(DirectoryStorage::new()).unwrap();
    master
        .register(BitmapStorage::with_decoder(raw, &["img"]))
        .unwrap();
    master
}

/// Creates a loader with shortcut `res:` pointing at `root`.
pub fn loader(root: &Path) -> ResourceLoader {
    let _ = env_logger::try_init();

    let params = ResourceParams::default().shortcut("res:", format!("{}/", root.display()));
    ResourceLoader::new(params, master()).unwrap()
}

pub fn write<P: AsRef<Path>>(root: &Path, path: P, contents: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Creates `sprites/a.img` and `sprites/b.img`.
pub fn sprites() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sprites/a.img", "aa");
    write(dir.path(), "sprites/b.img", "bbb");
    dir
}
