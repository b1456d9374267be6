//! Filesystem services consumed by storages.

pub mod disk;
pub use self::disk::Disk;

use std::path::Path;

use crate::errors::*;

pub trait FileSystem {
    /// Visits the entries of directory `location` in a stable order. The visitor receives the
    /// full path of every entry, and the first error it returns stops the iteration.
    fn for_each_entry(
        &self,
        location: &Path,
        visit: &mut dyn FnMut(&Path) -> Result<()>,
    ) -> Result<()>;

    /// Reads the whole file at `location` into `buf`.
    fn read_to_end(&self, location: &Path, buf: &mut Vec<u8>) -> Result<usize>;

    /// Checks whether or not it is a directory.
    fn is_dir(&self, location: &Path) -> bool;

    /// Checks if the file exists.
    fn exists(&self, location: &Path) -> bool;
}

/// Returns the last component of `location`, which is used as the identifier of resources
/// loaded from files.
pub fn base_name(location: &Path) -> String {
    location
        .file_name()
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_else(|| location.to_string_lossy().into_owned())
}
