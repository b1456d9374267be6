use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::*;

use super::FileSystem;

/// The local host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct Disk {
    skip_hidden: bool,
}

impl Disk {
    pub fn new(skip_hidden: bool) -> Self {
        Disk { skip_hidden }
    }
}

impl FileSystem for Disk {
    fn for_each_entry(
        &self,
        location: &Path,
        visit: &mut dyn FnMut(&Path) -> Result<()>,
    ) -> Result<()> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(location)? {
            let entry = entry?;
            if self.skip_hidden && entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            entries.push(entry.path());
        }

        // read_dir makes no promise about the order.
        entries.sort();

        for v in entries {
            visit(&v)?;
        }

        Ok(())
    }

    fn read_to_end(&self, location: &Path, buf: &mut Vec<u8>) -> Result<usize> {
        let mut file = fs::File::open(location)?;
        let len = file.read_to_end(buf)?;
        Ok(len)
    }

    fn is_dir(&self, location: &Path) -> bool {
        location.is_dir()
    }

    fn exists(&self, location: &Path) -> bool {
        location.exists()
    }
}
