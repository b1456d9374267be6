//! Directories loaded as composite resources, with one child per entry.

use std::any::Any;
use std::path::{Path, PathBuf};

use crate::errors::*;
use crate::res::loader::ResourceLoader;
use crate::res::origin::{FileOrigin, ManifestOrigin, Origin};
use crate::res::resource::ResourceId;
use crate::res::storage::{FileLoadable, ManifestLoadable, ResourceMap, Storage, Table};
use crate::res::vfs;

pub const NAME: &str = "directory";

/// Directories are located with paths that have no extension.
pub const EXTENSION: &str = "";

pub const PREFIX: &str = "directory";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub path: PathBuf,
}

/// Stores directories. Each entry of a directory is loaded through the `ResourceLoader` and
/// becomes a child of the directory resource, in enumeration order.
///
/// Manifest entries look like `directory, <path>`.
pub struct DirectoryStorage {
    resources: ResourceMap<Directory>,
}

impl Default for DirectoryStorage {
    fn default() -> Self {
        DirectoryStorage::new()
    }
}

impl DirectoryStorage {
    pub fn new() -> Self {
        DirectoryStorage {
            resources: ResourceMap::new(NAME),
        }
    }

    /// Gets the directory `id` if available.
    pub fn get(&self, id: &str) -> Option<Directory> {
        self.resources.value(id, |v| v.clone())
    }

    fn load_directory(
        &self,
        path: &Path,
        origin: Origin,
        loader: &ResourceLoader,
    ) -> Result<ResourceId> {
        let id = ResourceId::from(vfs::base_name(path));
        loader.ensure_vacant(&id)?;

        let children = loader.load_children(path)?;
        let directory = Directory {
            path: path.to_owned(),
        };

        // A child could have claimed the identifier of its own parent.
        let inserted = loader
            .ensure_vacant(&id)
            .and_then(|_| self.resources.insert(id, origin, children.clone(), directory));

        let id = match inserted {
            Ok(id) => id,
            Err(err) => {
                loader.discard(&children);
                return Err(err);
            }
        };

        loader.adopt(&id, &children);
        Ok(id)
    }
}

impl Storage for DirectoryStorage {
    fn name(&self) -> &'static str {
        NAME
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

    fn as_manifest_loadable(&self) -> Option<&dyn ManifestLoadable> {
        Some(self)
    }
}

impl FileLoadable for DirectoryStorage {
    fn extensions(&self) -> &[&'static str] {
        &[EXTENSION]
    }

    fn load_from_file(&self, origin: &FileOrigin, loader: &ResourceLoader) -> Result<ResourceId> {
        self.load_directory(origin.path(), origin.clone().into(), loader)
    }
}

impl ManifestLoadable for DirectoryStorage {
    fn prefixes(&self) -> &[&'static str] {
        &[PREFIX]
    }

    fn load_from_manifest(
        &self,
        origin: &ManifestOrigin,
        loader: &ResourceLoader,
    ) -> Result<ResourceId> {
        let path = loader.locate(origin.require(1)?)?;

        let fs = loader.filesystem();
        if fs.exists(&path) && !fs.is_dir(&path) {
            return Err(Error::MalformedManifest(
                origin.to_string(),
                format!("{} is not a directory", path.display()),
            ));
        }

        self.load_directory(&path, origin.clone().into(), loader)
    }
}
