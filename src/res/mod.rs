//! The resource system loads named resources from the filesystem or from manifests, keeps
//! track of the ownership between composite resources and their children, and rebuilds them
//! in place when their files change.
//!
//! # Origin
//!
//! Every resource remembers where it came from, which is either a file path or an entry of
//! a manifest. The `Origin` is all that is needed to build the resource again, so reloading
//! a resource is simply loading its origin another time.
//!
//! # Storage
//!
//! Resources of one family (bitmaps, directories, ...) live in one `Storage`, which owns the
//! `id -> Resource` map of that family. A storage declares what it could be loaded from:
//! a set of file extensions (`FileLoadable`), a set of manifest prefixes (`ManifestLoadable`),
//! or both.
//!
//! Composite resources, such like directories, own an ordered list of children. Children
//! are loaded recursively through the `ResourceLoader` and stored by whichever storage
//! accepts them, while the composite keeps their identifiers. The `parent` of a child is an
//! identifier as well, so a child never keeps its parent alive.
//!
//! # Location
//!
//! File names handed to the `ResourceLoader` could start with a shortcut, a path alias that
//! is resolved into a full path before anything is loaded.
//!
//! ```sh
//! "res:sprites/crate.png" => "/Applications/My Game/assets/sprites/crate.png"
//! ```
//!
//! # Identifier
//!
//! A resource is identified by a `ResourceId`, derived by its storage from the origin (e.g.
//! the last component of its path). Identifiers are unique across all storages; loading a
//! resource whose identifier exists already fails instead of shadowing the existing one.
//!
//! # Ownership & Lifetime
//!
//! A resource has exactly one owner, its entry in the storage map. It is created by a load
//! request, rebuilt by `reload` and destroyed by `remove`. Removing a composite resource
//! removes its children as well.

pub mod loader;
pub mod manifest;
pub mod master;
pub mod origin;
pub mod resource;
pub mod shortcut;
pub mod storage;
pub mod vfs;

pub mod prelude {
    pub use super::loader::ResourceLoader;
    pub use super::master::ResourceMasterStorage;
    pub use super::origin::{FileOrigin, ManifestOrigin, Origin};
    pub use super::resource::{Resource, ResourceId, ResourceInfo};
    pub use super::storage::{FileLoadable, ManifestLoadable, ResourceMap, Storage, Table};
    pub use super::vfs::{Disk, FileSystem};
    pub use super::ResourceParams;
}

use std::collections::BTreeMap;
use std::io::Read;

use crate::errors::*;

/// The setup parameters of the resource system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceParams {
    /// Path aliases, e.g. `"res:" => "assets/"`.
    pub shortcuts: BTreeMap<String, String>,
    /// Ignores files and directories whose name starts with a dot when enumerating.
    pub skip_hidden: bool,
    /// The separator of fields in manifest entries.
    pub manifest_separator: char,
}

impl Default for ResourceParams {
    fn default() -> Self {
        ResourceParams {
            shortcuts: BTreeMap::new(),
            skip_hidden: true,
            manifest_separator: ',',
        }
    }
}

impl ResourceParams {
    /// Reads parameters from JSON, missing fields keep their default value.
    pub fn from_json<T: Read>(file: T) -> Result<Self> {
        Ok(serde_json::from_reader(file)?)
    }

    /// Adds a path alias.
    pub fn shortcut<T1, T2>(mut self, shortcut: T1, fullname: T2) -> Self
    where
        T1: Into<String>,
        T2: Into<String>,
    {
        self.shortcuts.insert(shortcut.into(), fullname.into());
        self
    }
}
