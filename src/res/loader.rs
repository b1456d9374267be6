//! The `ResourceLoader` is the single entry point of the resource system.
//!
//! It resolves bare file names and manifest lines into origins, routes them through the
//! `ResourceMasterStorage`, and owns the operations that work on the flat identifier space:
//! `reload`, `remove` and `resolve`. Storages get a reference to it whenever they load, so a
//! directory storage can load its children without knowing which storage accepts them.

use std::path::{Path, PathBuf};

use crate::errors::*;

use super::manifest::{self, Manifest};
use super::master::ResourceMasterStorage;
use super::origin::{FileOrigin, ManifestOrigin};
use super::resource::{ResourceId, ResourceInfo};
use super::shortcut::ShortcutResolver;
use super::storage::Storage;
use super::vfs::{Disk, FileSystem};
use super::ResourceParams;

pub struct ResourceLoader {
    master: ResourceMasterStorage,
    shortcuts: ShortcutResolver,
    fs: Box<dyn FileSystem>,
    separator: char,
}

impl ResourceLoader {
    /// Creates a new `ResourceLoader` working on the local host filesystem.
    pub fn new(params: ResourceParams, master: ResourceMasterStorage) -> Result<Self> {
        let fs = Disk::new(params.skip_hidden);
        Self::with_filesystem(params, master, fs)
    }

    /// Creates a new `ResourceLoader` enumerating and reading files through `fs`.
    pub fn with_filesystem<T: FileSystem + 'static>(
        params: ResourceParams,
        master: ResourceMasterStorage,
        fs: T,
    ) -> Result<Self> {
        let mut shortcuts = ShortcutResolver::new();
        for (k, v) in params.shortcuts {
            shortcuts.add(k, v)?;
        }

        Ok(ResourceLoader {
            master,
            shortcuts,
            fs: Box::new(fs),
            separator: params.manifest_separator,
        })
    }

    /// Loads the file or directory at `filename`, which may start with a shortcut.
    pub fn load<T: AsRef<str>>(&self, filename: T) -> Result<ResourceId> {
        let path = self.locate(filename)?;
        self.load_file(&FileOrigin::new(path))
    }

    /// Loads the resource declared by a single manifest line.
    pub fn load_line<T: AsRef<str>>(&self, line: T) -> Result<ResourceId> {
        let line = line.as_ref();
        let origin = Manifest::parse_line(manifest::INLINE, line, self.separator)?
            .ok_or_else(|| {
                Error::MalformedManifest(line.to_owned(), "the entry is empty".to_owned())
            })?;

        self.load_manifest_entry(&origin)
    }

    /// Loads every entry of the manifest file at `filename` in order.
    ///
    /// Loading stops at the first failure, and the entries loaded before it stay loaded.
    pub fn load_manifest<T: AsRef<str>>(&self, filename: T) -> Result<Vec<ResourceId>> {
        let path = self.locate(filename)?;

        let mut buf = Vec::new();
        self.fs.read_to_end(&path, &mut buf)?;
        let name = path.to_string_lossy();
        let text = String::from_utf8(buf).map_err(|err| {
            Error::MalformedManifest(name.to_string(), format!("not valid UTF-8 ({})", err))
        })?;

        let entries = Manifest::parse(&*name, &text, self.separator)?;
        info!("Loads {} entries of manifest {}.", entries.len(), name);

        entries
            .iter()
            .map(|v| self.load_manifest_entry(v))
            .collect()
    }

    /// Loads a resource from file origin.
    pub fn load_file(&self, origin: &FileOrigin) -> Result<ResourceId> {
        let id = self.master.load_file(origin, self)?;
        debug!("Loads resource {} from {}.", id, origin.path().display());
        Ok(id)
    }

    /// Loads a resource from manifest origin.
    pub fn load_manifest_entry(&self, origin: &ManifestOrigin) -> Result<ResourceId> {
        let id = self.master.load_manifest_entry(origin, self)?;
        debug!("Loads resource {} from {}.", id, origin);
        Ok(id)
    }

    /// Rebuilds the resource `id` from its origin. Does nothing if `id` does not exist.
    pub fn reload<T: AsRef<str>>(&self, id: T) -> Result<()> {
        let id = id.as_ref();
        match self.master.locate(id) {
            Some(storage) => storage.reload(id, self),
            None => Ok(()),
        }
    }

    /// Removes the resource `id` and all of its children.
    ///
    /// Identifiers held to them become stale, resolving them afterwards misses.
    pub fn remove<T: AsRef<str>>(&self, id: T) {
        self.detach(id.as_ref());
    }

    /// Gets a snapshot of the resource `id`.
    pub fn resolve<T: AsRef<str>>(&self, id: T) -> Option<ResourceInfo> {
        let id = id.as_ref();
        self.master.locate(id).and_then(|v| v.table().info(id))
    }

    /// Checks if the resource `id` exists.
    #[inline]
    pub fn contains<T: AsRef<str>>(&self, id: T) -> bool {
        self.master.locate(id.as_ref()).is_some()
    }

    /// Gets the parent of `id`, if both of them still exist.
    pub fn parent<T: AsRef<str>>(&self, id: T) -> Option<ResourceId> {
        self.resolve(id)
            .and_then(|v| v.parent)
            .filter(|v| self.contains(v))
    }

    /// Gets the children of `id` in order.
    pub fn children<T: AsRef<str>>(&self, id: T) -> Vec<ResourceId> {
        self.resolve(id).map(|v| v.children).unwrap_or_default()
    }

    /// Gets the identifiers of all the resources, grouped by storage.
    pub fn ids(&self) -> Vec<ResourceId> {
        self.master.storages().flat_map(|v| v.table().ids()).collect()
    }

    pub fn len(&self) -> usize {
        self.master.storages().map(|v| v.table().len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn master(&self) -> &ResourceMasterStorage {
        &self.master
    }

    /// Returns the registered storage of type `T`.
    #[inline]
    pub fn storage<T: Storage>(&self) -> Option<&T> {
        self.master.storage::<T>()
    }

    #[inline]
    pub fn filesystem(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }
}

/// Bookkeeping of the ownership graph, used by storages while they load.
impl ResourceLoader {
    /// Resolves the shortcuts of `filename` into a path.
    pub fn locate<T: AsRef<str>>(&self, filename: T) -> Result<PathBuf> {
        let filename = filename.as_ref();
        self.shortcuts
            .resolve(filename)
            .map(PathBuf::from)
            .ok_or_else(|| Error::UnresolvedShortcut(filename.to_owned()))
    }

    /// Fails with `DuplicateIdentifier` if any storage holds `id` already.
    pub fn ensure_vacant(&self, id: &ResourceId) -> Result<()> {
        if self.contains(id) {
            Err(Error::DuplicateIdentifier(id.clone()))
        } else {
            Ok(())
        }
    }

    /// Loads every entry of directory `location` in enumeration order.
    ///
    /// If any entry fails, the entries loaded before it are removed again and the error is
    /// returned.
    pub fn load_children(&self, location: &Path) -> Result<Vec<ResourceId>> {
        let mut children = Vec::new();

        let rsp = self.fs.for_each_entry(location, &mut |entry: &Path| {
            let child = self.load_file(&FileOrigin::new(entry))?;
            children.push(child);
            Ok(())
        });

        match rsp {
            Ok(_) => Ok(children),
            Err(err) => {
                warn!(
                    "Failed to load children of {}: {}.",
                    location.display(),
                    err
                );
                self.discard(&children);
                Err(err)
            }
        }
    }

    /// Links `children` to their new `parent`. Must be called after the parent has been
    /// inserted into its storage.
    pub fn adopt(&self, parent: &ResourceId, children: &[ResourceId]) {
        for child in children {
            if let Some(storage) = self.master.locate(child) {
                storage.table().set_parent(child, Some(parent.clone()));
            }
        }
    }

    /// Removes `children` that never got a parent, in reverse order of loading.
    pub fn discard(&self, children: &[ResourceId]) {
        for child in children.iter().rev() {
            warn!("Discards resource {}.", child);
            self.detach(child);
        }
    }

    /// Removes `id` with its children, and unlinks it from its parent. Returns the parent and
    /// the position `id` had in its child list.
    pub(crate) fn detach(&self, id: &str) -> Option<(ResourceId, usize)> {
        let info = self.master.locate(id)?.table().take(id)?;
        debug!("Removes resource {}.", id);

        for child in &info.children {
            let owned = self
                .master
                .locate(child)
                .and_then(|v| v.table().info(child))
                .map(|v| v.parent.as_ref() == Some(&info.id))
                .unwrap_or(false);

            if owned {
                self.detach(child);
            }
        }

        let parent = info.parent?;
        let index = self
            .master
            .locate(&parent)?
            .table()
            .detach_child(&parent, id)?;

        Some((parent, index))
    }

    /// Puts `child` back into the child list of `parent`.
    pub(crate) fn reattach(&self, parent: &ResourceId, child: ResourceId, index: usize) {
        let attached = self
            .master
            .locate(parent)
            .map(|v| v.table().attach_child(parent, child.clone(), index))
            .unwrap_or(false);

        if attached {
            self.adopt(parent, &[child]);
        }
    }
}
