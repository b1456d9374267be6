//! # Storage
//!
//! A storage owns every resource of one family, keyed by `ResourceId`. It declares what it
//! can be loaded from through two independent capabilities:
//!
//! 1. `FileLoadable`, for file origins whose extension is in a declared set;
//! 2. `ManifestLoadable`, for manifest entries whose prefix is in a declared set.
//!
//! A storage may implement either, both, or neither. Composite storages load their children
//! by calling back into the `ResourceLoader`, so they never need to know which storage ends
//! up accepting a child.
//!
//! ## Interior Mutability
//!
//! Loading is a synchronous call-tree which may re-enter the storage it started from (e.g. a
//! directory inside a directory). Storages are therefore driven through shared references and
//! keep their map in a `RefCell`. A borrow of the map is never held across a call into the
//! loader.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::errors::*;

use super::loader::ResourceLoader;
use super::origin::{FileOrigin, ManifestOrigin, Origin};
use super::resource::{Resource, ResourceId, ResourceInfo};

/// Type-erased access to the ownership graph fields of a storage's resources.
pub trait Table {
    fn contains(&self, id: &str) -> bool;
    fn info(&self, id: &str) -> Option<ResourceInfo>;
    fn ids(&self) -> Vec<ResourceId>;
    fn len(&self) -> usize;

    /// Removes the resource from the map, dropping its value.
    fn take(&self, id: &str) -> Option<ResourceInfo>;

    /// Sets the parent link of `id`. Returns false if `id` is not stored here.
    fn set_parent(&self, id: &str, parent: Option<ResourceId>) -> bool;

    /// Removes `child` from the child list of `id`, returning its former position.
    fn detach_child(&self, id: &str, child: &str) -> Option<usize>;

    /// Inserts `child` into the child list of `id` at `index` (clamped to the list length).
    fn attach_child(&self, id: &str, child: ResourceId, index: usize) -> bool;

    fn origin(&self, id: &str) -> Option<Origin> {
        self.info(id).map(|v| v.origin)
    }
}

pub trait Storage: Any {
    /// The unique name of this storage, recorded in every resource it owns.
    fn name(&self) -> &'static str;

    fn table(&self) -> &dyn Table;

    fn as_any(&self) -> &dyn Any;

    fn as_file_loadable(&self) -> Option<&dyn FileLoadable> {
        None
    }

    fn as_manifest_loadable(&self) -> Option<&dyn ManifestLoadable> {
        None
    }

    /// Rebuilds the resource `id` in place from its stored origin.
    ///
    /// The old resource and its children are removed first, then the origin is loaded again
    /// and the result is put back at the same position of its former parent. Reloading an
    /// unknown identifier does nothing.
    fn reload(&self, id: &str, loader: &ResourceLoader) -> Result<()> {
        let origin = match self.table().origin(id) {
            Some(origin) => origin,
            None => return Ok(()),
        };

        debug!("Reloads resource {} from {}.", id, origin);
        let slot = loader.detach(id);

        let reloaded = match origin {
            Origin::File(ref file) => self
                .as_file_loadable()
                .ok_or_else(|| Error::UnregisteredExtension(file.extension()))?
                .load_from_file(file, loader)?,
            Origin::Manifest(ref manifest) => self
                .as_manifest_loadable()
                .ok_or_else(|| {
                    Error::UnregisteredPrefix(manifest.prefix().unwrap_or_default().to_owned())
                })?
                .load_from_manifest(manifest, loader)?,
        };

        if let Some((parent, index)) = slot {
            loader.reattach(&parent, reloaded, index);
        }

        Ok(())
    }
}

pub trait FileLoadable: Storage {
    /// Lower-cased file extensions this storage accepts. An empty string matches paths
    /// without any extension.
    fn extensions(&self) -> &[&'static str];

    fn load_from_file(&self, origin: &FileOrigin, loader: &ResourceLoader) -> Result<ResourceId>;
}

pub trait ManifestLoadable: Storage {
    /// Lower-cased manifest prefixes this storage accepts.
    fn prefixes(&self) -> &[&'static str];

    fn load_from_manifest(
        &self,
        origin: &ManifestOrigin,
        loader: &ResourceLoader,
    ) -> Result<ResourceId>;
}

/// The `id -> Resource` map of a storage.
pub struct ResourceMap<T> {
    storage: &'static str,
    items: RefCell<HashMap<ResourceId, Resource<T>>>,
}

impl<T> ResourceMap<T> {
    /// Creates a new and empty map owned by the storage named `storage`.
    pub fn new(storage: &'static str) -> Self {
        ResourceMap {
            storage,
            items: RefCell::new(HashMap::new()),
        }
    }

    /// Inserts a fully built resource.
    ///
    /// Fails with `DuplicateIdentifier` if `id` exists already, in which case nothing is
    /// inserted and the existing resource is left untouched.
    pub fn insert<O: Into<Origin>>(
        &self,
        id: ResourceId,
        origin: O,
        children: Vec<ResourceId>,
        value: T,
    ) -> Result<ResourceId> {
        let mut items = self.items.borrow_mut();
        if items.contains_key(&id) {
            return Err(Error::DuplicateIdentifier(id));
        }

        let resource = Resource::new(id.clone(), origin, self.storage, children, value);
        items.insert(id.clone(), resource);
        Ok(id)
    }

    /// Gets the resource value if available.
    #[inline]
    pub fn get<F: FnOnce(&Resource<T>) -> R, R>(&self, id: &str, map: F) -> Option<R> {
        self.items.borrow().get(id).map(map)
    }

    /// Gets the resource value if available.
    #[inline]
    pub fn value<F: FnOnce(&T) -> R, R>(&self, id: &str, map: F) -> Option<R> {
        self.get(id, |v| map(v.value()))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl<T> Table for ResourceMap<T> {
    #[inline]
    fn contains(&self, id: &str) -> bool {
        self.items.borrow().contains_key(id)
    }

    fn info(&self, id: &str) -> Option<ResourceInfo> {
        self.items.borrow().get(id).map(|v| v.info())
    }

    fn ids(&self) -> Vec<ResourceId> {
        let mut ids: Vec<_> = self.items.borrow().keys().cloned().collect();
        ids.sort();
        ids
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.borrow().len()
    }

    fn take(&self, id: &str) -> Option<ResourceInfo> {
        self.items.borrow_mut().remove(id).map(|v| v.info())
    }

    fn set_parent(&self, id: &str, parent: Option<ResourceId>) -> bool {
        match self.items.borrow_mut().get_mut(id) {
            Some(resource) => {
                resource.set_parent(parent);
                true
            }
            None => false,
        }
    }

    fn detach_child(&self, id: &str, child: &str) -> Option<usize> {
        self.items
            .borrow_mut()
            .get_mut(id)
            .and_then(|v| v.detach_child(child))
    }

    fn attach_child(&self, id: &str, child: ResourceId, index: usize) -> bool {
        match self.items.borrow_mut().get_mut(id) {
            Some(resource) => {
                resource.attach_child(child, index);
                true
            }
            None => false,
        }
    }
}
