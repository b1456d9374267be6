//! The `ResourceMasterStorage` aggregates all the storages behind two dispatch tables, which
//! are built once by registration before the `ResourceLoader` takes over:
//!
//! 1. file extension => `FileLoadable` storage;
//! 2. manifest prefix => `ManifestLoadable` storage.
//!
//! It routes requests but never owns resources itself.

use std::collections::HashMap;

use inlinable_string::InlinableString;

use crate::errors::*;

use super::loader::ResourceLoader;
use super::origin::{FileOrigin, ManifestOrigin};
use super::resource::ResourceId;
use super::storage::Storage;

#[derive(Default)]
pub struct ResourceMasterStorage {
    storages: Vec<Box<dyn Storage>>,
    extensions: HashMap<InlinableString, usize>,
    prefixes: HashMap<InlinableString, usize>,
}

impl ResourceMasterStorage {
    /// Creates a new master storage without any storage registered.
    pub fn new() -> Self {
        ResourceMasterStorage::default()
    }

    /// Registers a storage with the extensions and prefixes it declares.
    ///
    /// Fails with `DuplicateRegistration` if its name, or any of its extensions or prefixes,
    /// is claimed by another storage. Nothing is registered in that case.
    pub fn register<T: Storage>(&mut self, storage: T) -> Result<()> {
        let name = storage.name();
        if self.storages.iter().any(|v| v.name() == name) {
            return Err(Error::DuplicateRegistration(format!("Storage {}", name)));
        }

        let extensions = Self::keys(
            &self.extensions,
            storage.as_file_loadable().map(|v| v.extensions()),
            "Extension",
        )?;

        let prefixes = Self::keys(
            &self.prefixes,
            storage.as_manifest_loadable().map(|v| v.prefixes()),
            "Prefix",
        )?;

        let index = self.storages.len();
        for v in &extensions {
            info!("Registers extension '{}' to storage {}.", v, name);
            self.extensions.insert(v.clone(), index);
        }

        for v in &prefixes {
            info!("Registers prefix '{}' to storage {}.", v, name);
            self.prefixes.insert(v.clone(), index);
        }

        self.storages.push(Box::new(storage));
        Ok(())
    }

    fn keys(
        table: &HashMap<InlinableString, usize>,
        declared: Option<&[&'static str]>,
        kind: &str,
    ) -> Result<Vec<InlinableString>> {
        let mut keys: Vec<InlinableString> = Vec::new();
        for v in declared.unwrap_or_default() {
            let key = InlinableString::from(v.to_ascii_lowercase().as_str());
            if table.contains_key(&key) || keys.contains(&key) {
                return Err(Error::DuplicateRegistration(format!("{} '{}'", kind, key)));
            }

            keys.push(key);
        }

        Ok(keys)
    }

    /// Loads a resource from file, with the storage registered for its extension.
    pub fn load_file(&self, origin: &FileOrigin, loader: &ResourceLoader) -> Result<ResourceId> {
        let extension = origin.extension();
        let storage = self
            .extensions
            .get(&InlinableString::from(extension.as_str()))
            .and_then(|&index| self.storages[index].as_file_loadable())
            .ok_or_else(|| Error::UnregisteredExtension(extension.clone()))?;

        storage.load_from_file(origin, loader)
    }

    /// Loads a resource from manifest entry, with the storage registered for its prefix.
    pub fn load_manifest_entry(
        &self,
        origin: &ManifestOrigin,
        loader: &ResourceLoader,
    ) -> Result<ResourceId> {
        let prefix = match origin.prefix() {
            Some(v) if !v.is_empty() => v.to_ascii_lowercase(),
            _ => {
                return Err(Error::MalformedManifest(
                    origin.to_string(),
                    "the prefix is empty".to_owned(),
                ));
            }
        };

        let storage = self
            .prefixes
            .get(&InlinableString::from(prefix.as_str()))
            .and_then(|&index| self.storages[index].as_manifest_loadable())
            .ok_or_else(|| Error::UnregisteredPrefix(prefix.clone()))?;

        storage.load_from_manifest(origin, loader)
    }

    /// Returns the storage which holds resource `id`.
    pub fn locate(&self, id: &str) -> Option<&dyn Storage> {
        self.storages
            .iter()
            .find(|v| v.table().contains(id))
            .map(|v| v.as_ref())
    }

    /// Returns the storage registered with `name`.
    pub fn storage_by_name(&self, name: &str) -> Option<&dyn Storage> {
        self.storages
            .iter()
            .find(|v| v.name() == name)
            .map(|v| v.as_ref())
    }

    /// Returns the registered storage of type `T`.
    pub fn storage<T: Storage>(&self) -> Option<&T> {
        self.storages
            .iter()
            .filter_map(|v| v.as_any().downcast_ref::<T>())
            .next()
    }

    /// Visits all the registered storages in registration order.
    pub fn storages(&self) -> impl Iterator<Item = &dyn Storage> {
        self.storages.iter().map(|v| v.as_ref())
    }
}
