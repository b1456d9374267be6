//! Bitmaps decoded from image files.

use std::any::Any;
use std::path::Path;

use crate::errors::*;
use crate::res::loader::ResourceLoader;
use crate::res::origin::{FileOrigin, ManifestOrigin, Origin};
use crate::res::resource::ResourceId;
use crate::res::storage::{FileLoadable, ManifestLoadable, ResourceMap, Storage, Table};
use crate::res::vfs;

use super::bitmap_loader::{BitmapDecoder, ImageDecoder};

pub const NAME: &str = "bitmap";

pub const PREFIX: &str = "bitmap";

/// A decoded image with 8-bit RGBA pixels, row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Bitmap {
            width,
            height,
            pixels,
        }
    }
}

/// Stores bitmaps. The identifier of a bitmap is its file name.
///
/// Manifest entries look like `bitmap, <path>[, <id>]`.
pub struct BitmapStorage {
    resources: ResourceMap<Bitmap>,
    decoder: Box<dyn BitmapDecoder>,
    extensions: Vec<&'static str>,
}

impl Default for BitmapStorage {
    fn default() -> Self {
        BitmapStorage::new()
    }
}

impl BitmapStorage {
    /// Creates a storage decoding PNG, JPEG and BMP files.
    pub fn new() -> Self {
        Self::with_decoder(ImageDecoder::new(), &ImageDecoder::EXTENSIONS)
    }

    /// Creates a storage which accepts files with `extensions`, decoded by `decoder`.
    pub fn with_decoder<T>(decoder: T, extensions: &[&'static str]) -> Self
    where
        T: BitmapDecoder + 'static,
    {
        BitmapStorage {
            resources: ResourceMap::new(NAME),
            decoder: Box::new(decoder),
            extensions: extensions.to_vec(),
        }
    }

    /// Gets the bitmap value if available.
    #[inline]
    pub fn get<F: FnOnce(&Bitmap) -> R, R>(&self, id: &str, map: F) -> Option<R> {
        self.resources.value(id, map)
    }

    fn load_bitmap(
        &self,
        id: ResourceId,
        path: &Path,
        origin: Origin,
        loader: &ResourceLoader,
    ) -> Result<ResourceId> {
        loader.ensure_vacant(&id)?;

        let mut buf = Vec::new();
        loader.filesystem().read_to_end(path, &mut buf)?;

        let bitmap = self.decoder.decode(&buf).map_err(|err| match err {
            Error::Decode(_, reason) => Error::Decode(path.display().to_string(), reason),
            err => err,
        })?;

        self.resources.insert(id, origin, Vec::new(), bitmap)
    }
}

impl Storage for BitmapStorage {
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

impl FileLoadable for BitmapStorage {
    fn extensions(&self) -> &[&'static str] {
        &self.extensions
    }

    fn load_from_file(&self, origin: &FileOrigin, loader: &ResourceLoader) -> Result<ResourceId> {
        let id = ResourceId::from(vfs::base_name(origin.path()));
        self.load_bitmap(id, origin.path(), origin.clone().into(), loader)
    }
}

impl ManifestLoadable for BitmapStorage {
    fn prefixes(&self) -> &[&'static str] {
        &[PREFIX]
    }

    fn load_from_manifest(
        &self,
        origin: &ManifestOrigin,
        loader: &ResourceLoader,
    ) -> Result<ResourceId> {
        let path = loader.locate(origin.require(1)?)?;
        let id = match origin.argument(2) {
            Some(v) if !v.is_empty() => ResourceId::from(v),
            _ => ResourceId::from(vfs::base_name(&path)),
        };

        self.load_bitmap(id, &path, origin.clone().into(), loader)
    }
}
