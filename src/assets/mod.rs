//! Build-in storages of `Directory` and `Bitmap` resources.

pub mod bitmap;
pub mod bitmap_loader;
pub mod directory;

pub mod prelude {
    pub use super::bitmap::{Bitmap, BitmapStorage};
    pub use super::bitmap_loader::{BitmapDecoder, ImageDecoder};
    pub use super::directory::{Directory, DirectoryStorage};
}

use crate::errors::*;
use crate::res::master::ResourceMasterStorage;

/// Registers the build-in storages into `master`.
pub fn register(master: &mut ResourceMasterStorage) -> Result<()> {
    master.register(directory::DirectoryStorage::new())?;
    master.register(bitmap::BitmapStorage::new())?;
    Ok(())
}
