//! # What is This?
//!
//! Crayon-res is the resource subsystem of the crayon game framework. It loads named
//! resources (bitmaps, directories of resources, composite resources) from files or from
//! manifest entries, tracks the ownership between composite resources and their children,
//! and rebuilds resources in place from their origins for hot-reload.
//!
//! ```rust,ignore
//! use crayon_res::prelude::*;
//!
//! let mut master = ResourceMasterStorage::new();
//! crayon_res::assets::register(&mut master)?;
//!
//! let params = ResourceParams::default().shortcut("res:", "assets/");
//! let loader = ResourceLoader::new(params, master)?;
//!
//! let sprites = loader.load("res:sprites")?;
//! for child in loader.children(&sprites) {
//!     println!("{} belongs to {:?}", child, loader.parent(&child));
//! }
//!
//! // The files of `assets/sprites` changed on disk.
//! loader.reload(&sprites)?;
//! ```
//!
//! Please refer to the `res` module for details of origins, storages and ownership.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod errors;

pub mod assets;
pub mod res;

pub mod prelude;
