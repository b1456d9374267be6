//! Descriptors of where a resource comes from.
//!
//! An `Origin` is the only state needed to build a resource from scratch, so every resource
//! keeps the origin it was created from and hands it back to its storage on reload.

use std::fmt;
use std::path::{Path, PathBuf};

use smallvec::SmallVec;

use crate::errors::*;

/// Arguments of a manifest entry. Most entries carry a prefix and one or two parameters.
pub type ManifestArguments = SmallVec<[String; 4]>;

/// A resource loaded from a file or directory on the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileOrigin {
    path: PathBuf,
}

impl FileOrigin {
    pub fn new<T: Into<PathBuf>>(path: T) -> Self {
        FileOrigin { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the lower-cased extension of the path, or an empty string if there is none.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .and_then(|v| v.to_str())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

/// A resource declared by one entry of a manifest.
///
/// Arguments are positional. The first one is the prefix which selects the storage, the
/// meaning of the rest is up to that storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManifestOrigin {
    name: String,
    arguments: ManifestArguments,
}

impl ManifestOrigin {
    pub fn new<T1, T2, I>(name: T1, arguments: I) -> Self
    where
        T1: Into<String>,
        T2: Into<String>,
        I: IntoIterator<Item = T2>,
    {
        ManifestOrigin {
            name: name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// The name of the manifest this entry belongs to.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The leading keyword of this entry.
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.argument(0)
    }

    #[inline]
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(|v| v.as_str())
    }

    /// Returns the argument at `index`, failing with `MalformedManifest` if it is missing or
    /// empty.
    pub fn require(&self, index: usize) -> Result<&str> {
        match self.argument(index) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(Error::MalformedManifest(
                self.to_string(),
                format!("argument {} is required", index),
            )),
        }
    }
}

impl fmt::Display for ManifestOrigin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:[{}]", self.name, self.arguments.join(", "))
    }
}

/// Where a resource comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    File(FileOrigin),
    Manifest(ManifestOrigin),
}

impl From<FileOrigin> for Origin {
    fn from(v: FileOrigin) -> Self {
        Origin::File(v)
    }
}

impl From<ManifestOrigin> for Origin {
    fn from(v: ManifestOrigin) -> Self {
        Origin::Manifest(v)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Origin::File(ref v) => write!(f, "{}", v.path.display()),
            Origin::Manifest(ref v) => write!(f, "{}", v),
        }
    }
}
