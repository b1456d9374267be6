//! Plain-text manifests which declare resources line by line.
//!
//! ```sh
//! # sprites of the title screen
//! directory, res:sprites
//! bitmap, res:logo.png, logo
//! ```
//!
//! Every line is an entry, with fields split by a separator (`,` by default). The first
//! field is the prefix that selects a storage, the remaining ones are handed to that storage
//! as they are. Blank lines and lines starting with `#` are ignored.

use crate::errors::*;

use super::origin::ManifestOrigin;

pub const COMMENT: char = '#';

/// Name given to entries that are not read from any manifest file.
pub const INLINE: &str = "inline";

pub struct Manifest;

impl Manifest {
    /// Parses every entry of `text`, naming them after the manifest `name`.
    pub fn parse<T: AsRef<str>>(
        name: T,
        text: &str,
        separator: char,
    ) -> Result<Vec<ManifestOrigin>> {
        let name = name.as_ref();
        let mut entries = Vec::new();

        for line in text.lines() {
            if let Some(entry) = Self::parse_line(name, line, separator)? {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Parses a single line. Returns `None` for blank lines and comments.
    pub fn parse_line<T: AsRef<str>>(
        name: T,
        line: &str,
        separator: char,
    ) -> Result<Option<ManifestOrigin>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            return Ok(None);
        }

        let arguments: Vec<&str> = line.split(separator).map(|v| v.trim()).collect();
        if arguments[0].is_empty() {
            return Err(Error::MalformedManifest(
                line.to_owned(),
                "the prefix is empty".to_owned(),
            ));
        }

        Ok(Some(ManifestOrigin::new(name.as_ref(), arguments)))
    }
}
