//! Central registry for shortcut definitions. Shortcuts are path aliases that
//! could be resolved into full path.

use std::collections::HashMap;

use crate::errors::*;

/// Central registry for shortcut definitions. Shortcuts are path aliases that
/// could be resolved into full path.
#[derive(Debug, Default, Clone)]
pub struct ShortcutResolver {
    registry: HashMap<String, String>,
}

impl ShortcutResolver {
    /// Creates a new shortcut registry.
    pub fn new() -> Self {
        ShortcutResolver {
            registry: HashMap::new(),
        }
    }

    /// Add or replace a shortcut definition.
    pub fn add<T1, T2>(&mut self, shortcut: T1, fullname: T2) -> Result<()>
    where
        T1: Into<String>,
        T2: Into<String>,
    {
        let shortcut = shortcut.into();
        let fullname = fullname.into();

        if !shortcut.ends_with(':') {
            return Err(Error::MalformedShortcut(format!(
                "Shortcut {} MUST ends with a colon (':')",
                shortcut
            )));
        }

        if shortcut.len() < 2 {
            return Err(Error::MalformedShortcut(format!(
                "Shortcut {} MUST have a name before the colon (':')",
                shortcut
            )));
        }

        if !fullname.ends_with(':') && !fullname.ends_with('/') {
            return Err(Error::MalformedShortcut(format!(
                "Fullname {} must end in a '/' (dir) or ':' (other shortcut)",
                fullname
            )));
        }

        self.registry.insert(shortcut, fullname);
        Ok(())
    }

    /// Checks if a shortcut exists.
    #[inline]
    pub fn has<T: AsRef<str>>(&self, shortcut: T) -> bool {
        self.registry.contains_key(shortcut.as_ref())
    }

    /// Resolve shortcuts in the provided string recursively and return None if an alias is
    /// undefined. Paths without alias are returned as they are. A single letter followed by
    /// a colon is a drive letter unless it has been registered as a shortcut.
    pub fn resolve<T: AsRef<str>>(&self, src: T) -> Option<String> {
        let mut dst = src.as_ref().to_string();
        // Bounds the expansion of shortcuts that refer to each other.
        let mut depth = self.registry.len() + 1;

        while let Some(index) = dst.find(':') {
            // Schema letters, e.g. file://.
            if dst[index..].starts_with("://") {
                break;
            }

            let fullname = match self.registry.get(&dst[0..=index]) {
                Some(fullname) => fullname,
                // DOS drive letters, e.g. C:\.
                None if index < 2 => break,
                None => return None,
            };

            dst.replace_range(0..=index, fullname);

            depth -= 1;
            if depth == 0 {
                return None;
            }
        }

        Some(dst)
    }
}
