//! Loaded resources and the identifiers used to refer to them.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use super::origin::Origin;

/// The unique identifier of a resource.
///
/// Identifiers are handed out instead of references. Holding one never keeps the resource
/// alive; resolving it after the resource has been removed simply misses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(String);

impl ResourceId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ResourceId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for ResourceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for ResourceId {
    fn from(v: &'a str) -> Self {
        ResourceId(v.to_owned())
    }
}

impl From<String> for ResourceId {
    fn from(v: String) -> Self {
        ResourceId(v)
    }
}

impl PartialEq<str> for ResourceId {
    fn eq(&self, rhs: &str) -> bool {
        self.0 == rhs
    }
}

impl<'a> PartialEq<&'a str> for ResourceId {
    fn eq(&self, rhs: &&'a str) -> bool {
        self.0 == *rhs
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A snapshot of the ownership graph fields of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    pub id: ResourceId,
    pub origin: Origin,
    pub parent: Option<ResourceId>,
    pub children: Vec<ResourceId>,
    pub storage: &'static str,
}

/// A loaded resource, owned by exactly one storage.
///
/// `parent` and `children` are edges of the ownership graph expressed as identifiers, they
/// are resolved through the loader whenever they are followed.
#[derive(Debug)]
pub struct Resource<T> {
    id: ResourceId,
    origin: Origin,
    parent: Option<ResourceId>,
    children: Vec<ResourceId>,
    storage: &'static str,
    value: T,
}

impl<T> Resource<T> {
    pub fn new<O: Into<Origin>>(
        id: ResourceId,
        origin: O,
        storage: &'static str,
        children: Vec<ResourceId>,
        value: T,
    ) -> Self {
        Resource {
            id,
            origin: origin.into(),
            parent: None,
            children,
            storage,
            value,
        }
    }

    #[inline]
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    #[inline]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    #[inline]
    pub fn parent(&self) -> Option<&ResourceId> {
        self.parent.as_ref()
    }

    #[inline]
    pub fn children(&self) -> &[ResourceId] {
        &self.children
    }

    /// The name of the storage which owns this resource.
    #[inline]
    pub fn storage(&self) -> &'static str {
        self.storage
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn info(&self) -> ResourceInfo {
        ResourceInfo {
            id: self.id.clone(),
            origin: self.origin.clone(),
            parent: self.parent.clone(),
            children: self.children.clone(),
            storage: self.storage,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ResourceId>) {
        self.parent = parent;
    }

    pub(crate) fn detach_child(&mut self, child: &str) -> Option<usize> {
        let index = self.children.iter().position(|v| v == child)?;
        self.children.remove(index);
        Some(index)
    }

    pub(crate) fn attach_child(&mut self, child: ResourceId, index: usize) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }
}
