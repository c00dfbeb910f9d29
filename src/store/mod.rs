//! Content-addressable object store abstraction.
//!
//! The server only ever reads: a reference resolves to a commit, a commit
//! owns a root tree, trees map names to entries, blobs hold bytes. The
//! `ContentStore` trait captures exactly those four lookups so the resolver
//! and dispatcher never touch git2 directly and tests can substitute an
//! in-memory store.

pub mod git;

pub use git::GitStore;

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// Opaque handle into the store. For the git backend this is a hex oid;
/// the core never inspects it beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Blob,
    Tree,
    Submodule,
    Unknown,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::Blob => "blob",
            EntryKind::Tree => "tree",
            EntryKind::Submodule => "submodule",
            EntryKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One named child of a tree. Immutable once obtained.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub id: ObjectId,
}

/// Read-only capability over the object store. All methods are safe for
/// concurrent use; nothing here mutates the store.
pub trait ContentStore: Send + Sync {
    /// Resolve a symbolic reference (e.g. `HEAD`, `refs/heads/main`) to the
    /// commit it currently points at.
    fn resolve_reference(&self, name: &str) -> Result<ObjectId>;

    /// Root tree of a commit.
    fn commit_tree(&self, commit: &ObjectId) -> Result<ObjectId>;

    /// Immediate children of a tree, in store order.
    fn tree_entries(&self, tree: &ObjectId) -> Result<Vec<Entry>>;

    /// Raw bytes of a blob.
    fn blob_content(&self, blob: &ObjectId) -> Result<Vec<u8>>;
}

pub type SharedStore = Arc<dyn ContentStore>;
