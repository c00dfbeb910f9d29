//! Path resolution against a tree snapshot.
//!
//! A request path is trimmed of leading/trailing slashes and split into
//! segments, then walked left to right through the tree one store lookup per
//! segment. Trees are content-addressed and form a DAG, so the walk always
//! terminates in at most `segments.len()` steps.

use std::fmt;

use percent_encoding::percent_decode_str;

use crate::error::{AppError, Result};
use crate::store::{ContentStore, Entry, EntryKind, ObjectId};

/// A request path after trimming separators. An empty segment list addresses
/// the snapshot root. Whether the raw path ended in `/` is kept separately
/// because it decides the directory redirect, not the resolution.
#[derive(Debug, Clone)]
pub struct RequestPath {
    segments: Vec<String>,
    trailing_slash: bool,
}

impl RequestPath {
    pub fn parse(raw: &str) -> Self {
        // Browsers request the listing's links percent-encoded; entry names
        // in the store are not. Decode before matching.
        let raw = percent_decode_str(raw).decode_utf8_lossy();
        let trimmed = raw.trim_matches('/');
        let segments = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').map(str::to_owned).collect()
        };
        Self {
            segments,
            trailing_slash: raw.ends_with('/'),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Walk `path` through the snapshot rooted at `root_tree`.
///
/// Returns the terminal entry, which is always a `Blob` or a `Tree`. A
/// missing or empty segment yields `NotFound`; a blob in a non-terminal
/// position or any other entry kind yields `InvalidType`. The caller handles
/// the empty path (snapshot root) itself.
pub fn resolve(
    store: &dyn ContentStore,
    root_tree: &ObjectId,
    path: &RequestPath,
) -> Result<Entry> {
    let segments = path.segments();
    let mut tree = root_tree.clone();

    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            return Err(AppError::NotFound(path.to_string()));
        }
        let entry = store
            .tree_entries(&tree)?
            .into_iter()
            .find(|e| e.name == *segment)
            .ok_or_else(|| AppError::NotFound(path.to_string()))?;

        let last = i + 1 == segments.len();
        match entry.kind {
            EntryKind::Blob | EntryKind::Tree if last => return Ok(entry),
            EntryKind::Tree => tree = entry.id,
            kind => {
                return Err(AppError::InvalidType {
                    path: path.to_string(),
                    kind,
                });
            }
        }
    }

    Err(AppError::NotFound(path.to_string()))
}
