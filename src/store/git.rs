use git2::{ObjectType, Oid, Repository};
use std::path::Path;
use std::sync::Mutex;

use crate::error::{AppError, Result};
use crate::store::{ContentStore, Entry, EntryKind, ObjectId};

/// git2-backed `ContentStore`. `git2::Repository` is not `Sync`, so access
/// goes through a mutex; every lookup is short-lived.
pub struct GitStore {
    repo: Mutex<Repository>,
}

impl GitStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let repo = Repository::discover(&path)
            .map_err(|e| AppError::Config(format!("cannot open repository at {path_str}: {e}")))?;

        Ok(Self {
            repo: Mutex::new(repo),
        })
    }

    fn with_repo<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Repository) -> Result<T>,
    {
        let repo = self
            .repo
            .lock()
            .map_err(|_| AppError::Internal("Lock poisoned".to_string()))?;
        f(&repo)
    }
}

fn parse_oid(id: &ObjectId) -> Result<Oid> {
    Ok(Oid::from_str(id.as_str())?)
}

fn entry_kind(kind: Option<ObjectType>) -> EntryKind {
    match kind {
        Some(ObjectType::Blob) => EntryKind::Blob,
        Some(ObjectType::Tree) => EntryKind::Tree,
        Some(ObjectType::Commit) => EntryKind::Submodule,
        _ => EntryKind::Unknown,
    }
}

impl ContentStore for GitStore {
    fn resolve_reference(&self, name: &str) -> Result<ObjectId> {
        self.with_repo(|repo| {
            let reference = repo.find_reference(name)?;
            let resolved = reference.resolve()?;
            let oid = resolved
                .target()
                .ok_or_else(|| AppError::Config(format!("reference {name:?} has no target")))?;
            Ok(ObjectId::new(oid.to_string()))
        })
    }

    fn commit_tree(&self, commit: &ObjectId) -> Result<ObjectId> {
        self.with_repo(|repo| {
            let commit = repo.find_commit(parse_oid(commit)?)?;
            Ok(ObjectId::new(commit.tree_id().to_string()))
        })
    }

    fn tree_entries(&self, tree: &ObjectId) -> Result<Vec<Entry>> {
        self.with_repo(|repo| {
            let tree = repo.find_tree(parse_oid(tree)?)?;
            let entries = tree
                .iter()
                .map(|entry| Entry {
                    name: String::from_utf8_lossy(entry.name_bytes()).to_string(),
                    kind: entry_kind(entry.kind()),
                    id: ObjectId::new(entry.id().to_string()),
                })
                .collect();
            Ok(entries)
        })
    }

    fn blob_content(&self, blob: &ObjectId) -> Result<Vec<u8>> {
        self.with_repo(|repo| {
            let blob = repo.find_blob(parse_oid(blob)?)?;
            Ok(blob.content().to_vec())
        })
    }
}
