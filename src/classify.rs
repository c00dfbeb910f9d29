//! Content classification: decide how a resolved entry is served.

use crate::store::{Entry, EntryKind, ObjectId};

/// File name suffixes served as rendered documents. Matched case-sensitively.
pub const DOCUMENT_SUFFIXES: [&str; 2] = [".md", ".markdown"];

/// What the dispatcher should do with a resolved entry. The root path never
/// reaches classification; the dispatcher lists the root tree directly.
#[derive(Debug)]
pub enum Action {
    /// Serve a listing of the tree's immediate children.
    ListTree(ObjectId),
    /// Directory addressed without a trailing slash; redirect so relative
    /// links in the listing resolve against the directory.
    RedirectToSlash,
    /// Transform the blob to HTML and wrap it in the page shell.
    RenderDocument(Entry),
    /// Stream the blob's bytes unchanged.
    StreamRaw(Entry),
    /// Entry kind outside {Blob, Tree}.
    Unsupported(EntryKind),
}

pub fn classify(entry: Entry, had_trailing_slash: bool) -> Action {
    match entry.kind {
        EntryKind::Tree if !had_trailing_slash => Action::RedirectToSlash,
        EntryKind::Tree => Action::ListTree(entry.id),
        EntryKind::Blob if is_document(&entry.name) => Action::RenderDocument(entry),
        EntryKind::Blob => Action::StreamRaw(entry),
        kind => Action::Unsupported(kind),
    }
}

fn is_document(name: &str) -> bool {
    DOCUMENT_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fake::{blob_entry, submodule_entry, tree_entry};

    #[test]
    fn tree_without_slash_redirects() {
        let action = classify(tree_entry("docs", "t-docs"), false);
        assert!(matches!(action, Action::RedirectToSlash));
    }

    #[test]
    fn tree_with_slash_lists() {
        match classify(tree_entry("docs", "t-docs"), true) {
            Action::ListTree(id) => assert_eq!(id, ObjectId::new("t-docs")),
            other => panic!("expected ListTree, got {other:?}"),
        }
    }

    #[test]
    fn markdown_suffixes_render() {
        for name in ["readme.md", "readme.markdown"] {
            let action = classify(blob_entry(name, "b-1"), false);
            assert!(matches!(action, Action::RenderDocument(_)), "{name}");
        }
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let action = classify(blob_entry("README.MD", "b-1"), false);
        assert!(matches!(action, Action::StreamRaw(_)));
    }

    #[test]
    fn other_blobs_stream_raw() {
        let action = classify(blob_entry("notes.txt", "b-1"), false);
        assert!(matches!(action, Action::StreamRaw(_)));
    }

    #[test]
    fn trailing_slash_does_not_change_blob_handling() {
        let action = classify(blob_entry("notes.txt", "b-1"), true);
        assert!(matches!(action, Action::StreamRaw(_)));
    }

    #[test]
    fn submodule_is_unsupported() {
        let action = classify(submodule_entry("vendored", "c-1"), true);
        assert!(matches!(action, Action::Unsupported(EntryKind::Submodule)));
    }
}
