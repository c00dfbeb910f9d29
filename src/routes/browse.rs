use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::classify::{classify, Action};
use crate::error::{AppError, Result};
use crate::render::{render_document, render_listing};
use crate::resolve::{resolve, RequestPath};
use crate::routes::AppState;
use crate::store::{Entry, ObjectId};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf8";

/// Catch-all browse handler: resolve the reference to a snapshot, walk the
/// request path, classify the terminal entry and respond. The reference is
/// looked up fresh on every request so a moving reference is picked up
/// without restarting.
pub(super) async fn browse(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    let commit = state
        .store
        .resolve_reference(&state.reference)
        .map_err(|e| AppError::Config(format!("resolving reference {:?}: {e}", state.reference)))?;
    let root = state
        .store
        .commit_tree(&commit)
        .map_err(|e| AppError::Config(format!("loading commit {commit}: {e}")))?;

    let raw_path = uri.path();
    let path = RequestPath::parse(raw_path);

    if path.is_root() {
        return list_tree(&state, &root);
    }

    let entry = resolve(state.store.as_ref(), &root, &path)?;
    match classify(entry, path.has_trailing_slash()) {
        Action::RedirectToSlash => {
            let location = format!("{raw_path}/");
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        Action::ListTree(tree) => list_tree(&state, &tree),
        Action::RenderDocument(entry) => render_blob_document(&state, &entry),
        Action::StreamRaw(entry) => stream_blob(&state, &entry),
        Action::Unsupported(kind) => Err(AppError::InvalidType {
            path: path.to_string(),
            kind,
        }),
    }
}

fn list_tree(state: &AppState, tree: &ObjectId) -> Result<Response> {
    let entries = state.store.tree_entries(tree)?;
    Ok(html_response(render_listing(&entries)))
}

fn render_blob_document(state: &AppState, entry: &Entry) -> Result<Response> {
    let content = state.store.blob_content(&entry.id)?;
    let fragment = state.markup.transform(&content);
    Ok(html_response(render_document(&fragment)))
}

fn stream_blob(state: &AppState, entry: &Entry) -> Result<Response> {
    let content = state.store.blob_content(&entry.id)?;
    let mime = mime_guess::from_path(&entry.name).first_or_octet_stream();
    Ok((
        [(header::CONTENT_TYPE, mime.as_ref().to_string())],
        Body::from(content),
    )
        .into_response())
}

fn html_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], body).into_response()
}
