//! HTTP routing.
//!
//! A single catch-all route serves the whole tree: `/` lists the snapshot
//! root, `/<path>/` lists a directory, `/<path>` serves a file or redirects
//! a directory to its slashed form. The browse handler owns the per-request
//! reference → commit → path resolution chain.

mod browse;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::markup::MarkupTransformer;
use crate::store::SharedStore;

/// Immutable per-process state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub markup: Arc<dyn MarkupTransformer>,
    /// Symbolic reference re-resolved on every request; it may move between
    /// requests, so no snapshot is cached across them.
    pub reference: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .fallback(get(browse::browse))
        .with_state(state)
}
