//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each request handler
//! through Axum's state extraction. Both fields are cheap to clone: the database
//! connection is a pool handle and the renderer sits behind an `Arc`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::view::PageRenderer;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Renderer for browsing pages.
    pub renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `renderer` - Page renderer used by the browsing endpoints
    pub fn new(db: DatabaseConnection, renderer: Arc<dyn PageRenderer>) -> Self {
        Self { db, renderer }
    }
}
