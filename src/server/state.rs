//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::storage::PdfStorage;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and `PdfStorage` only holds the upload directory path.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Upload directory holding the PDF artifacts.
    pub storage: PdfStorage,
}

impl AppState {
    pub fn new(db: DatabaseConnection, storage: PdfStorage) -> Self {
        Self { db, storage }
    }
}
