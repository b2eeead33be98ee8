//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::service::photo::PhotoStorage;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and then cloned (cheaply; the
/// database connection is a pool handle and the photo storage holds only its
/// root path) for each incoming request via Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// File storage for uploaded player photos.
    pub photos: PhotoStorage,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection, photos: PhotoStorage) -> Self {
        Self { db, photos }
    }
}
