//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Object storage adapter for event images

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::storage::ImageStorage;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn ImageStorage>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Storage adapter used to upload event images.
    pub storage: Arc<dyn ImageStorage>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `storage` - Image storage adapter
    pub fn new(db: DatabaseConnection, storage: Arc<dyn ImageStorage>) -> Self {
        Self { db, storage }
    }
}
