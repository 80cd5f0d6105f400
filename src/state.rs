//! Shared application state for the HTTP layer

use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::store::FileStore;

/// Shared state injected into handlers via axum's `State` extractor.
///
/// The store sits behind a mutex so concurrent requests cannot
/// interleave read-modify-write cycles on the registry file.
pub struct AppState {
    /// File-backed registry and race records
    pub store: Mutex<FileStore>,
}

impl AppState {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: Mutex::new(FileStore::new(data_dir)),
        }
    }
}
