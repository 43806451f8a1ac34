//! API server state

use crate::store::AlbumStore;

/// API server state
#[derive(Clone, Default)]
pub struct AppState {
    /// Album collection shared by all handlers
    pub store: AlbumStore,
}

impl AppState {
    pub fn new(store: AlbumStore) -> Self {
        Self { store }
    }

    /// State backed by a store holding the seed albums
    pub fn seeded() -> Self {
        Self::new(AlbumStore::seeded())
    }
}
