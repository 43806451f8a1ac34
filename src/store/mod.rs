//! In-memory album store
//!
//! Holds the ordered album collection for the lifetime of the process.
//! Order is insertion order: seed albums first, then created albums.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::types::{seed_albums, Album};
use crate::{Error, Result};

/// AlbumStore owns the album collection and serialises access to it
#[derive(Clone, Default)]
pub struct AlbumStore {
    /// Albums in insertion order (protected by RwLock for concurrent handlers)
    albums: Arc<RwLock<Vec<Album>>>,
}

impl AlbumStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the seed albums
    pub fn seeded() -> Self {
        Self::from_albums(seed_albums())
    }

    pub fn from_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: Arc::new(RwLock::new(albums)),
        }
    }

    /// List all albums in insertion order
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// Get the first album whose id matches exactly
    ///
    /// Duplicate ids are allowed; the earliest inserted one wins.
    pub async fn get(&self, id: &str) -> Result<Album> {
        let albums = self.albums.read().await;
        albums
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    /// Append an album and return it unchanged
    pub async fn create(&self, album: Album) -> Album {
        let mut albums = self.albums.write().await;
        albums.push(album.clone());
        album
    }

    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}
