//! Error types for album-store

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("album not found: {0}")]
    AlbumNotFound(String),

    /// Request body could not be decoded into an album. Carries the
    /// decoder's message verbatim.
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode(msg.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Error::AlbumNotFound(id.into())
    }
}
