//! album-store - A small HTTP JSON API over an in-memory album collection
//!
//! Three routes are served:
//! - `GET /albums` lists every album in insertion order
//! - `GET /albums/:id` fetches the first album with a matching id
//! - `POST /albums` appends an album decoded from the request body

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
