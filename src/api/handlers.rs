//! API handlers

use axum::extract::{Path, State};
use bytes::Bytes;

use crate::api::codec::{decode_album, IndentedJson};
use crate::api::AppState;
use crate::types::Album;
use crate::Error;

/// List every album in insertion order
pub async fn list_albums(State(state): State<AppState>) -> IndentedJson<Vec<Album>> {
    IndentedJson(state.store.list().await)
}

/// Fetch one album by id
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Album>, Error> {
    match state.store.get(&id).await {
        Ok(album) => Ok(IndentedJson(album)),
        Err(err) => {
            tracing::debug!(%id, "album lookup missed");
            Err(err)
        }
    }
}

/// Append an album decoded from the request body
///
/// Decode failures answer 500, not 400.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<IndentedJson<Album>, Error> {
    let album = decode_album(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejecting album body");
        err
    })?;

    let album = state.store.create(album).await;
    tracing::info!(id = %album.id, "album created");

    Ok(IndentedJson(album))
}
