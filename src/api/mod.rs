//! HTTP API server

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod codec;
pub mod handlers;
pub mod state;

pub use codec::{IndentedJson, NOT_FOUND_BODY};
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/albums",
            get(handlers::list_albums).post(handlers::create_album),
        )
        .route("/albums/:id", get(handlers::get_album))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper for a router over the seed albums
pub fn create_seeded_router() -> Router {
    create_router(AppState::seeded())
}
