//! HTTP API servers

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod extract;
pub mod handlers;
pub mod state;

pub use state::{ItemState, SongState};

/// Build the song service router
pub fn create_song_router(state: SongState) -> Router {
    Router::new()
        .route("/health", get(handlers::song_health))
        .route(
            "/songs",
            get(handlers::list_songs).post(handlers::create_song),
        )
        .route(
            "/songs/:id",
            get(handlers::get_song)
                .put(handlers::update_song)
                .delete(handlers::delete_song),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the item service router
///
/// `legacy_get_append` additionally binds the append handler to `GET /item`.
pub fn create_item_router(state: ItemState, legacy_get_append: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::item_health))
        .route("/items", get(handlers::list_items))
        .route("/create", post(handlers::append_item));

    if legacy_get_append {
        router = router.route("/item", get(handlers::append_item));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
