//! API handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::extract::{decode_json, JsonBody};
use crate::api::{ItemState, SongState};
use crate::types::{Item, Song, SongId};
use crate::{Error, Result};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub records: usize,
}

impl HealthResponse {
    fn healthy(service: &str, records: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            service: service.to_string(),
            records,
        }
    }
}

/// Health check for the song service
pub async fn song_health(State(state): State<SongState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy("songs", state.store.len().await))
}

/// Health check for the item service
pub async fn item_health(State(state): State<ItemState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy("items", state.store.len().await))
}

fn parse_song_id(raw: &str) -> Result<SongId> {
    raw.parse()
        .map_err(|_| Error::invalid_argument("Invalid song ID"))
}

/// List every song
pub async fn list_songs(State(state): State<SongState>) -> Json<Vec<Song>> {
    Json(state.store.list().await)
}

/// Fetch one song by id
pub async fn get_song(
    State(state): State<SongState>,
    Path(id): Path<String>,
) -> Result<Json<Song>> {
    let id = parse_song_id(&id)?;
    Ok(Json(state.store.get(id).await?))
}

/// Create a song; any id in the body is replaced
pub async fn create_song(
    State(state): State<SongState>,
    JsonBody(song): JsonBody<Song>,
) -> Result<(StatusCode, Json<Song>)> {
    let created = state.store.create(song).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a song, keeping the id from the path
///
/// The body is only decoded once the id is known to exist, so an unknown id
/// answers 404 even when the body is malformed.
pub async fn update_song(
    State(state): State<SongState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Song>> {
    let id = parse_song_id(&id)?;
    if !state.store.contains(id).await {
        return Err(Error::not_found("Song not found"));
    }

    let song: Song = decode_json(&body)?;
    Ok(Json(state.store.update(id, song).await?))
}

/// Delete a song
pub async fn delete_song(
    State(state): State<SongState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_song_id(&id)?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List every item
pub async fn list_items(State(state): State<ItemState>) -> Json<Vec<Item>> {
    Json(state.store.list().await)
}

/// Append an item exactly as sent
///
/// Bound to both `POST /create` and the legacy `GET /item`.
pub async fn append_item(
    State(state): State<ItemState>,
    JsonBody(item): JsonBody<Item>,
) -> Json<Item> {
    Json(state.store.append(item).await)
}
