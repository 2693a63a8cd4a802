//! Songbook - in-memory song and item catalog services
//!
//! Two small JSON-over-HTTP services, each backed by a process-local store:
//! - the song service: list/get/create/update/delete on `/songs`
//! - the item service: list on `/items`, append on `/create` (and `GET /item`)

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
