//! In-memory record stores
//!
//! Each service owns one store: an ordered sequence of records that lives as
//! long as the process. All reads and writes go through a single
//! `tokio::sync::RwLock`, so concurrent handlers never observe a torn
//! sequence or lose an append.

pub mod items;
pub mod songs;

pub use items::ItemStore;
pub use songs::SongStore;
