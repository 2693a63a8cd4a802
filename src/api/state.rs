//! API server state

use std::sync::Arc;

use crate::store::{ItemStore, SongStore};
use crate::types::{IdStrategy, Item, Song};

/// State shared by the song service handlers
#[derive(Clone)]
pub struct SongState {
    pub store: Arc<SongStore>,
}

impl SongState {
    pub fn new(store: Arc<SongStore>) -> Self {
        Self { store }
    }

    /// Build a fresh store from seed records
    pub fn seeded(seed: Vec<Song>, strategy: IdStrategy) -> Self {
        Self::new(Arc::new(SongStore::new(seed, strategy)))
    }
}

/// State shared by the item service handlers
#[derive(Clone)]
pub struct ItemState {
    pub store: Arc<ItemStore>,
}

impl ItemState {
    pub fn new(store: Arc<ItemStore>) -> Self {
        Self { store }
    }

    pub fn seeded(seed: Vec<Item>) -> Self {
        Self::new(Arc::new(ItemStore::new(seed)))
    }
}
