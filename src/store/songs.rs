//! Song store

use tokio::sync::RwLock;

use crate::types::{IdStrategy, Song, SongId};
use crate::{Error, Result};

const NOT_FOUND: &str = "Song not found";

struct SongTable {
    songs: Vec<Song>,
    /// Highest id this table has ever held, never below zero
    high_water: SongId,
}

impl SongTable {
    fn position(&self, id: SongId) -> Option<usize> {
        self.songs.iter().position(|song| song.id == id)
    }

    fn next_id(&self, strategy: IdStrategy) -> Result<SongId> {
        let next = match strategy {
            IdStrategy::Monotonic => self.high_water.checked_add(1),
            IdStrategy::Length => SongId::try_from(self.songs.len())
                .ok()
                .and_then(|len| len.checked_add(1)),
        };
        next.ok_or_else(|| Error::internal("song id space exhausted"))
    }
}

/// Ordered song sequence shared by the song handlers
pub struct SongStore {
    table: RwLock<SongTable>,
    strategy: IdStrategy,
}

impl SongStore {
    /// Create a store holding `seed`, in order
    pub fn new(seed: Vec<Song>, strategy: IdStrategy) -> Self {
        let high_water = seed.iter().map(|song| song.id).max().unwrap_or(0).max(0);
        Self {
            table: RwLock::new(SongTable {
                songs: seed,
                high_water,
            }),
            strategy,
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Snapshot of every song in store order
    pub async fn list(&self) -> Vec<Song> {
        self.table.read().await.songs.clone()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.songs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// First song carrying `id`
    pub async fn get(&self, id: SongId) -> Result<Song> {
        let table = self.table.read().await;
        table
            .songs
            .iter()
            .find(|song| song.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(NOT_FOUND))
    }

    pub async fn contains(&self, id: SongId) -> bool {
        self.table.read().await.position(id).is_some()
    }

    /// Append `song` under a freshly assigned id, discarding whatever id it carried
    pub async fn create(&self, mut song: Song) -> Result<Song> {
        let mut table = self.table.write().await;
        song.id = table.next_id(self.strategy)?;
        table.high_water = table.high_water.max(song.id);
        table.songs.push(song.clone());

        tracing::debug!(id = song.id, total = table.songs.len(), "song created");
        Ok(song)
    }

    /// Replace the first song carrying `id`; the stored record keeps `id`
    pub async fn update(&self, id: SongId, mut song: Song) -> Result<Song> {
        let mut table = self.table.write().await;
        let index = table.position(id).ok_or_else(|| Error::not_found(NOT_FOUND))?;

        song.id = id;
        table.songs[index] = song.clone();

        tracing::debug!(id, index, "song updated");
        Ok(song)
    }

    /// Remove the first song carrying `id`; later songs shift down by one
    pub async fn delete(&self, id: SongId) -> Result<Song> {
        let mut table = self.table.write().await;
        let index = table.position(id).ok_or_else(|| Error::not_found(NOT_FOUND))?;
        let removed = table.songs.remove(index);

        tracing::debug!(id, index, total = table.songs.len(), "song deleted");
        Ok(removed)
    }
}
