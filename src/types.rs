//! Core record types for songbook

use serde::{Deserialize, Serialize};

/// Song ID type
pub type SongId = i64;

/// A song in the catalog
///
/// Missing fields decode to their defaults, so a body without `id`
/// (the usual create payload) is accepted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
}

impl Song {
    pub fn new(id: SongId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// An item; `id` is supplied by the caller and may repeat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// How the song store picks the id of a newly created song
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// One past the highest id ever held; never reused
    #[default]
    Monotonic,
    /// `len + 1` at creation time; may collide after deletions
    Length,
}

/// Songs the song service starts with
pub fn default_songs() -> Vec<Song> {
    vec![
        Song::new(1, "Song 1", "Artist 1"),
        Song::new(2, "Song 2", "Artist 2"),
        Song::new(3, "Song 3", "Artist 3"),
    ]
}

/// Items the item service starts with
pub fn default_items() -> Vec<Item> {
    vec![Item::new("1", "Item 1"), Item::new("2", "Item 2")]
}
