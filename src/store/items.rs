//! Item store

use tokio::sync::RwLock;

use crate::types::Item;

/// Ordered item sequence; ids are stored exactly as supplied
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub fn new(seed: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(seed),
        }
    }

    pub async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Append `item` verbatim, duplicates included
    pub async fn append(&self, item: Item) -> Item {
        let mut items = self.items.write().await;
        items.push(item.clone());

        tracing::debug!(id = %item.id, total = items.len(), "item appended");
        item
    }
}
