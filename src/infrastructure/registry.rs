use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use rand::RngExt;
use tokio::sync::RwLock;

use crate::domain::errors::RegistryError;
use crate::domain::images::CachedImage;
use crate::domain::registry::ImageRegistry;

/// Lock-protected in-memory implementation of [`ImageRegistry`].
///
/// Entries live for the lifetime of the process; growth is unbounded, which
/// is an accepted capacity-planning concern rather than a bug. The lock is
/// only ever held for the map operation itself, never across network calls.
pub struct InMemoryImageRegistry {
    images: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryImageRegistry {
    pub fn new() -> Self {
        Self {
            images: RwLock::new(HashMap::new()),
        }
    }

    /// 64 bits of entropy rendered as 16 lowercase hex characters.
    fn mint_id() -> String {
        format!("{:016x}", rand::rng().random::<u64>())
    }
}

impl Default for InMemoryImageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageRegistry for InMemoryImageRegistry {
    async fn insert(&self, bytes: Vec<u8>) -> String {
        let mut images = self.images.write().await;
        loop {
            // Re-mint on collision so an existing entry is never overwritten.
            match images.entry(Self::mint_id()) {
                Entry::Occupied(_) => {}
                Entry::Vacant(entry) => {
                    let id = entry.key().clone();
                    entry.insert(bytes);
                    return id;
                }
            }
        }
    }

    async fn lookup(&self, id: &str) -> Result<CachedImage, RegistryError> {
        let images = self.images.read().await;
        images
            .get(id)
            .map(|bytes| CachedImage {
                id: id.to_string(),
                bytes: bytes.clone(),
            })
            .ok_or(RegistryError::NotFound)
    }
}
