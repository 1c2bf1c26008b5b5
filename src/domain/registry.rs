use async_trait::async_trait;

use crate::domain::errors::RegistryError;
use crate::domain::images::CachedImage;

/// Store of generated images, keyed by a freshly minted opaque identifier.
///
/// Implementations must serialize concurrent `insert` and `lookup` calls
/// against each other; entries are never mutated or removed once inserted.
#[async_trait]
pub trait ImageRegistry: Send + Sync {
    /// Store `bytes` under a fresh identifier and return it. The identifier
    /// never collides with an existing entry.
    async fn insert(&self, bytes: Vec<u8>) -> String;

    /// Return the cached image for `id`, or `RegistryError::NotFound`.
    async fn lookup(&self, id: &str) -> Result<CachedImage, RegistryError>;
}
