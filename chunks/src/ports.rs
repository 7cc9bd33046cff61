use crate::domain::Chunk;
use async_trait::async_trait;
use shared::{Result, TtlSeconds};

// Ports are the pluggable extension points for the cache and storage
// backends sitting behind the lookup service.

/// Port for the source of truth holding chunks.
///
/// Reads are strongly consistent with completed writes from the
/// caller's perspective. Absent content is a normal outcome, not an
/// error; `Err` is reserved for backend faults.
#[async_trait]
pub trait ChunkRepository: Send + Sync + 'static {
    /// Fetch a chunk by its effective key.
    async fn get(&self, key: &str) -> Result<Option<Chunk>>;

    /// Create or update a chunk under its key.
    async fn put(&self, chunk: Chunk) -> Result<()>;

    /// Delete a chunk by key; returns whether it existed.
    async fn delete(&self, key: &str) -> Result<bool>;
}

/// Port for the shared cache sitting in front of the repository.
#[async_trait]
pub trait ChunkCache: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<Chunk>>;

    /// Store a chunk under the given key. `TtlSeconds(0)` delegates
    /// expiry to the backend's default.
    async fn set(&self, key: &str, chunk: Chunk, ttl: TtlSeconds) -> Result<()>;

    /// Remove an entry. Deleting an absent entry is a no-op.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Port for the locale context of the calling request.
pub trait LocaleContext: Send + Sync + 'static {
    /// Short code of the caller's currently active locale, e.g. "en".
    /// Resolved at every call; the active locale can differ between
    /// requests sharing one process.
    fn active_locale(&self) -> Option<String>;

    /// Every locale code the deployment serves. Invalidation fans out
    /// across this set.
    fn configured_locales(&self) -> Vec<String>;
}
