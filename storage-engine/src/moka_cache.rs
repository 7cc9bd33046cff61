use async_trait::async_trait;
use chunks::domain::Chunk;
use chunks::ports::ChunkCache;
use moka::Expiry;
use moka::future::Cache;
use shared::{Result, TtlSeconds};
use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Cached chunk plus the lifetime it was stored with. Moka reads the
/// lifetime back through the `PerEntryTtl` policy.
#[derive(Clone, Debug)]
struct CachedChunk {
    chunk: Chunk,
    ttl: Option<Duration>,
}

struct PerEntryTtl;

impl Expiry<String, CachedChunk> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedChunk,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// Moka-based `ChunkCache` with per-entry TTL.
///
/// A `TtlSeconds(0)` store falls back to the cache-level default TTL,
/// or never expires when none is configured.
pub struct MokaChunkCache {
    cache: Cache<String, CachedChunk>,
    default_ttl: Option<Duration>,
}

impl MokaChunkCache {
    pub fn new(name: &str, max_entries: Option<u64>, default_ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder().name(name).expire_after(PerEntryTtl);

        if let Some(capacity) = max_entries {
            builder = builder.max_capacity(capacity);
        }

        Self {
            cache: builder.build(),
            default_ttl,
        }
    }
}

#[async_trait]
impl ChunkCache for MokaChunkCache {
    async fn get(&self, key: &str) -> Result<Option<Chunk>> {
        Ok(self.cache.get(key).await.map(|entry| entry.chunk))
    }

    async fn set(&self, key: &str, chunk: Chunk, ttl: TtlSeconds) -> Result<()> {
        let ttl = ttl.as_duration().or(self.default_ttl);
        self.cache
            .insert(key.to_string(), CachedChunk { chunk, ttl })
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.cache.remove(key).await;
        Ok(())
    }
}

impl Debug for MokaChunkCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaChunkCache")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}
