use crate::domain::Chunk;
use crate::keys::effective_key;
use crate::ports::{ChunkCache, ChunkRepository, LocaleContext};
use shared::{Error, Result, TtlSeconds};
use std::sync::Arc;
use tracing::debug;

/// Behavior switches for the lookup path, loaded from configuration
/// at wiring time.
#[derive(Clone, Copy, Debug)]
pub struct LookupSettings {
    /// When false the cache is bypassed entirely: every lookup reads
    /// the repository and nothing is ever written to the cache.
    pub use_cache: bool,
    /// When true, effective keys carry the caller's locale suffix.
    pub locale_enabled: bool,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            use_cache: true,
            locale_enabled: false,
        }
    }
}

/// Cache-aside lookup over injected cache and repository backends.
///
/// This service performs no locking and no retries of its own; the
/// backends are shared, externally-synchronized resources.
#[derive(Clone)]
pub struct ChunkLookupService {
    cache: Arc<dyn ChunkCache>,
    repository: Arc<dyn ChunkRepository>,
    locales: Arc<dyn LocaleContext>,
    settings: LookupSettings,
}

impl ChunkLookupService {
    pub fn new(
        cache: Arc<dyn ChunkCache>,
        repository: Arc<dyn ChunkRepository>,
        locales: Arc<dyn LocaleContext>,
        settings: LookupSettings,
    ) -> Self {
        Self {
            cache,
            repository,
            locales,
            settings,
        }
    }

    /// Look up a chunk by its base key.
    ///
    /// Cache first, repository on miss, populate the cache only on a
    /// confirmed repository hit. Absent content is `Ok(None)`; a
    /// negative result is never cached, so a repeated lookup of a
    /// missing key always re-queries the repository. Cache faults
    /// propagate and fail the call.
    pub async fn get(&self, base_key: &str, ttl: TtlSeconds) -> Result<Option<Chunk>> {
        let key = self.resolve_key(base_key)?;

        if !self.settings.use_cache {
            return self.repository.get(&key).await;
        }

        if let Some(chunk) = self.cache.get(&key).await? {
            debug!(key = %key, "cache hit");
            return Ok(Some(chunk));
        }
        debug!(key = %key, "cache miss");

        match self.repository.get(&key).await? {
            Some(chunk) => {
                self.cache.set(&key, chunk.clone(), ttl).await?;
                debug!(key = %key, ttl_secs = ttl.0, "cache populated");
                Ok(Some(chunk))
            }
            None => Ok(None),
        }
    }

    /// Effective key for the caller's active locale, resolved on
    /// every call so multi-request processes can switch locales.
    fn resolve_key(&self, base_key: &str) -> Result<String> {
        if !self.settings.locale_enabled {
            return Ok(effective_key(base_key, None));
        }
        match self.locales.active_locale() {
            Some(code) if !code.is_empty() => Ok(effective_key(base_key, Some(&code))),
            _ => Err(Error::MissingLocale),
        }
    }
}
