use chunks::invalidation::{InvalidatingRepository, InvalidationHook};
use chunks::locale::StaticLocales;
use chunks::lookup::{ChunkLookupService, LookupSettings};
use chunks::ports::{ChunkCache, ChunkRepository};
use shared::config::Config;
use std::sync::Arc;
use std::time::Duration;
use storage_engine::{MokaChunkCache, SledChunkRepository};

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<ChunkLookupService>,
    pub repository: Arc<dyn ChunkRepository>,
}

impl AppState {
    pub fn new(config: &Config) -> shared::Result<Self> {
        let default_ttl = (config.default_ttl_secs > 0)
            .then(|| Duration::from_secs(config.default_ttl_secs));
        let cache: Arc<dyn ChunkCache> =
            Arc::new(MokaChunkCache::new("chunks", None, default_ttl));

        let locales = Arc::new(StaticLocales::new(
            config.active_locale.clone(),
            config.locales.clone(),
        ));

        let store = SledChunkRepository::new(
            std::path::Path::new(&config.data_dir).join("chunks.sled"),
        )?;
        let hook = InvalidationHook::new(cache.clone(), locales.clone(), config.locale_enabled);
        let repository: Arc<dyn ChunkRepository> =
            Arc::new(InvalidatingRepository::new(store, hook));

        let lookup = Arc::new(ChunkLookupService::new(
            cache,
            repository.clone(),
            locales,
            LookupSettings {
                use_cache: config.use_cache,
                locale_enabled: config.locale_enabled,
            },
        ));

        Ok(Self { lookup, repository })
    }
}
