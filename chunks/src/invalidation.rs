use crate::domain::Chunk;
use crate::keys::effective_key;
use crate::ports::{ChunkCache, ChunkRepository, LocaleContext};
use async_trait::async_trait;
use shared::Result;
use std::sync::Arc;
use tracing::debug;

/// Deletes every cached locale variant of a mutated key.
///
/// The fan-out covers the configured locale set plus the key itself,
/// not the set of variants actually cached; deleting an absent entry
/// is a no-op. The key itself is always included because writers
/// under locale mode address locale rows directly, and a row key is
/// exactly the effective key the lookup path caches under.
pub struct InvalidationHook {
    cache: Arc<dyn ChunkCache>,
    locales: Arc<dyn LocaleContext>,
    locale_enabled: bool,
}

impl InvalidationHook {
    pub fn new(
        cache: Arc<dyn ChunkCache>,
        locales: Arc<dyn LocaleContext>,
        locale_enabled: bool,
    ) -> Self {
        Self {
            cache,
            locales,
            locale_enabled,
        }
    }

    /// Drop every cached variant of `base_key`. Must complete before
    /// the mutation that triggered it returns to its caller.
    pub async fn invalidate(&self, base_key: &str) -> Result<()> {
        for key in self.variant_keys(base_key) {
            self.cache.delete(&key).await?;
        }
        debug!(base_key, "invalidated cached variants");
        Ok(())
    }

    fn variant_keys(&self, base_key: &str) -> Vec<String> {
        let mut keys = vec![effective_key(base_key, None)];
        if self.locale_enabled {
            for code in self.locales.configured_locales() {
                keys.push(effective_key(base_key, Some(&code)));
            }
        }
        keys
    }
}

/// Repository decorator that invalidates cached variants after every
/// mutation, before the mutation returns to its caller. Reads pass
/// through untouched.
pub struct InvalidatingRepository<R> {
    inner: R,
    hook: InvalidationHook,
}

impl<R: ChunkRepository> InvalidatingRepository<R> {
    pub fn new(inner: R, hook: InvalidationHook) -> Self {
        Self { inner, hook }
    }
}

#[async_trait]
impl<R: ChunkRepository> ChunkRepository for InvalidatingRepository<R> {
    async fn get(&self, key: &str) -> Result<Option<Chunk>> {
        self.inner.get(key).await
    }

    async fn put(&self, chunk: Chunk) -> Result<()> {
        let key = chunk.key.clone();
        self.inner.put(chunk).await?;
        self.hook.invalidate(&key).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let existed = self.inner.delete(key).await?;
        self.hook.invalidate(key).await?;
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::StaticLocales;
    use crate::lookup::{ChunkLookupService, LookupSettings};
    use crate::testing::{CountingRepository, MapCache, SwitchableLocales};
    use shared::TtlSeconds;

    fn wire(
        cache: Arc<MapCache>,
        repository: CountingRepository,
        locales: Arc<dyn LocaleContext>,
        locale_enabled: bool,
    ) -> (ChunkLookupService, Arc<dyn ChunkRepository>) {
        let hook = InvalidationHook::new(cache.clone(), locales.clone(), locale_enabled);
        let repository: Arc<dyn ChunkRepository> =
            Arc::new(InvalidatingRepository::new(repository, hook));
        let lookup = ChunkLookupService::new(
            cache,
            repository.clone(),
            locales,
            LookupSettings {
                use_cache: true,
                locale_enabled,
            },
        );
        (lookup, repository)
    }

    #[tokio::test]
    async fn update_invalidates_the_cached_entry() {
        let cache = Arc::new(MapCache::default());
        let (lookup, repository) = wire(
            cache.clone(),
            CountingRepository::seeded([Chunk::new("home_left", "A", "")]),
            Arc::new(StaticLocales::disabled()),
            false,
        );

        let first = lookup.get("home_left", TtlSeconds(10)).await.unwrap();
        assert_eq!(first.unwrap().content, "A");
        assert!(cache.contains("home_left"));

        repository
            .put(Chunk::new("home_left", "B", ""))
            .await
            .unwrap();
        assert!(!cache.contains("home_left"));

        let next = lookup.get("home_left", TtlSeconds(10)).await.unwrap();
        assert_eq!(next.unwrap().content, "B");
    }

    #[tokio::test]
    async fn delete_invalidates_the_cached_entry() {
        let cache = Arc::new(MapCache::default());
        let (lookup, repository) = wire(
            cache.clone(),
            CountingRepository::seeded([Chunk::new("home_left", "A", "")]),
            Arc::new(StaticLocales::disabled()),
            false,
        );

        lookup.get("home_left", TtlSeconds(10)).await.unwrap();
        assert!(cache.contains("home_left"));

        let existed = repository.delete("home_left").await.unwrap();
        assert!(existed);
        assert!(!cache.contains("home_left"));

        let gone = lookup.get("home_left", TtlSeconds(10)).await.unwrap();
        assert!(gone.is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn deleting_an_absent_key_is_a_no_op() {
        let cache = Arc::new(MapCache::default());
        let (_, repository) = wire(
            cache.clone(),
            CountingRepository::default(),
            Arc::new(StaticLocales::disabled()),
            false,
        );

        let existed = repository.delete("never_created").await.unwrap();
        assert!(!existed);
    }

    #[tokio::test]
    async fn invalidating_a_base_key_clears_every_locale_variant() {
        let cache = Arc::new(MapCache::default());
        let locales = Arc::new(SwitchableLocales::new(Some("en"), &["en", "ru"]));
        let (lookup, _) = wire(
            cache.clone(),
            CountingRepository::seeded([
                Chunk::new("home_left_en", "english", ""),
                Chunk::new("home_left_ru", "russian", ""),
            ]),
            locales.clone(),
            true,
        );

        lookup.get("home_left", TtlSeconds(10)).await.unwrap();
        locales.switch("ru");
        lookup.get("home_left", TtlSeconds(10)).await.unwrap();
        assert!(cache.contains("home_left_en"));
        assert!(cache.contains("home_left_ru"));

        let hook = InvalidationHook::new(cache.clone(), locales.clone(), true);
        hook.invalidate("home_left").await.unwrap();

        assert!(!cache.contains("home_left_en"));
        assert!(!cache.contains("home_left_ru"));
    }

    #[tokio::test]
    async fn mutating_a_locale_row_invalidates_its_cached_variant() {
        let cache = Arc::new(MapCache::default());
        let locales = Arc::new(SwitchableLocales::new(Some("en"), &["en", "ru"]));
        let (lookup, repository) = wire(
            cache.clone(),
            CountingRepository::seeded([Chunk::new("home_left_en", "english", "")]),
            locales,
            true,
        );

        lookup.get("home_left", TtlSeconds(10)).await.unwrap();
        assert!(cache.contains("home_left_en"));

        // The writer addresses the locale row by its stored key.
        repository
            .put(Chunk::new("home_left_en", "revised", ""))
            .await
            .unwrap();
        assert!(!cache.contains("home_left_en"));

        let next = lookup.get("home_left", TtlSeconds(10)).await.unwrap();
        assert_eq!(next.unwrap().content, "revised");
    }

    #[tokio::test]
    async fn end_to_end_read_after_write() {
        let cache = Arc::new(MapCache::default());
        let (lookup, repository) = wire(
            cache.clone(),
            CountingRepository::seeded([Chunk::new("home_left", "A", "")]),
            Arc::new(StaticLocales::disabled()),
            false,
        );

        let first = lookup.get("home_left", TtlSeconds(10)).await.unwrap();
        assert_eq!(first.unwrap().content, "A");
        assert!(cache.contains("home_left"));

        repository
            .put(Chunk::new("home_left", "B", ""))
            .await
            .unwrap();

        let second = lookup.get("home_left", TtlSeconds(10)).await.unwrap();
        assert_eq!(second.unwrap().content, "B");
    }
}
