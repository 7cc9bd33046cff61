//! Stub implementations of the ports, shared by the unit tests.

use crate::domain::Chunk;
use crate::ports::{ChunkCache, ChunkRepository, LocaleContext};
use async_trait::async_trait;
use shared::{Error, Result, TtlSeconds};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Repository stub that counts reads.
#[derive(Default)]
pub struct CountingRepository {
    chunks: Mutex<HashMap<String, Chunk>>,
    gets: AtomicUsize,
}

impl CountingRepository {
    pub fn seeded(chunks: impl IntoIterator<Item = Chunk>) -> Self {
        let map = chunks.into_iter().map(|c| (c.key.clone(), c)).collect();
        Self {
            chunks: Mutex::new(map),
            gets: AtomicUsize::new(0),
        }
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChunkRepository for CountingRepository {
    async fn get(&self, key: &str) -> Result<Option<Chunk>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(self.chunks.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, chunk: Chunk) -> Result<()> {
        self.chunks.lock().unwrap().insert(chunk.key.clone(), chunk);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.chunks.lock().unwrap().remove(key).is_some())
    }
}

/// Map-backed cache stub; ignores TTL.
#[derive(Default)]
pub struct MapCache {
    entries: Mutex<HashMap<String, Chunk>>,
}

impl MapCache {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl ChunkCache for MapCache {
    async fn get(&self, key: &str) -> Result<Option<Chunk>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, chunk: Chunk, _ttl: TtlSeconds) -> Result<()> {
        self.entries.lock().unwrap().insert(key.to_string(), chunk);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Cache stub whose every operation fails.
pub struct UnavailableCache;

#[async_trait]
impl ChunkCache for UnavailableCache {
    async fn get(&self, _key: &str) -> Result<Option<Chunk>> {
        Err(Error::CacheUnavailable("stub backend is down".into()))
    }

    async fn set(&self, _key: &str, _chunk: Chunk, _ttl: TtlSeconds) -> Result<()> {
        Err(Error::CacheUnavailable("stub backend is down".into()))
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Err(Error::CacheUnavailable("stub backend is down".into()))
    }
}

/// Locale context whose active locale can be switched mid-test.
pub struct SwitchableLocales {
    active: Mutex<Option<String>>,
    configured: Vec<String>,
}

impl SwitchableLocales {
    pub fn new(active: Option<&str>, configured: &[&str]) -> Self {
        Self {
            active: Mutex::new(active.map(str::to_string)),
            configured: configured.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn switch(&self, code: &str) {
        *self.active.lock().unwrap() = Some(code.to_string());
    }
}

impl LocaleContext for SwitchableLocales {
    fn active_locale(&self) -> Option<String> {
        self.active.lock().unwrap().clone()
    }

    fn configured_locales(&self) -> Vec<String> {
        self.configured.clone()
    }
}
