use async_trait::async_trait;
use chunks::domain::Chunk;
use chunks::ports::ChunkRepository;
use dashmap::DashMap;
use shared::Result;

/// In-memory chunk store for tests and single-process deployments.
#[derive(Debug, Default)]
pub struct MemoryChunkRepository {
    chunks: DashMap<String, Chunk>,
}

impl MemoryChunkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChunkRepository for MemoryChunkRepository {
    async fn get(&self, key: &str) -> Result<Option<Chunk>> {
        Ok(self.chunks.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, chunk: Chunk) -> Result<()> {
        self.chunks.insert(chunk.key.clone(), chunk);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.chunks.remove(key).is_some())
    }
}
