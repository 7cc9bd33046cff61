use async_trait::async_trait;
use chunks::domain::Chunk;
use chunks::ports::ChunkRepository;
use shared::{Error, Result};
use std::path::Path;

/// Sled-backed chunk store.
///
/// Chunks are JSON-encoded under their key; every mutation is flushed
/// before it returns, so completed writes survive a crash and readers
/// that start afterwards observe them.
pub struct SledChunkRepository {
    db: sled::Db,
}

impl SledChunkRepository {
    /// Open (or create) the database at `path`, creating the parent
    /// directory if needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create directory: {}", e)))?;
        }

        let db = sled::open(path)
            .map_err(|e| Error::Storage(format!("Failed to open Sled database: {}", e)))?;

        Ok(Self { db })
    }

    fn flush(&self) -> Result<()> {
        self.db
            .flush()
            .map_err(|e| Error::Storage(format!("Failed to flush database: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl ChunkRepository for SledChunkRepository {
    async fn get(&self, key: &str) -> Result<Option<Chunk>> {
        let value = self
            .db
            .get(key.as_bytes())
            .map_err(|e| Error::Storage(format!("Failed to read chunk: {}", e)))?;

        match value {
            Some(bytes) => {
                let chunk = serde_json::from_slice(&bytes)
                    .map_err(|e| Error::Storage(format!("Failed to deserialize chunk: {}", e)))?;
                Ok(Some(chunk))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, chunk: Chunk) -> Result<()> {
        let value = serde_json::to_vec(&chunk)
            .map_err(|e| Error::Storage(format!("Failed to serialize chunk: {}", e)))?;

        self.db
            .insert(chunk.key.as_bytes(), value)
            .map_err(|e| Error::Storage(format!("Failed to save chunk: {}", e)))?;

        self.flush()
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let removed = self
            .db
            .remove(key.as_bytes())
            .map_err(|e| Error::Storage(format!("Failed to delete chunk: {}", e)))?
            .is_some();

        self.flush()?;

        Ok(removed)
    }
}
