use chunks::domain::Chunk;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub found: bool,
    pub key: String,
    pub content: String,
    pub description: String,
}

impl ChunkResponse {
    pub fn found(chunk: Chunk) -> Self {
        Self {
            found: true,
            key: chunk.key,
            content: chunk.content,
            description: chunk.description,
        }
    }

    /// Absent chunks render as an empty result, not an error.
    pub fn absent(key: String) -> Self {
        Self {
            found: false,
            key,
            content: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PutChunkRequest {
    pub content: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct PutChunkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteChunkResponse {
    pub deleted: bool,
}
