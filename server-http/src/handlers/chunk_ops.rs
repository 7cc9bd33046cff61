use crate::models::{ChunkResponse, DeleteChunkResponse, PutChunkRequest, PutChunkResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chunks::domain::Chunk;
use serde::Deserialize;
use shared::TtlSeconds;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    /// Cache lifetime in seconds; 0 (the default) delegates to the
    /// cache backend's configured expiry.
    #[serde(default)]
    pub ttl: u64,
}

/// GET /chunks/:key
pub async fn get_chunk(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<LookupParams>,
) -> Result<Json<ChunkResponse>, StatusCode> {
    match state.lookup.get(&key, TtlSeconds(params.ttl)).await {
        Ok(Some(chunk)) => Ok(Json(ChunkResponse::found(chunk))),
        Ok(None) => Ok(Json(ChunkResponse::absent(key))),
        Err(e) => {
            error!("lookup of '{}' failed: {}", key, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// PUT /admin/chunks/:key
pub async fn put_chunk(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<PutChunkRequest>,
) -> Result<Json<PutChunkResponse>, StatusCode> {
    info!("PUT chunk: key={}", key);

    let chunk = Chunk::new(key, req.content, req.description);
    match state.repository.put(chunk).await {
        Ok(()) => Ok(Json(PutChunkResponse { ok: true })),
        Err(e) => {
            error!("put failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /admin/chunks/:key
pub async fn delete_chunk(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteChunkResponse>, StatusCode> {
    info!("DELETE chunk: key={}", key);

    match state.repository.delete(&key).await {
        Ok(deleted) => Ok(Json(DeleteChunkResponse { deleted })),
        Err(e) => {
            error!("delete failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
