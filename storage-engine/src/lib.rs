pub mod memory_repository;
pub mod moka_cache;
pub mod sled_repository;

pub use memory_repository::MemoryChunkRepository;
pub use moka_cache::MokaChunkCache;
pub use sled_repository::SledChunkRepository;
