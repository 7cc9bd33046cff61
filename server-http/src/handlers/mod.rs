pub mod chunk_ops;
pub mod health;

pub use chunk_ops::{delete_chunk, get_chunk, put_chunk};
pub use health::health_check;
