#![deny(clippy::all)]

pub mod domain;
pub mod invalidation;
pub mod keys;
pub mod locale;
pub mod lookup;
pub mod ports;
#[cfg(test)]
mod testing;

pub use domain::Chunk;
pub use invalidation::{InvalidatingRepository, InvalidationHook};
pub use locale::StaticLocales;
pub use lookup::{ChunkLookupService, LookupSettings};
pub use ports::{ChunkCache, ChunkRepository, LocaleContext};
