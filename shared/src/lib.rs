// shared/src/lib.rs

use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cache backend unavailable: {0}")]
    CacheUnavailable(String),
    #[error("storage: {0}")]
    Storage(String),
    #[error("locale support is enabled but no active locale is resolvable")]
    MissingLocale,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Cache entry lifetime in whole seconds.
///
/// Zero delegates to the cache backend's default expiry, or to no
/// expiry at all when the backend has none configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtlSeconds(pub u64);

impl TtlSeconds {
    pub const DEFAULT: TtlSeconds = TtlSeconds(0);

    pub fn as_duration(self) -> Option<Duration> {
        (self.0 > 0).then(|| Duration::from_secs(self.0))
    }
}

pub mod config;
