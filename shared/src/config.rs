use tracing::warn;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: String,
    pub use_cache: bool,
    pub default_ttl_secs: u64,
    pub locale_enabled: bool,
    pub locales: Vec<String>,
    pub active_locale: Option<String>,
}

impl Config {
    const DEFAULT_DATA_DIR: &str = "./data";

    pub fn from_env() -> Self {
        let host = std::env::var("CHUNKS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("CHUNKS_HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .unwrap_or(8080);
        let use_cache = std::env::var("CHUNKS_USE_CACHE")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);
        let default_ttl_secs = std::env::var("CHUNKS_DEFAULT_TTL_SECS")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<u64>()
            .unwrap_or(0);
        let locale_enabled = std::env::var("CHUNKS_USE_I18N")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let locales: Vec<String> = std::env::var("CHUNKS_LOCALES")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let active_locale = std::env::var("CHUNKS_ACTIVE_LOCALE")
            .ok()
            .filter(|s| !s.is_empty());

        if locale_enabled && active_locale.is_none() {
            warn!("CHUNKS_USE_I18N is enabled but CHUNKS_ACTIVE_LOCALE is not set");
            warn!("lookups will fail until an active locale is configured");
        }
        if locale_enabled && locales.is_empty() {
            warn!("CHUNKS_USE_I18N is enabled but CHUNKS_LOCALES is empty; invalidation cannot fan out over locale variants");
        }

        Self {
            host,
            port,
            data_dir: std::env::var("CHUNKS_DATA_DIR")
                .unwrap_or_else(|_| Self::DEFAULT_DATA_DIR.to_string()),
            use_cache,
            default_ttl_secs,
            locale_enabled,
            locales,
            active_locale,
        }
    }
}
