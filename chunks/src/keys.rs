/// Compute the effective key a chunk is cached and stored under.
///
/// With locale support disabled (`None`) the base key is used as-is.
/// With a locale active, the short code is appended so each locale
/// addresses its own variant of the same logical chunk.
pub fn effective_key(base_key: &str, locale: Option<&str>) -> String {
    match locale {
        Some(code) => format!("{base_key}_{code}"),
        None => base_key.to_string(),
    }
}
