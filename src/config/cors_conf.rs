use std::env;

/// CORS configuration, controlling which frontend origin may call the API.
pub struct CorsConfig {
    pub origin: Option<String>,
}

impl CorsConfig {
    /// Reads CORS_ORIGIN. When unset the API allows any origin, which is the
    /// behavior a local dev frontend expects.
    pub fn from_env() -> Self {
        CorsConfig {
            origin: env::var("CORS_ORIGIN").ok().filter(|s| !s.is_empty()),
        }
    }
}
