//! Environment-sourced configuration.
//!
//! DESIGN
//! ======
//! The backend origin is injected here rather than hardcoded at each call
//! site, so tests and deployments can point the proxy at any backend host.

/// Origin used when `BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

const DEFAULT_PORT: &str = "3000";

/// Runtime configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed origin of the backend API, e.g. `http://localhost:8000`.
    pub backend_url: String,
    /// Port this front-end listens on.
    pub port: u16,
}

impl AppConfig {
    /// Load from `BACKEND_URL` and `PORT`, falling back to defaults.
    ///
    /// # Panics
    ///
    /// Panics if `PORT` is set but not a valid port number.
    #[must_use]
    pub fn from_env() -> Self {
        let backend_url =
            std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.into());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.into())
            .parse()
            .expect("invalid PORT");
        Self { backend_url, port }
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Whether cleared cookies should carry the `Secure` attribute.
pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
