//! Runtime and build-time configuration.
//!
//! The browser bundle cannot read environment variables, so the API location
//! is baked in at compile time. The server binary reads its own settings from
//! the environment (and `.env`).

/// Posts per page on the public home page.
pub const HOME_PAGE_SIZE: u32 = 6;
/// Posts per page on the admin dashboard.
pub const ADMIN_PAGE_SIZE: u32 = 10;
/// Versions per page in the editor sidebar.
pub const VERSIONS_PAGE_SIZE: usize = 5;
/// Likers/viewers per page in the editor audience panel.
pub const AUDIENCE_PAGE_SIZE: u32 = 5;

const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
const DEFAULT_ASSET_BASE: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the REST API, e.g. `http://localhost:8080/api`.
    pub api_base_url: String,
    /// Host serving uploaded images (`/uploads/...` paths are relative to it).
    pub asset_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: &str, asset_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            asset_base_url: asset_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Values from `MINDKANVAS_API_URL` / `MINDKANVAS_ASSET_URL` at build time.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("MINDKANVAS_API_URL").unwrap_or(DEFAULT_API_BASE),
            option_env!("MINDKANVAS_ASSET_URL").unwrap_or(DEFAULT_ASSET_BASE),
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_ASSET_BASE)
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Overrides the Leptos `site-addr` when set.
    pub bind_addr: Option<String>,
    pub log_filter: String,
}

#[cfg(feature = "ssr")]
impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            bind_addr: std::env::var("BIND_ADDR")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
