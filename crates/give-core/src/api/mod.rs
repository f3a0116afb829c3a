//! ============================================================================
//! API Module - Client for the give-ui server mod
//! ============================================================================
//! `SptClient` wraps a reqwest client and the server's base URL. Each method
//! is one sequential request/response (or a short fixed sequence of them) and
//! returns either a view model or the transport error unchanged.
//!
//! ## Usage
//! ```rust,ignore
//! use give_core::{Locale, SptClient};
//!
//! let client = SptClient::new("http://127.0.0.1:6969");
//! let profiles = client.load_profiles().await?;
//! let items = client.load_items(Locale::English.code()).await?;
//! client.give_item(profiles[0].session_id(), "5449016a4bdc2d6f028b456f", 1000).await?;
//! ```
//! ============================================================================

mod endpoints;
mod mutations;
mod transport;
pub mod types;

pub use transport::{parse_response, SESSION_COOKIE, SESSION_HEADER};

/// Default address of a local server
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:6969";

/// Server routes, relative to the base URL
pub mod paths {
    pub const SERVER_INFO: &str = "/give-ui/server";
    pub const PROFILES: &str = "/give-ui/profiles";
    pub const ITEMS: &str = "/give-ui/items";
    pub const TRADER_SETTINGS: &str = "/client/trading/api/traderSettings";
    pub const GIVE_ITEM: &str = "/give-ui/give";
    pub const GIVE_USER_PRESET: &str = "/give-ui/give-user-preset";
    pub const UPDATE_TRADER: &str = "/give-ui/update-trader";

    /// `/client/locale/{code}`
    pub fn locale(code: &str) -> String {
        format!("/client/locale/{}", code)
    }
}

/// HTTP client bound to one server
#[derive(Debug, Clone)]
pub struct SptClient {
    http: reqwest::Client,
    base_url: String,
}

impl SptClient {
    /// Create a client for the server at `base_url`
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("give-ui/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::with_http(base_url, http)
    }

    /// Create with a preconfigured reqwest client (timeouts, proxies, ...)
    pub fn with_http(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
