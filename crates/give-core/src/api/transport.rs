//! ============================================================================
//! Transport - GET/POST helpers over reqwest
//! ============================================================================
//! Single request/response per call, no retries. Non-success statuses and
//! connection failures become `GiveError::Network`; bodies that do not match
//! the target shape become `GiveError::Decode`.
//! ============================================================================

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::SptClient;
use crate::types::{GiveError, Result};

/// Cookie the server reads the player session from
pub const SESSION_COOKIE: &str = "PHPSESSID";

/// Header carrying the session id for routes that read it directly
pub const SESSION_HEADER: &str = "sessionid";

/// Asks the server for an uncompressed body
const COMPRESSION_HEADER: &str = "responsecompressed";

impl SptClient {
    /// Request with the common headers, plus the session when one is given
    fn request(&self, method: Method, url: &str, session_id: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, url)
            .header(COMPRESSION_HEADER, "0");

        if !session_id.is_empty() {
            builder = builder
                .header(reqwest::header::COOKIE, format!("{}={}", SESSION_COOKIE, session_id))
                .header(SESSION_HEADER, session_id);
        }

        builder
    }

    async fn send(&self, builder: RequestBuilder, url: &str) -> Result<Vec<u8>> {
        let network = |source: reqwest::Error| GiveError::Network {
            url: url.to_string(),
            source,
        };

        let response = builder
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(network)?;

        let body = response.bytes().await.map_err(network)?;
        Ok(body.to_vec())
    }

    /// GET `{base_url}{path}` and return the undecoded body
    pub async fn get_raw_bytes(&self, path: &str, session_id: &str) -> Result<Vec<u8>> {
        let url = self.url(path);
        debug!("GET {} (session: {})", url, !session_id.is_empty());

        let builder = self.request(Method::GET, &url, session_id);
        self.send(builder, &url).await
    }

    /// GET `{base_url}{path}` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, session_id: &str) -> Result<T> {
        let url = self.url(path);
        let body = self.get_raw_bytes(path, session_id).await?;
        parse_response(&url, &body)
    }

    /// POST a JSON body to `{base_url}{path}`; the response body is returned
    /// as-is and not interpreted
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        session_id: &str,
        body: &B,
    ) -> Result<Vec<u8>> {
        let url = self.url(path);
        debug!("POST {} (session: {})", url, !session_id.is_empty());

        let builder = self.request(Method::POST, &url, session_id).json(body);
        self.send(builder, &url).await
    }
}

/// Decode a raw body fetched from `url`
pub fn parse_response<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| GiveError::Decode {
        url: url.to_string(),
        source,
    })
}
