//! HTTP fetch foundation
//!
//! A thin wrapper over reqwest that issues exactly one GET per call. There is
//! no retry, no redirect customization, and no timeout beyond the transport
//! default; a failed or non-success response surfaces as a typed error and the
//! body is never returned in that case.

use crate::error::FetchError;
use reqwest::Client;

/// User-Agent header sent with every request
const USER_AGENT: &str = concat!("chartup/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Issue a single GET and return the response body as text.
    ///
    /// Fails on transport errors and on any non-2xx status.
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }

        response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
