use reqwest::Client;

use crate::api::error::ApiError;

/// Quote endpoint. Fixed at build time; there is no runtime configuration.
pub const BASE_URL: &str = "http://127.0.0.1:8000/";

/// Thin client for the quote endpoint: one unauthenticated GET, raw text out.
pub struct QuoteApi {
    client: Client,
    base_url: String,
}

impl QuoteApi {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a different endpoint. Used by tests to target a
    /// mock server on an ephemeral port.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET the endpoint and return the unparsed body text.
    ///
    /// No retry here; the caller decides what a failure means. The client's
    /// default timeout behavior applies.
    pub async fn fetch_quote(&self) -> Result<String, ApiError> {
        let response = self.client.get(&self.base_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

impl Default for QuoteApi {
    fn default() -> Self {
        Self::new()
    }
}
