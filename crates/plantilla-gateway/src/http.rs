//! reqwest client for the MS Plantilla API gateway.

use plantilla_core::{Gateway, GatewayError};
use serde_json::Value;
use tracing::{info, warn};

/// HTTP gateway client. Every call is one fresh GET; nothing is cached.
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client for the given gateway base URL.
    ///
    /// `base_url` should be like `http://localhost:8001` (a trailing slash
    /// is trimmed).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a route such as `/plantilla/getTodos`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn transport(e: reqwest::Error) -> GatewayError {
    GatewayError::Transport(e.to_string())
}

#[async_trait::async_trait]
impl Gateway for GatewayClient {
    async fn get_json(&self, path: &str) -> Result<Value, GatewayError> {
        let url = self.url_for(path);

        info!(url = %url, "fetching from gateway");
        let resp = self.client.get(&url).send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(url = %url, status = status.as_u16(), "gateway answered with an error status");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await.map_err(transport)?;
        Ok(serde_json::from_str(&body)?)
    }
}
