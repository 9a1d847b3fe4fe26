//! Boundaries to the collaborators the list operations drive.

use serde_json::Value;

use crate::error::GatewayError;

/// Text shown to the operator when the gateway cannot be reached.
pub const GATEWAY_UNREACHABLE: &str = "Error: No se han podido acceder al API Gateway";

/// Source of JSON payloads for relative routes such as `/plantilla/getTodos`.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    /// Issue one request for `path` and parse the body as JSON.
    async fn get_json(&self, path: &str) -> Result<Value, GatewayError>;
}

/// Page-content updater: replaces the visible title and body.
pub trait Presenter: Send + Sync {
    fn present(&self, title: &str, html: &str);
}

/// Blocking, user-visible notification.
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}
