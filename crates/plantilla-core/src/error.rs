use thiserror::Error;

/// Why a gateway fetch produced no payload.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway could not be reached (connection refused, DNS, reset).
    #[error("transport error: {0}")]
    Transport(String),

    #[error("gateway returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GatewayError {
    /// Only unreachable-gateway failures are reported to the operator.
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport(_))
    }
}
