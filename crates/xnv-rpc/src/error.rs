#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Caller misuse detected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Connection, DNS, TLS, or timeout failure.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode request params: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response: {source}; body={body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl RpcError {
    /// True when the call failed because the configured timeout expired.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RpcError::Transport(e) if e.is_timeout())
    }

    /// True for connection-level failures (refused, unreachable, TLS).
    pub fn is_connect(&self) -> bool {
        matches!(self, RpcError::Transport(e) if e.is_connect())
    }
}
