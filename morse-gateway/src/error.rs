//! Error types for the gateway crate.
//!
//! Request handling is infallible; only startup can fail.

/// Errors that can occur while configuring or starting the gateway.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The listen address is not a valid `host:port` socket address.
    #[error("invalid listen address '{value}': {reason}")]
    InvalidListenAddr { value: String, reason: String },

    /// The route prefix cannot be mounted.
    #[error("invalid path prefix '{value}': {reason}")]
    InvalidPathPrefix { value: String, reason: String },

    /// Binding or serving failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
