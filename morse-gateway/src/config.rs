//! Gateway configuration read from the environment.

use std::net::SocketAddr;

use crate::error::GatewayError;

/// Environment variable holding the `host:port` to listen on.
pub const LISTEN_ADDR_VAR: &str = "MORSE_LISTEN_ADDR";

/// Environment variable holding the route prefix.
pub const PATH_PREFIX_VAR: &str = "MORSE_PATH_PREFIX";

/// Prefix the translation routes are mounted under by default.
pub const DEFAULT_PATH_PREFIX: &str = "/api/morse";

const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST), 8080);

/// Runtime settings for the gateway binary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,

    /// Prefix for the translation routes, e.g. `/api/morse`. Empty mounts
    /// them at the root.
    pub path_prefix: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR,
            path_prefix: DEFAULT_PATH_PREFIX.to_owned(),
        }
    }
}

impl GatewayConfig {
    /// Read [`LISTEN_ADDR_VAR`] and [`PATH_PREFIX_VAR`], falling back to
    /// defaults for unset variables.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidListenAddr`] or
    /// [`GatewayError::InvalidPathPrefix`] when a set value does not validate.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GatewayConfig::from_env`] with a caller-supplied lookup.
    ///
    /// # Errors
    /// See [`GatewayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LISTEN_ADDR_VAR) {
            config.listen_addr = value.trim().parse::<SocketAddr>().map_err(|e| {
                GatewayError::InvalidListenAddr { value: value.clone(), reason: e.to_string() }
            })?;
        }

        if let Some(value) = lookup(PATH_PREFIX_VAR) {
            validate_prefix(&value)?;
            config.path_prefix = value;
        }

        Ok(config)
    }
}

fn validate_prefix(prefix: &str) -> Result<(), GatewayError> {
    if prefix.is_empty() {
        return Ok(());
    }
    let reason = if !prefix.starts_with('/') {
        "must start with '/'"
    } else if prefix.ends_with('/') {
        "must not end with '/'"
    } else if prefix.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };
    Err(GatewayError::InvalidPathPrefix { value: prefix.to_owned(), reason: reason.to_owned() })
}
