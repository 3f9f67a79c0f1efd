use core::net::SocketAddrV4;
use std::env::var;
use std::net::Ipv4Addr;
use tracing::warn;

/// Process-wide configuration, read once at startup and shared read-only.
pub struct Config {
    /// Where the gateway listens. Fixed - the backend is configured to call this address.
    pub listener: SocketAddrV4,
    /// Region reported by the health probe. None if not configured.
    pub aws_region: Option<String>,
}

impl Config {
    /// Creates a new Config instance from environment variables and defaults.
    /// Missing AWS credentials only produce a warning: the process must still
    /// start and fail later if the handler actually needs them.
    pub fn from_env() -> Self {
        let listener = SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 8000);

        if var("AWS_ACCESS_KEY_ID").is_err() || var("AWS_SECRET_ACCESS_KEY").is_err() {
            warn!("No AWS keys in .env or the environment. Calls to the AI backend may fail.");
        }

        let aws_region = var("AWS_DEFAULT_REGION").ok();

        Self {
            listener,
            aws_region,
        }
    }
}
