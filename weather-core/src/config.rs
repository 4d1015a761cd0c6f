use anyhow::{Context, Result, anyhow};
use std::{
    env, fmt,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

/// Environment variable holding the RapidAPI key for the upstream provider.
pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";

/// Environment variable overriding the listen address.
pub const BIND_ENV: &str = "WEATHER_BIND";

const DEFAULT_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);

/// Runtime configuration, resolved once at startup and injected into the
/// service.
///
/// The API key is a secret: `Debug` redacts it, and nothing in this crate
/// writes it to logs or responses.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub bind: SocketAddr,
}

impl Config {
    pub fn new(api_key: impl Into<String>, bind: SocketAddr) -> Self {
        Self { api_key: api_key.into(), bind }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key found in the {API_KEY_ENV} environment variable.\n\
                 Hint: export {API_KEY_ENV}=<your RapidAPI key>, or put it in a .env file."
            )
        })?;

        let bind = match lookup(BIND_ENV) {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Failed to parse {BIND_ENV} as a socket address: {addr}"))?,
            None => DEFAULT_BIND,
        };

        Ok(Self { api_key, bind })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("bind", &self.bind)
            .finish()
    }
}
