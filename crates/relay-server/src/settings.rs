//! Server settings loaded from the environment.

use std::collections::HashMap;
use std::net::SocketAddr;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::error::StartupError;

/// Default listen host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Variable holding the address of the source mapping document.
pub const MAPPING_URL_VAR: &str = "GIST_URL";

/// Settings read once at startup.
///
/// | Variable                       | Field      | Default   |
/// |--------------------------------|------------|-----------|
/// | `RELAY_HOST`                   | `host`     | `0.0.0.0` |
/// | `RELAY_PORT`                   | `port`     | `8080`    |
/// | `GIST_URL` / `RELAY_GIST_URL`  | `gist_url` | required  |
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Address of the JSON source mapping.
    pub gist_url: String,
}

impl ServerSettings {
    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(None)
    }

    /// Loads settings from an explicit set of variables instead of the process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::build(Some(vars))
    }

    fn build(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let mapping_url = match &vars {
            Some(vars) => vars.get(MAPPING_URL_VAR).cloned(),
            None => std::env::var(MAPPING_URL_VAR).ok(),
        };

        let settings: Self = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(
                Environment::with_prefix("RELAY")
                    .try_parsing(true)
                    .source(vars),
            )
            .set_override_option("gist_url", mapping_url)?
            .build()?
            .try_deserialize()?;

        if settings.gist_url.trim().is_empty() {
            return Err(ConfigError::Message(format!(
                "{} must not be empty",
                MAPPING_URL_VAR
            )));
        }

        Ok(settings)
    }

    /// Returns the socket address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr, StartupError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| StartupError::ListenAddress(addr.clone()))
    }
}
