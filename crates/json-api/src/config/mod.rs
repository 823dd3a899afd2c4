//! Server configuration module

use clap::Parser;

use crate::config::{
    observability::LoggingConfig, server::ServerRuntimeConfig, source::PriceSourceConfig,
};

pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod source;

/// Tariff JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "tariff-json", about = "Tariff JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network and request handling settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Where price records are served from.
    #[command(flatten)]
    pub source: PriceSourceConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
