//! Server configuration
use clap::Parser;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "todo_server=info,tower_http=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "In-memory multi-user to-do list HTTP API", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "TODO_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "TODO_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log: String,
}

impl ServerConfig {
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|source| ConfigError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
