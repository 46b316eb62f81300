// config.rs
use crate::errors::ConfigError;
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// Name of the spreadsheet writer to use for exports. Only "xlsx" ships.
    pub spreadsheet_backend: String,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            spreadsheet_backend: "xlsx".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("DATATABLES_ADDR") {
            cfg.addr = addr
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(addr.clone()))?;
        }

        if let Some(workers) = lookup("DATATABLES_MAX_WORKERS") {
            cfg.max_workers = match workers.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidWorkers(workers)),
            };
        }

        if let Some(backend) = lookup("DATATABLES_SPREADSHEET_BACKEND") {
            cfg.spreadsheet_backend = backend.trim().to_lowercase();
        }

        if let Some(filter) = lookup("DATATABLES_LOG") {
            cfg.log_filter = filter;
        }

        Ok(cfg)
    }
}
