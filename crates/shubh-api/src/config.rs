//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use shubh_viewer::domain::design::DesignCatalog;

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// PostgreSQL connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Bind host (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `3000`).
    pub port: u16,
    /// Bearer token for the admin endpoints (`ADMIN_TOKEN`).
    pub admin_token: String,
    /// Optional YAML file replacing the built-in catalog (`DESIGN_CATALOG`).
    pub design_catalog: Option<PathBuf>,
}

impl ApiConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a required variable is missing or a
    /// value does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| {
            AppError::Config("DATABASE_URL environment variable must be set".to_string())
        })?;
        let admin_token = lookup("ADMIN_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::Config("ADMIN_TOKEN environment variable must be set".to_string())
            })?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };

        Ok(Self {
            database_url,
            host,
            port,
            admin_token,
            design_catalog: lookup("DESIGN_CATALOG").map(PathBuf::from),
        })
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Loads the design catalog from `design_catalog`, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read and
    /// `AppError::Catalog` if it does not describe a valid catalog.
    pub fn load_designs(&self) -> Result<DesignCatalog, AppError> {
        match &self.design_catalog {
            Some(path) => {
                let yaml = std::fs::read_to_string(path).map_err(|e| {
                    AppError::Config(format!(
                        "DESIGN_CATALOG file {} cannot be read: {e}",
                        path.display()
                    ))
                })?;
                Ok(DesignCatalog::from_yaml_str(&yaml)?)
            }
            None => Ok(DesignCatalog::builtin()?),
        }
    }
}
