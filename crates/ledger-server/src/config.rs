use ledger_core::AppError;

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5001,
        }
    }
}

impl ServerConfig {
    /// Read `LEDGER_HOST` and `LEDGER_PORT`, falling back to `0.0.0.0:5001`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("LEDGER_HOST").ok(),
            std::env::var("LEDGER_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let port = match port {
            None => defaults.port,
            Some(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!("Invalid LEDGER_PORT '{raw}': must be 0-65535"))
            })?,
        };

        Ok(Self {
            host: host.unwrap_or(defaults.host),
            port,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
