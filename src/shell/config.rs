use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Guest frontend base, ends with a slash. Table deep links and CORS derive from it.
    pub frontend_url: String,
    /// development | staging | production
    pub environment: String,
    /// Bearer token accepted as a tenant session by the in-memory identity provider.
    pub dev_access_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => 8080,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            frontend_url: lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:4000/".into()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            dev_access_token: lookup("DEV_ACCESS_TOKEN").filter(|t| !t.is_empty()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
