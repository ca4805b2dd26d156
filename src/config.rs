use crate::client::ClientConfig;
use crate::constants::*;

/// Viewer configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub host: String,
    pub port: u16,
    pub frontend_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so it can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("CATALOG_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(format!(
                "CATALOG_API_URL must be an http(s) URL, got '{}'",
                base_url
            ));
        }

        let items_per_page = match lookup("ITEMS_PER_PAGE") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| {
                    format!("ITEMS_PER_PAGE must be a positive integer, got '{}'", raw)
                })?,
            None => DEFAULT_ITEMS_PER_PAGE,
        };
        if items_per_page == 0 {
            return Err("ITEMS_PER_PAGE must be greater than 0".to_string());
        }

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port_raw = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| format!("PORT must be a valid port number, got '{}'", port_raw))?;

        let frontend_origin =
            lookup("FRONTEND_ORIGIN").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string());

        Ok(Self {
            client: ClientConfig {
                base_url,
                items_per_page,
            },
            host,
            port,
            frontend_origin,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
