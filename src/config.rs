use anyhow::Context;

use crate::service::Service;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env(service: Service) -> anyhow::Result<Self> {
        Self::from_lookup(service, |key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(service: Service, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid number, got {raw:?}"))?,
            None => service.default_port(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
