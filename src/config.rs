//! Host configuration from the environment.
//!
//! `HOST` and `PORT` pick the listen address; everything else about the
//! site (asset paths, output name) comes from the Leptos metadata in
//! `Cargo.toml`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Returns [`AppError::InvalidEnv`] when `HOST` or `PORT` cannot be parsed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// Returns [`AppError::InvalidEnv`] when a present value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(raw) = lookup("HOST") {
            config.host = raw
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidEnv { key: "HOST", value: raw.clone() })?;
        }
        if let Some(raw) = lookup("PORT") {
            config.port = raw
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidEnv { key: "PORT", value: raw.clone() })?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
