//! Process configuration read from the environment.

use std::{env, net::SocketAddr, path::PathBuf};

use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DATASET: &str = "dataset.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SEARCH_ACCESS_TOKEN must be set")]
    MissingAccessToken,

    #[error("invalid SEARCH_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{0} is not valid UTF-8")]
    NotUnicode(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub access_token: String,
    pub dataset: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, env::VarError>,
    {
        let read = |name: &'static str| match lookup(name) {
            Ok(value) if !value.is_empty() => Ok(Some(value)),
            Ok(_) | Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
        };

        let raw_addr = read("SEARCH_ADDR")?.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;
        let access_token = read("SEARCH_ACCESS_TOKEN")?.ok_or(ConfigError::MissingAccessToken)?;
        let dataset = read("SEARCH_DATASET")?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

        Ok(Self {
            addr,
            access_token,
            dataset,
        })
    }
}
