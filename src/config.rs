use std::path::PathBuf;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "LOCAL_LIBRARY_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database_location: PathBuf,
    pub host:              String,
    pub port:              u16,
    pub log_level:         String,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    pub fn as_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn read_config() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_location: PathBuf::from("library.db"),
            host:              "127.0.0.1".into(),
            port:              3000,
            log_level:         "info".into(),
        }
    }
}
