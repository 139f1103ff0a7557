//! Configuration loading.
//!
//! Sources, highest precedence first:
//! 1. `GEMINI_API_KEY` (the analysis credential)
//! 2. `ROLLBOOKD_` environment variables, `__` separating sections
//!    (`ROLLBOOKD_SERVER__BIND=0.0.0.0:8080`)
//! 3. TOML file, `rollbookd.toml` by default
//! 4. Defaults

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "rollbookd.toml";
const DATA_FILE_NAME: &str = "data.json";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds, `host:port`.
    pub bind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON document holding every class. Relative paths resolve against the
    /// working directory.
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DATA_FILE_NAME),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_file = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        let config: Config = Self::figment(&config_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    fn figment(config_file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("ROLLBOOKD_").split("__"))
            .merge(
                Env::raw()
                    .only(&["GEMINI_API_KEY"])
                    .map(|_| "analysis.api_key".into()),
            )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if self.analysis.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "analysis.endpoint must not be empty".to_string(),
            });
        }
        if self.analysis.model.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "analysis.model must not be empty".to_string(),
            });
        }
        if self.store.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                message: "store.data_file must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|e| ConfigError::Validation {
                message: format!("server.bind {:?}: {}", self.server.bind, e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_validate() {
        let config = Config::default();
        config.validate().expect("defaults are valid");
        assert_eq!(config.store.data_file, PathBuf::from("data.json"));
        assert!(config.analysis.api_key.is_none());
        assert_eq!(config.bind_addr().expect("bind").port(), 5000);
    }

    #[test]
    fn bad_bind_is_rejected() {
        let mut config = Config::default();
        config.server.bind = "not-an-address".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn toml_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE_NAME,
                r#"
                [server]
                bind = "127.0.0.1:8080"

                [store]
                data_file = "from-toml.json"
                "#,
            )?;
            jail.set_env("ROLLBOOKD_STORE__DATA_FILE", "from-env.json");
            jail.set_env("GEMINI_API_KEY", "secret");

            let config = Config::load().expect("load");
            assert_eq!(config.server.bind, "127.0.0.1:8080");
            assert_eq!(config.store.data_file, PathBuf::from("from-env.json"));
            assert_eq!(config.analysis.api_key.as_deref(), Some("secret"));
            assert_eq!(config.analysis.model, "gemini-2.0-flash");
            Ok(())
        });
    }
}
