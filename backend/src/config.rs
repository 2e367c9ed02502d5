//! Runtime settings for the catalog server, read from the environment.
//!
//! | Variable             | Default          |
//! |----------------------|------------------|
//! | `CATALOG_HOST`       | `127.0.0.1`      |
//! | `CATALOG_PORT`       | `8080`           |
//! | `CATALOG_DB_PATH`    | `catalog.sqlite` |
//! | `CATALOG_PUBLIC_DIR` | `./public`       |

use crate::error::ConfigError;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PATH: &str = "catalog.sqlite";
const DEFAULT_PUBLIC_DIR: &str = "./public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub public_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("CATALOG_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort {
                    name: "CATALOG_PORT",
                    source,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            host: get("CATALOG_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            db_path: get("CATALOG_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            public_dir: get("CATALOG_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, PathBuf::from("catalog.sqlite"));
        assert_eq!(config.public_dir, PathBuf::from("./public"));
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("CATALOG_HOST", "0.0.0.0"),
            ("CATALOG_PORT", "3000"),
            ("CATALOG_DB_PATH", "/tmp/products.sqlite"),
            ("CATALOG_PUBLIC_DIR", "   "),
        ])
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_path, PathBuf::from("/tmp/products.sqlite"));
        assert_eq!(config.public_dir, PathBuf::from("./public"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("CATALOG_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("CATALOG_PORT"));
    }
}
