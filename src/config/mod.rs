//! Process configuration. Read once in `main` and handed to the store and router explicitly.

use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "todos.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// SQLite file holding the `todos` table. From env `DATABASE_PATH`.
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`; its `index.html` is the landing page at `/`.
    pub static_dir: PathBuf,
    pub body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            body_limit: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl AppConfig {
    /// Build from process env: `DATABASE_PATH`, `HOST`, `PORT`, `STATIC_DIR`, `BODY_LIMIT_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: v })?,
            None => defaults.port,
        };
        let body_limit = match get("BODY_LIMIT_BYTES") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "BODY_LIMIT_BYTES", value: v })?,
            None => defaults.body_limit,
        };

        Ok(Self {
            database_path: get("DATABASE_PATH").map(PathBuf::from).unwrap_or(defaults.database_path),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            body_limit,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_env_uses_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.database_path, PathBuf::from("todos.db"));
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
        assert_eq!(cfg.static_dir, PathBuf::from("static"));
        assert_eq!(cfg.body_limit, DEFAULT_BODY_LIMIT_BYTES);
    }

    #[test]
    fn database_path_is_overridable() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("DATABASE_PATH", "test_todos.db")])).unwrap();
        assert_eq!(cfg.database_path, PathBuf::from("test_todos.db"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("DATABASE_PATH", "  "), ("PORT", "")])).unwrap();
        assert_eq!(cfg.database_path, PathBuf::from("todos.db"));
        assert_eq!(cfg.port, 8000);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        match err {
            ConfigError::Invalid { key, value } => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
        }
    }

    #[test]
    fn host_and_port_compose_bind_addr() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "3000")])).unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }
}
