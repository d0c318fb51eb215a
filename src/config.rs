//! Configuration
//!
//! Defaults overridden from the environment (after `.env` is loaded).

use std::env;
use std::path::PathBuf;

use crate::orchestrator::Mode;

pub const ENV_DB_PATH: &str = "SEMIOTIC_DB_PATH";
pub const ENV_SCHEMA_PATH: &str = "SEMIOTIC_SCHEMA_PATH";
pub const ENV_MODE: &str = "SEMIOTIC_MODE";
pub const ENV_LOG: &str = "SEMIOTIC_LOG";

/// Configuration for the annotator
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatorConfig {
    /// Path to the SQLite record store
    pub db_path: PathBuf,
    /// Path to the schema document (JSON or YAML)
    pub schema_path: PathBuf,
    /// Mode used for each turn unless changed interactively
    pub mode: Mode,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("egs.db"),
            schema_path: PathBuf::from("schema/eg_schema.json"),
            mode: Mode::ModusPonens,
            log_filter: "semiotic_agency=info".to_string(),
        }
    }
}

impl AnnotatorConfig {
    /// Defaults with any `SEMIOTIC_*` variables applied
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_SCHEMA_PATH) {
            config.schema_path = PathBuf::from(path);
        }
        if let Some(mode) = lookup(ENV_MODE) {
            config.mode = mode
                .parse()
                .map_err(|e: String| anyhow::anyhow!("{}: {}", ENV_MODE, e))?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AnnotatorConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AnnotatorConfig::default());
        assert_eq!(config.db_path, PathBuf::from("egs.db"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_DB_PATH, "/tmp/x.db"),
            (ENV_MODE, "abduction"),
            (ENV_SCHEMA_PATH, "schema.yaml"),
        ]
        .into_iter()
        .collect();

        let config = AnnotatorConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(config.schema_path, PathBuf::from("schema.yaml"));
        assert_eq!(config.mode, Mode::Abduction);
    }

    #[test]
    fn test_bad_mode() {
        let result = AnnotatorConfig::from_lookup(|k| (k == ENV_MODE).then(|| "induction".to_string()));
        assert!(result.is_err());
    }
}
