//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so a session can start with zero
//! configuration.

use std::path::PathBuf;

use trainboard_shared::constants::APP_NAME;
use trainboard_shared::SortOrder;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// JSON snapshot to seed the session from.
    /// Env: `SEED_PATH`
    /// Default: none.
    pub seed_path: Option<PathBuf>,

    /// Load the built-in sample dataset when no seed path is given.
    /// Env: `LOAD_SAMPLE_DATA` (true/false)
    /// Default: `true`
    pub load_sample_data: bool,

    /// Initial sort order of the public catalog.
    /// Env: `CATALOG_SORT` (asc/desc)
    /// Default: `asc`
    pub catalog_sort: SortOrder,

    /// Title shown by the dashboard.
    /// Env: `INSTANCE_NAME`
    /// Default: `"Training Board"`
    pub instance_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            load_sample_data: true,
            catalog_sort: SortOrder::Asc,
            instance_name: APP_NAME.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = var("SEED_PATH") {
            if !path.trim().is_empty() {
                config.seed_path = Some(PathBuf::from(path));
            }
        }

        if let Some(val) = var("LOAD_SAMPLE_DATA") {
            match parse_bool(&val) {
                Some(flag) => config.load_sample_data = flag,
                None => tracing::warn!(value = %val, "Invalid LOAD_SAMPLE_DATA, using default"),
            }
        }

        if let Some(val) = var("CATALOG_SORT") {
            match SortOrder::parse(&val) {
                Some(order) => config.catalog_sort = order,
                None => tracing::warn!(value = %val, "Invalid CATALOG_SORT, using default"),
            }
        }

        if let Some(name) = var("INSTANCE_NAME") {
            if !name.trim().is_empty() {
                config.instance_name = name;
            }
        }

        // RUST_LOG is read by tracing-subscriber's EnvFilter directly.

        config
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.seed_path, None);
        assert!(config.load_sample_data);
        assert_eq!(config.catalog_sort, SortOrder::Asc);
        assert_eq!(config.instance_name, "Training Board");
        assert_eq!(from_pairs(&[]), config);
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("SEED_PATH", "/tmp/seed.json"),
            ("LOAD_SAMPLE_DATA", "false"),
            ("CATALOG_SORT", "desc"),
            ("INSTANCE_NAME", "Acme Academy"),
        ]);
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
        assert!(!config.load_sample_data);
        assert_eq!(config.catalog_sort, SortOrder::Desc);
        assert_eq!(config.instance_name, "Acme Academy");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = from_pairs(&[
            ("LOAD_SAMPLE_DATA", "maybe"),
            ("CATALOG_SORT", "sideways"),
            ("INSTANCE_NAME", "  "),
        ]);
        assert_eq!(config, ClientConfig::default());
    }
}
