use anyhow::{Context, Result};

// ============================================================================
// Application Configuration
// ============================================================================
//
// Read from the environment; every setting has a default so the demo runs
// with no configuration at all. Log filtering is configured separately via
// RUST_LOG (see main.rs).
//
// ============================================================================

pub const DATABASE_URL_VAR: &str = "STOREFRONT_DATABASE_URL";
pub const DB_MAX_CONNECTIONS_VAR: &str = "STOREFRONT_DB_MAX_CONNECTIONS";

#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// sqlx connection URL
    pub url: String,
    /// Pool size; must stay 1 for `sqlite::memory:`
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(DATABASE_URL_VAR) {
            config.database.url = url;
        }

        if let Some(raw) = lookup(DB_MAX_CONNECTIONS_VAR) {
            config.database.max_connections = raw
                .parse()
                .with_context(|| format!("{DB_MAX_CONNECTIONS_VAR} must be a positive integer, got {raw:?}"))?;
            if config.database.max_connections == 0 {
                anyhow::bail!("{DB_MAX_CONNECTIONS_VAR} must be greater than 0");
            }
        }

        Ok(config)
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 1);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DATABASE_URL_VAR, "sqlite://store.db"),
            (DB_MAX_CONNECTIONS_VAR, "4"),
        ]))
        .unwrap();

        assert_eq!(config.database.url, "sqlite://store.db");
        assert_eq!(config.database.max_connections, 4);
    }

    #[test]
    fn test_invalid_pool_size_is_rejected() {
        assert!(AppConfig::from_lookup(lookup_from(&[(DB_MAX_CONNECTIONS_VAR, "many")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[(DB_MAX_CONNECTIONS_VAR, "0")])).is_err());
    }
}
