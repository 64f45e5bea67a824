//! Service configuration read from the environment (and `.env` when present).

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/students";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_GREETING: &str = "Mahmuda Karima";

#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub max_connections: u32,
    /// Idle floor kept open by the pool; capped at `max_connections`.
    pub min_connections: u32,
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            max_connections: 10,
            min_connections: 10,
            max_lifetime: Duration::from_secs(3 * 60),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub pool: PoolConfig,
    /// Create the database and `students` table at startup when missing.
    pub bootstrap_schema: bool,
    pub greeting: String,
    pub max_body_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            pool: PoolConfig::default(),
            bootstrap_schema: true,
            greeting: DEFAULT_GREETING.into(),
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ServiceConfig {
    /// Load from process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServiceConfig::default();
        let max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.pool.max_connections)?;
        let min_connections: u32 =
            parse_or(&lookup, "DB_MIN_CONNECTIONS", defaults.pool.min_connections)?;
        let lifetime_secs = parse_or(
            &lookup,
            "DB_MAX_LIFETIME_SECS",
            defaults.pool.max_lifetime.as_secs(),
        )?;
        Ok(ServiceConfig {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            pool: PoolConfig {
                max_connections,
                min_connections: min_connections.min(max_connections),
                max_lifetime: Duration::from_secs(lifetime_secs),
            },
            bootstrap_schema: parse_or(&lookup, "BOOTSTRAP_SCHEMA", defaults.bootstrap_schema)?,
            greeting: lookup("GREETING").unwrap_or(defaults.greeting),
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
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
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ServiceConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.pool.max_connections, 10);
        assert_eq!(cfg.pool.min_connections, 10);
        assert_eq!(cfg.pool.max_lifetime, Duration::from_secs(180));
        assert!(cfg.bootstrap_schema);
        assert_eq!(cfg.greeting, DEFAULT_GREETING);
    }

    #[test]
    fn min_connections_capped_at_max() {
        let cfg = ServiceConfig::from_lookup(lookup_from(&[
            ("DB_MAX_CONNECTIONS", "4"),
            ("DB_MIN_CONNECTIONS", "8"),
        ]))
        .unwrap();
        assert_eq!(cfg.pool.max_connections, 4);
        assert_eq!(cfg.pool.min_connections, 4);
    }

    #[test]
    fn rejects_unparseable_values() {
        let err = ServiceConfig::from_lookup(lookup_from(&[("BOOTSTRAP_SCHEMA", "sometimes")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BOOTSTRAP_SCHEMA", .. }));
    }
}
