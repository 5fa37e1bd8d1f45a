//! Application configuration loaded from environment variables.

use restock::RestockPolicy;

/// Which stock storage backend to run against.
///
/// Chosen once at startup; there is no way to switch mid-process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Transient in-process storage, seeded with the starter catalog.
    #[default]
    Memory,
    /// Durable PostgreSQL storage.
    Postgres,
}

impl StorageBackend {
    /// Parses the `STOCK_BACKEND` selector. Unknown values fall back
    /// to the in-memory backend.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "postgres" | "durable" => StorageBackend::Postgres,
            _ => StorageBackend::Memory,
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables, once, at process start:
/// - `STOCK_BACKEND` — `memory` (default) or `postgres`
/// - `DATABASE_URL` — PostgreSQL connection string; required for the
///   postgres backend and for audit logging
/// - `AUDIT_ENABLED` — `true` to record workflow runs (default: `false`)
/// - `SUPPLIER_BASE_URL` — supplier catalog endpoint
///   (default: `"https://dummyjson.com"`)
/// - `SUPPLIER_TIMEOUT_SECS` — per-request timeout (default: `10`)
/// - `RESTOCK_THRESHOLD` / `RESTOCK_TARGET` — policy levels
///   (defaults: `10` / `20`)
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub audit_enabled: bool,
    pub supplier_base_url: String,
    pub supplier_timeout_secs: u64,
    pub threshold: i64,
    pub target_level: i64,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: std::env::var("STOCK_BACKEND")
                .map(|v| StorageBackend::parse(&v))
                .unwrap_or(defaults.backend),
            database_url: std::env::var("DATABASE_URL").ok(),
            audit_enabled: std::env::var("AUDIT_ENABLED")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.audit_enabled),
            supplier_base_url: std::env::var("SUPPLIER_BASE_URL")
                .unwrap_or(defaults.supplier_base_url),
            supplier_timeout_secs: std::env::var("SUPPLIER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.supplier_timeout_secs),
            threshold: std::env::var("RESTOCK_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.threshold),
            target_level: std::env::var("RESTOCK_TARGET")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.target_level),
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the restock policy from the configured levels.
    pub fn restock_policy(&self) -> RestockPolicy {
        RestockPolicy::new(self.threshold, self.target_level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            database_url: None,
            audit_enabled: false,
            supplier_base_url: "https://dummyjson.com".to_string(),
            supplier_timeout_secs: 10,
            threshold: 10,
            target_level: 20,
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert!(!config.audit_enabled);
        assert_eq!(config.supplier_base_url, "https://dummyjson.com");
        assert_eq!(config.threshold, 10);
        assert_eq!(config.target_level, 20);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn backend_selector_parsing() {
        assert_eq!(StorageBackend::parse("postgres"), StorageBackend::Postgres);
        assert_eq!(StorageBackend::parse("DURABLE"), StorageBackend::Postgres);
        assert_eq!(StorageBackend::parse("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::parse("anything"), StorageBackend::Memory);
    }

    #[test]
    fn restock_policy_uses_configured_levels() {
        let config = Config {
            threshold: 5,
            target_level: 50,
            ..Config::default()
        };
        let policy = config.restock_policy();
        assert_eq!(policy.threshold, 5);
        assert_eq!(policy.target_level, 50);
    }
}
