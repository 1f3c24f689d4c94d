//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

use super::engine_config::{
    EngineConfig, RankConfig, SpecTables, DEFAULT_ALT_RANKS, DEFAULT_HEALER_SPECS,
    DEFAULT_MAIN_RANKS, DEFAULT_TANK_SPECS,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub redis: Option<RedisConfig>,
    pub snapshot: SnapshotConfig,
    pub engine: EngineConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Redis configuration (roster persistence)
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_roster_key")]
    pub roster_key: String,
}

/// Snapshot source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Path of the JSON snapshot written by the data provider
    pub path: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "guild-roster".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_roster_key() -> String {
    "roster:assignment".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let main_ranks = parse_list::<u8, _>(&lookup, "MAIN_RANKS")?
            .unwrap_or_else(|| DEFAULT_MAIN_RANKS.to_vec());
        let alt_ranks = parse_list::<u8, _>(&lookup, "ALT_RANKS")?
            .unwrap_or_else(|| DEFAULT_ALT_RANKS.to_vec());
        let tank_specs = parse_list::<String, _>(&lookup, "TANK_SPECS")?
            .unwrap_or_else(|| DEFAULT_TANK_SPECS.iter().map(ToString::to_string).collect());
        let healer_specs = parse_list::<String, _>(&lookup, "HEALER_SPECS")?
            .unwrap_or_else(|| DEFAULT_HEALER_SPECS.iter().map(ToString::to_string).collect());

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: lookup("API_PORT")
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            redis: lookup("REDIS_URL").map(|url| RedisConfig {
                url,
                max_connections: lookup("REDIS_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_redis_max_connections),
                roster_key: lookup("ROSTER_KEY").unwrap_or_else(default_roster_key),
            }),
            snapshot: SnapshotConfig {
                path: lookup("SNAPSHOT_PATH").ok_or(ConfigError::MissingVar("SNAPSHOT_PATH"))?,
            },
            engine: EngineConfig {
                ranks: RankConfig::new(main_ranks, alt_ranks)?,
                specs: SpecTables::new(tank_specs, healer_specs),
                ..EngineConfig::default()
            },
            rate_limit: RateLimitConfig {
                requests_per_second: lookup("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_requests_per_second),
                burst: lookup("RATE_LIMIT_BURST")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Parse a comma-separated variable; `None` when unset or blank
fn parse_list<T, F>(lookup: &F, key: &'static str) -> Result<Option<Vec<T>>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key).filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<T>()
                .map_err(|_| ConfigError::InvalidValue(key, s.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("API_PORT", "3000"),
            ("SNAPSHOT_PATH", "./roster.json"),
        ]))
        .unwrap();

        assert_eq!(config.app.name, "guild-roster");
        assert_eq!(config.api.address(), "127.0.0.1:3000");
        assert!(config.redis.is_none());
        assert!(config.engine.ranks.is_main(0));
        assert!(config.engine.ranks.is_alt(7));
        assert!(config.engine.specs.is_tank_spec("Vengeance"));
    }

    #[test]
    fn test_missing_required_vars() {
        let err = AppConfig::from_lookup(lookup_from(&[("SNAPSHOT_PATH", "x")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("API_PORT")));

        let err = AppConfig::from_lookup(lookup_from(&[("API_PORT", "3000")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SNAPSHOT_PATH")));
    }

    #[test]
    fn test_custom_ranks_and_specs() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("API_PORT", "3000"),
            ("SNAPSHOT_PATH", "./roster.json"),
            ("MAIN_RANKS", "0, 1, 3"),
            ("ALT_RANKS", "4"),
            ("TANK_SPECS", "Blood,Protection"),
            ("REDIS_URL", "redis://cache:6379"),
        ]))
        .unwrap();

        assert!(config.engine.ranks.is_main(3));
        assert!(!config.engine.ranks.is_main(2));
        assert!(config.engine.ranks.is_alt(4));
        assert!(!config.engine.specs.is_tank_spec("Guardian"));
        let redis = config.redis.unwrap();
        assert_eq!(redis.url, "redis://cache:6379");
        assert_eq!(redis.roster_key, "roster:assignment");
    }

    #[test]
    fn test_invalid_rank_list() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("API_PORT", "3000"),
            ("SNAPSHOT_PATH", "./roster.json"),
            ("MAIN_RANKS", "0,officer"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("MAIN_RANKS", _)));
    }

    #[test]
    fn test_overlapping_rank_lists() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("API_PORT", "3000"),
            ("SNAPSHOT_PATH", "./roster.json"),
            ("MAIN_RANKS", "0,1"),
            ("ALT_RANKS", "1,2"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("ALT_RANKS", _)));
    }
}
