//! Configuration structs

mod app_config;
mod engine_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, Environment, RateLimitConfig, RedisConfig,
    ServerConfig, SnapshotConfig,
};
pub use engine_config::{
    BuffRule, BuffTable, EngineConfig, RankConfig, SpecTables, DEFAULT_ALT_RANKS,
    DEFAULT_HEALER_SPECS, DEFAULT_MAIN_RANKS, DEFAULT_TANK_SPECS,
};
