//! # roster-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, BuffRule, BuffTable, ConfigError, CorsConfig, EngineConfig,
    Environment, RankConfig, RateLimitConfig, RedisConfig, ServerConfig, SnapshotConfig,
    SpecTables,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
