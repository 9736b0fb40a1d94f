pub mod app_config;
pub mod config;
pub mod feed;
pub mod roles;

pub use app_config::{AppConfig, Environment, PageCountHeader};
pub use config::{load_app_config, load_app_config_from_env};
pub use feed::{FeedRow, BOTTLE_COUNT, BOTTLE_SIZE, DEFAULT_INVENTORY_COUNT};
pub use roles::{AttributeRole, AttributeRoles};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
