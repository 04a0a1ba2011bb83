pub mod app_config;
pub mod cart;
pub mod config;
pub mod products;
pub mod reviews;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use cart::CartLine;
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Category, ColorOption, Product, PLACEHOLDER_IMAGE};
pub use reviews::Review;

/// Every configuration variable carries a default, so the only way loading
/// can fail is a value that refuses to parse.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
