pub mod app_config;
pub mod config;
pub mod headers;
pub mod items;
pub mod store;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use headers::{load_headers, RequestHeaders};
pub use items::{is_empty_payload, ResultMapping};
pub use store::{StoreId, StoreRange};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read headers file {path}: {source}")]
    HeadersFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse headers file: {0}")]
    HeadersFileParse(#[source] serde_yaml::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
