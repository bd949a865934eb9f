use std::path::PathBuf;

/// Runtime settings for a collection run.
///
/// The fixed request headers are not part of this struct; they live in the
/// YAML file at `headers_path` and are loaded separately via
/// [`crate::load_headers`] so that cookie values never end up in config dumps.
/// The store range comes from the `collect` command's flags.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub api_base_url: String,
    pub headers_path: PathBuf,
    pub output_path: PathBuf,
}
