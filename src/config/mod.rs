pub use cutlist_core::config::*;

use anyhow::{Context, Result};
use std::path::Path;

const DEFAULT_PATHS: [&str; 3] = [
    "./cutlist.toml",
    "~/.config/cutlist/config.toml",
    "/etc/cutlist/config.toml",
];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    Config::from_toml(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Load config from `custom_path` or the default locations, then overlay the
/// process environment.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    let mut config = load_file_or_default(custom_path)?;
    config
        .apply_env(|key| std::env::var(key).ok())
        .context("Invalid environment configuration")?;
    Ok(config)
}

fn load_file_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    for path_str in DEFAULT_PATHS {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}
