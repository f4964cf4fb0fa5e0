// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use tokio::fs;

/// The name of the Huddle application.
pub const APP_NAME: &str = "huddle";

const HUDDLE_CONFIG_ENV: &str = "HUDDLE_CONFIG";

const fn default_timeout_secs() -> u64 {
    10
}

/// Configuration for the Huddle CLI.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Base URL of the meetings API.
    pub api_base_url: String,

    /// Bearer token for the API, if it requires one.
    #[serde(default)]
    pub token: Option<String>,

    /// Directory exported `.ics` files are written into.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        // Normalize the API base URL
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err("'api_base_url' must not be empty".into());
        }
        self.api_base_url = trimmed.to_string();

        // Normalize the export directory
        match &self.export_dir {
            Some(dir) => {
                self.export_dir = Some(
                    expand_path(dir)
                        .map_err(|e| format!("Failed to expand export directory path: {e}"))?,
                );
            }
            None => match get_data_dir() {
                Ok(dir) => self.export_dir = Some(dir.join(APP_NAME).join("exports")),
                Err(e) => tracing::warn!("Failed to get data directory: {e}"),
            },
        }

        Ok(())
    }
}

/// Locate, read and normalize the configuration file.
///
/// The path is taken from the `--config` flag first, then the
/// `HUDDLE_CONFIG` environment variable, then the user's config directory.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(HUDDLE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;

    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("Failed to parse config: {e}"))?;
    config.normalize()?;
    Ok(config)
}

/// Handle tilde (~) and home environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn get_data_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_dir();
    data_dir.ok_or_else(|| "User-specific data directory not found".into())
}
