//! Site configuration
//!
//! A static site has no runtime environment in the browser, so overrides are
//! read from the build-time environment (`WRM_ASSET_BASE`, `WRM_LOG`).

use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

pub const DEFAULT_ASSET_BASE: &str = "/replay-manager/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("Asset base must not be empty")]
    EmptyAssetBase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// URL prefix the screenshots are served under
    pub asset_base: String,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl SiteConfig {
    /// Build a config from optional overrides, falling back to defaults
    pub fn from_values(
        asset_base: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base) = asset_base {
            let base = base.trim();
            if base.is_empty() {
                return Err(ConfigError::EmptyAssetBase);
            }
            config.asset_base = base.to_string();
        }

        if let Some(level) = log_level {
            config.log_level = Level::from_str(level.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
        }

        Ok(config)
    }

    /// Config from the environment the site was built with
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("WRM_ASSET_BASE"), option_env!("WRM_LOG"))
    }

    /// Resolve an asset path against `asset_base`.
    ///
    /// Absolute URLs and root-relative paths pass through unchanged.
    pub fn asset_url(&self, path: &str) -> String {
        let is_absolute = ["http://", "https://", "//", "data:", "/"]
            .iter()
            .any(|prefix| path.starts_with(prefix));
        if is_absolute {
            return path.to_string();
        }

        format!(
            "{}/{}",
            self.asset_base.trim_end_matches('/'),
            path.trim_start_matches("./")
        )
    }
}
