//! Configuration management with layered loading
//!
//! Settings only affect how the chart is presented, never the computed data.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/plot-scaling/plot-scaling.toml`
//! 3. Environment variables: `PLOT_SCALING_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Prefix of the environment variables read by `Settings::load`.
pub const ENV_PREFIX: &str = "PLOT_SCALING";

/// Unified configuration for plot-scaling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Render and display the chart after printing the report
    pub show: bool,
    /// Viewer command; the image path is appended as last argument (default: platform opener)
    pub viewer: Option<String>,
    /// The configured viewer returns only once its window is closed
    /// (otherwise the image is kept after the run)
    pub viewer_waits: bool,
    /// Rendered image width in pixels
    pub width: u32,
    /// Rendered image height in pixels
    pub height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show: true,
            viewer: None,
            viewer_waits: false,
            width: 800,
            height: 600,
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub show: Option<bool>,
    pub viewer: Option<String>,
    pub viewer_waits: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Get the XDG config directory for plot-scaling.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "plot-scaling").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("plot-scaling.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Treat a missing key as "not set", anything else as a real error.
fn optional<T>(value: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn pixels(key: &str, value: i64) -> Result<u32, ApplicationError> {
    u32::try_from(value).map_err(|_| ApplicationError::Config {
        message: format!("{key}: {value} is not a valid pixel count"),
    })
}

impl Settings {
    /// Load settings from defaults, the global config file and `PLOT_SCALING_*` env vars.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit config file (skipped if absent) and process env vars.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_env(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load settings with an explicit environment source.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config file
        if let Some(path) = config_file {
            if path.exists() {
                debug!("loading config from {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current, env)?;

        current.validate()?;
        Ok(current)
    }

    /// Overlay wins if specified, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            show: overlay.show.unwrap_or(self.show),
            viewer: overlay.viewer.clone().or_else(|| self.viewer.clone()),
            viewer_waits: overlay.viewer_waits.unwrap_or(self.viewer_waits),
            width: overlay.width.unwrap_or(self.width),
            height: overlay.height.unwrap_or(self.height),
        }
    }

    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Some(val) = optional(config.get_bool("show"))? {
            settings.show = val;
        }
        if let Some(val) = optional(config.get_string("viewer"))? {
            settings.viewer = Some(val);
        }
        if let Some(val) = optional(config.get_bool("viewer_waits"))? {
            settings.viewer_waits = val;
        }
        if let Some(val) = optional(config.get_int("width"))? {
            settings.width = pixels("width", val)?;
        }
        if let Some(val) = optional(config.get_int("height"))? {
            settings.height = pixels("height", val)?;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.width == 0 || self.height == 0 {
            return Err(ApplicationError::Config {
                message: format!(
                    "chart size must be positive, got {}x{}",
                    self.width, self.height
                ),
            });
        }
        if matches!(&self.viewer, Some(v) if v.trim().is_empty()) {
            return Err(ApplicationError::Config {
                message: "viewer command is empty".into(),
            });
        }
        Ok(())
    }

    /// Viewer command split into program and leading arguments.
    pub fn viewer_command(&self) -> Option<(String, Vec<String>)> {
        let mut parts = self.viewer.as_deref()?.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some((program, parts.collect()))
    }
}
