//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/roconv/roconv.toml`
//! 3. Environment variables: `ROCONV_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, Mode};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "ROCONV";

/// Unified configuration for roconv.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Conversion mode: "I"/"i" roman to arabic, "1" arabic to roman
    pub mode: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::default().to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub mode: Option<String>,
}

/// Get the XDG config directory for roconv.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "roconv").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("roconv.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Parse the configured mode.
    pub fn mode(&self) -> ApplicationResult<Mode> {
        self.mode.parse()
    }

    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            mode: overlay.mode.clone().unwrap_or_else(|| self.mode.clone()),
        }
    }

    /// Load settings from the global config file and the process environment.
    pub fn load() -> ApplicationResult<Self> {
        let global = global_config_path();
        Self::load_with(
            global.as_deref(),
            Environment::with_prefix(ENV_PREFIX).separator("__"),
        )
    }

    /// Load settings with layered precedence from explicit sources.
    ///
    /// # Arguments
    /// * `global_path` - Global config file; skipped when `None` or missing
    /// * `env` - Environment source for `ROCONV_*` overrides
    pub fn load_with(global_path: Option<&Path>, env: Environment) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                debug!("load: global config {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current, env)?;
        Ok(current)
    }

    /// Apply ROCONV_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("mode") {
            debug!("load: mode overridden by environment: {}", val);
            settings.mode = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# roconv configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/roconv/roconv.toml
#   Env:    ROCONV_* environment variables
#   Flags:  --mode on the command line

# Conversion mode
#   "1"        arabic to roman (default)
#   "I" or "i" roman to arabic
# mode = "1"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
