//! Resize configuration.
//!
//! The run is driven by four constants: the scene directory, the target
//! width and height, and the background color. The directory comes from the
//! command line (defaulting to the directory holding the executable); the
//! other three have stock defaults that an optional `config.toml` placed next
//! to the scenes may override.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! background = [253, 242, 245]  # RGB fill behind the scaled image (#fdf2f5)
//!
//! [target]
//! width = 1180
//! height = 800
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::imaging::{Background, Dimensions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file inside the scene directory.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Resize settings loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PadConfig {
    /// Output canvas size.
    pub target: TargetConfig,
    /// Fill color for the padding.
    pub background: Background,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            target: TargetConfig::default(),
            background: Background::soft_pink(),
        }
    }
}

impl PadConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.width == 0 || self.target.height == 0 {
            return Err(ConfigError::Validation(
                "target.width and target.height must be non-zero".into(),
            ));
        }
        Ok(())
    }

    pub fn target_dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.target.width,
            height: self.target.height,
        }
    }
}

/// Target canvas size in pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            width: 1180,
            height: 800,
        }
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Missing file → stock defaults. Present file → user values on top of the
/// defaults, validated.
pub fn load_config(dir: &Path) -> Result<PadConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(PadConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: PadConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Directory holding the running executable, used as the default scene directory.
pub fn executable_dir() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Scene Pad Configuration
# ======================
# Place this file next to scene-01.png ... scene-10.png.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Fill color behind the scaled image, as [red, green, blue] (0-255).
# The default is a soft pink (#fdf2f5).
background = [253, 242, 245]

# ---------------------------------------------------------------------------
# Output size
# ---------------------------------------------------------------------------
[target]
# Every scene is rewritten at exactly this size. Content is scaled to fit
# and centered; it is never cropped.
width = 1180
height = 800
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_storybook_constants() {
        let config = PadConfig::default();
        assert_eq!(config.target.width, 1180);
        assert_eq!(config.target.height, 800);
        assert_eq!(config.background, Background::rgb(253, 242, 245));
    }

    #[test]
    fn parse_partial_config() {
        let config: PadConfig = toml::from_str("background = [0, 0, 0]").unwrap();
        assert_eq!(config.background, Background::rgb(0, 0, 0));
        assert_eq!(config.target, TargetConfig::default());
    }

    #[test]
    fn parse_partial_target() {
        let config: PadConfig = toml::from_str("[target]\nwidth = 640\n").unwrap();
        assert_eq!(config.target.width, 640);
        assert_eq!(config.target.height, 800);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result: Result<PadConfig, _> = toml::from_str("quality = 90");
        assert!(result.is_err());
    }

    #[test]
    fn background_out_of_range_is_rejected() {
        let result: Result<PadConfig, _> = toml::from_str("background = [256, 0, 0]");
        assert!(result.is_err());
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: PadConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, PadConfig::default());
    }

    #[test]
    fn validate_rejects_zero_target() {
        let mut config = PadConfig::default();
        config.target.height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn target_dimensions_from_config() {
        let config = PadConfig::default();
        assert_eq!(config.target_dimensions().to_string(), "1180x800");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, PadConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "background = [255, 255, 255]\n\n[target]\nwidth = 400\nheight = 300\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.background, Background::rgb(255, 255, 255));
        assert_eq!(config.target_dimensions().to_string(), "400x300");
    }

    #[test]
    fn load_config_invalid_toml_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[target\nwidth =").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[target]\nwidth = 0\n").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn executable_dir_exists() {
        assert!(executable_dir().unwrap().is_dir());
    }
}
