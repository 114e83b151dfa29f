use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::changelog::ChangelogFormat;
use crate::error::Result;
use crate::version::VersionType;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "bumpchangelog.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".bumpchangelog.toml";

/// Changelog rewritten when neither the CLI nor the config names one.
pub const DEFAULT_CHANGELOG_PATH: &str = "ChangeLog";

/// Represents the complete configuration for bump-changelog.
///
/// Contains the changelog location and markers, and release behavior.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_changelog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CHANGELOG_PATH)
}

/// Where the changelog lives and how its sections are written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: PathBuf,

    #[serde(flatten)]
    pub format: ChangelogFormat,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
            format: ChangelogFormat::default(),
        }
    }
}

/// Configuration for release behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    /// Component incremented for the next pending section
    #[serde(default)]
    pub bump: VersionType,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpchangelog.toml` in current directory
/// 3. `.bumpchangelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses and validates configuration text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    config.changelog.format.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.changelog.path, PathBuf::from("ChangeLog"));
        assert_eq!(config.release.bump, VersionType::Patch);
    }

    #[test]
    fn test_partial_changelog_section() {
        let config = parse_config(
            r#"
[changelog]
banner = "What's New in Pylint"
"#,
        )
        .unwrap();
        assert_eq!(config.changelog.format.banner, "What's New in Pylint");
        assert_eq!(config.changelog.format.pending_date, "Release Date: TBA");
        assert_eq!(config.changelog.path, PathBuf::from("ChangeLog"));
    }

    #[test]
    fn test_release_bump() {
        let config = parse_config("[release]\nbump = \"minor\"\n").unwrap();
        assert_eq!(config.release.bump, VersionType::Minor);
    }

    #[test]
    fn test_unknown_bump_is_rejected() {
        assert!(parse_config("[release]\nbump = \"build\"\n").is_err());
    }

    #[test]
    fn test_invalid_date_format_is_rejected() {
        let err = parse_config("[changelog]\ndate_format = \"%Q\"\n").unwrap_err();
        assert!(err.to_string().contains("date_format"));
    }

    #[test]
    fn test_time_fields_in_date_format_are_rejected() {
        let err = parse_config("[changelog]\ndate_format = \"%Y-%m-%d %H:%M\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
