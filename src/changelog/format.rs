use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::{BumpChangelogError, Result};

fn default_banner() -> String {
    "What's New in astroid".to_string()
}

fn default_pending_date() -> String {
    "Release Date: TBA".to_string()
}

fn default_release_date_prefix() -> String {
    "Release Date: ".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Literal markers that make up a release section of the changelog.
///
/// A section looks like:
///
/// ```text
/// What's New in astroid 2.9.0?
/// ============================
/// Release Date: TBA
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogFormat {
    /// Phrase preceding the version in a section header
    #[serde(default = "default_banner")]
    pub banner: String,

    /// Release-date line of the one unreleased section
    #[serde(default = "default_pending_date")]
    pub pending_date: String,

    /// Text placed before the formatted date once a section is released
    #[serde(default = "default_release_date_prefix")]
    pub release_date_prefix: String,

    /// strftime pattern for the release date
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for ChangelogFormat {
    fn default() -> Self {
        ChangelogFormat {
            banner: default_banner(),
            pending_date: default_pending_date(),
            release_date_prefix: default_release_date_prefix(),
            date_format: default_date_format(),
        }
    }
}

impl ChangelogFormat {
    /// Section header for `version`, e.g. "What's New in astroid 2.9.0?"
    pub fn header(&self, version: &str) -> String {
        format!("{} {}?", self.banner, version)
    }

    /// Underline of `=` as long as `header`, counted in characters.
    pub fn underline(header: &str) -> String {
        "=".repeat(header.chars().count())
    }

    /// Release-date line that replaces the pending sentinel.
    ///
    /// Fails when `date_format` asks for fields a calendar date does not have
    /// (hours, time zones) or contains an unknown specifier.
    pub fn release_date_line(&self, date: NaiveDate) -> Result<String> {
        let mut line = self.release_date_prefix.clone();
        write!(line, "{}", date.format(&self.date_format)).map_err(|_| {
            BumpChangelogError::config(format!("invalid date_format '{}'", self.date_format))
        })?;
        Ok(line)
    }

    /// Rejects markers the transformer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.banner.trim().is_empty() {
            return Err(BumpChangelogError::config("banner must not be empty"));
        }
        if self.pending_date.is_empty() {
            return Err(BumpChangelogError::config("pending_date must not be empty"));
        }
        let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        self.release_date_line(sample).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let format = ChangelogFormat::default();
        assert_eq!(format.header("2.9.0"), "What's New in astroid 2.9.0?");
    }

    #[test]
    fn test_underline_counts_characters() {
        assert_eq!(ChangelogFormat::underline("abc"), "===");
        assert_eq!(ChangelogFormat::underline("Nouveautés 1.0?"), "=".repeat(15));
    }

    #[test]
    fn test_release_date_line() {
        let format = ChangelogFormat::default();
        let date = NaiveDate::from_ymd_opt(2021, 11, 24).unwrap();
        assert_eq!(
            format.release_date_line(date).unwrap(),
            "Release Date: 2021-11-24"
        );
    }

    #[test]
    fn test_custom_date_format() {
        let format = ChangelogFormat {
            date_format: "%d/%m/%Y".to_string(),
            ..ChangelogFormat::default()
        };
        let date = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
        assert_eq!(
            format.release_date_line(date).unwrap(),
            "Release Date: 05/01/2021"
        );
    }

    #[test]
    fn test_validate_defaults() {
        assert!(ChangelogFormat::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_markers() {
        let empty_banner = ChangelogFormat {
            banner: "  ".to_string(),
            ..ChangelogFormat::default()
        };
        assert!(empty_banner.validate().is_err());

        let bad_date = ChangelogFormat {
            date_format: "%Q".to_string(),
            ..ChangelogFormat::default()
        };
        assert!(bad_date.validate().is_err());
    }

    #[test]
    fn test_time_fields_are_rejected() {
        for date_format in ["%Y-%m-%d %H:%M", "%S", "%Y %z", "%Z"] {
            let format = ChangelogFormat {
                date_format: date_format.to_string(),
                ..ChangelogFormat::default()
            };
            let err = format.validate().unwrap_err();
            assert!(err.to_string().contains("invalid date_format"));

            let date = NaiveDate::from_ymd_opt(2021, 11, 24).unwrap();
            assert!(format.release_date_line(date).is_err());
        }
    }
}
