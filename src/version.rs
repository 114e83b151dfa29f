use crate::error::{BumpChangelogError, Result};
use serde::{Deserialize, Serialize};

/// Marker that identifies a development build which must not touch the changelog.
pub const DEV_MARKER: &str = "dev";

/// Selects which dotted component of a version string gets incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VersionType {
    Major,
    Minor,
    #[default]
    Patch,
}

impl VersionType {
    /// Position of the component in the dotted version string.
    pub fn index(self) -> usize {
        match self {
            VersionType::Major => 0,
            VersionType::Minor => 1,
            VersionType::Patch => 2,
        }
    }
}

/// Computes the version that follows `version` by incrementing one component.
///
/// Only the selected component changes. A hyphenated qualifier on that component
/// (`0-final`) is kept, and every other component passes through verbatim, so
/// `2.9.0-final` becomes `2.9.1-final` and `1.2.3.4` becomes `1.2.4.4`.
/// Lower components are not reset.
///
/// # Errors
/// * `ComponentIndex` - the version has no component at the selected position
/// * `VersionFormat` - the numeric part of the component is not a non-negative integer
///
/// # Example
/// ```ignore
/// assert_eq!(next_version("2.9.0", VersionType::Patch)?, "2.9.1");
/// assert_eq!(next_version("2.9.0-final", VersionType::Patch)?, "2.9.1-final");
/// ```
pub fn next_version(version: &str, kind: VersionType) -> Result<String> {
    let mut components: Vec<String> = version.split('.').map(str::to_string).collect();
    let index = kind.index();

    let component = components
        .get(index)
        .ok_or_else(|| BumpChangelogError::ComponentIndex {
            version: version.to_string(),
            index,
        })?;

    let (numeric, qualifier) = match component.split_once('-') {
        Some((numeric, qualifier)) => (numeric, Some(qualifier)),
        None => (component.as_str(), None),
    };

    let bumped = numeric
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| BumpChangelogError::version_format(version, component.as_str()))?;

    let replacement = match qualifier {
        Some(qualifier) => format!("{}-{}", bumped, qualifier),
        None => bumped.to_string(),
    };
    components[index] = replacement;

    Ok(components.join("."))
}

/// Returns true for development versions, which are released without a changelog edit.
pub fn is_dev_version(version: &str) -> bool {
    version.contains(DEV_MARKER)
}
