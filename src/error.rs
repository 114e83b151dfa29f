use thiserror::Error;

/// Unified error type for bump-changelog operations
#[derive(Error, Debug)]
pub enum BumpChangelogError {
    #[error("{}", pending_release_message(.count))]
    MultiplePendingReleases { count: usize },

    #[error("The text for this version '{version}' did not exist in the changelog, fix that first!")]
    MissingVersionSection { version: String },

    #[error(
        "The text for the next version '{version}' already exists in the changelog, fix that first!"
    )]
    DuplicateNextSection { version: String },

    #[error("The pending release date must come after the first release header in the changelog, fix that first!")]
    PendingSectionOutOfOrder,

    #[error("Invalid version component '{component}' in '{version}': expected an integer with an optional '-suffix'")]
    VersionFormat { version: String, component: String },

    #[error("Version '{version}' has no component at index {index}")]
    ComponentIndex { version: String, index: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn pending_release_message(count: &usize) -> String {
    if *count == 0 {
        "No release date 'TBA' in the changelog, fix that first!".to_string()
    } else {
        format!(
            "More than one release date 'TBA' ({} found) in the changelog, fix that first!",
            count
        )
    }
}

/// Convenience type alias for Results in bump-changelog
pub type Result<T> = std::result::Result<T, BumpChangelogError>;

impl BumpChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpChangelogError::Config(msg.into())
    }

    /// Create a version format error for the offending component
    pub fn version_format(version: impl Into<String>, component: impl Into<String>) -> Self {
        BumpChangelogError::VersionFormat {
            version: version.into(),
            component: component.into(),
        }
    }
}
