use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions that end a run without rewriting the changelog.
/// These are reported to the user but still exit successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Development versions never get a changelog entry
    DevVersion { version: String },
    /// Dry run: the rewritten changelog was printed instead of saved
    DryRun { path: PathBuf },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::DevVersion { version } => {
                write!(
                    f,
                    "Version '{}' is a development version, changelog left untouched",
                    version
                )
            }
            Notice::DryRun { path } => {
                write!(f, "Dry run: '{}' was not modified", path.display())
            }
        }
    }
}
