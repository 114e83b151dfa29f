//! Release workflow orchestration
//!
//! Reads the changelog, runs the transformer and writes the result back.
//! Kept separate from argument parsing so the workflow can be driven
//! programmatically without depending on clap.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::changelog::ChangelogTransformer;
use crate::config::Config;
use crate::error::Result;
use crate::version::{is_dev_version, VersionType};

/// Arguments for the release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Version being released
    pub version: String,

    /// Changelog path, overriding the configured one
    pub changelog: Option<PathBuf>,

    /// Component to increment for the next section, overriding the configured one
    pub bump: Option<VersionType>,

    /// Date written into the released section
    pub release_date: NaiveDate,

    /// Preview mode - return the new text without writing it
    pub dry_run: bool,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// Development version: storage was not touched
    Skipped,

    /// The changelog would have been rewritten to `content`
    DryRun {
        path: PathBuf,
        content: String,
        next_version: String,
    },

    /// The changelog at `path` was rewritten
    Written {
        path: PathBuf,
        next_version: String,
        release_date_line: String,
    },
}

/// Main release workflow
///
/// 1. Skip development versions
/// 2. Read the whole changelog
/// 3. Transform it in memory
/// 4. Overwrite the changelog, unless this is a dry run
///
/// Nothing is written when any step fails.
pub fn run_bump_workflow(args: BumpWorkflowArgs, config: &Config) -> Result<WorkflowOutcome> {
    if is_dev_version(&args.version) {
        return Ok(WorkflowOutcome::Skipped);
    }

    let path = args
        .changelog
        .unwrap_or_else(|| config.changelog.path.clone());
    let bump = args.bump.unwrap_or(config.release.bump);

    let transformer = ChangelogTransformer::new(config.changelog.format.clone(), args.release_date)
        .with_bump(bump);

    let content = fs::read_to_string(&path)?;
    let release = transformer.release(&content, &args.version)?;

    if args.dry_run {
        return Ok(WorkflowOutcome::DryRun {
            path,
            content: release.content,
            next_version: release.next_version,
        });
    }

    fs::write(&path, release.content)?;
    Ok(WorkflowOutcome::Written {
        path,
        next_version: release.next_version,
        release_date_line: release.release_date_line,
    })
}
