use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;

use bump_changelog::cli::{run_bump_workflow, BumpWorkflowArgs, WorkflowOutcome};
use bump_changelog::config;
use bump_changelog::notice::Notice;
use bump_changelog::ui;
use bump_changelog::version::VersionType;

#[derive(clap::Parser)]
#[command(
    name = "bump-changelog",
    version,
    about = "Date the pending changelog section and open one for the next version"
)]
struct Args {
    #[arg(value_name = "VERSION", help = "The version being released")]
    release: String,

    #[arg(long, value_name = "PATH", help = "Changelog file to rewrite [default: ChangeLog]")]
    changelog: Option<PathBuf>,

    #[arg(short, long, value_name = "PATH", help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Version component incremented for the next section")]
    bump: Option<VersionType>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Release date [default: today]")]
    date: Option<NaiveDate>,

    #[arg(long, help = "Print the rewritten changelog instead of saving it")]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let release_date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let workflow_args = BumpWorkflowArgs {
        version: args.release.clone(),
        changelog: args.changelog,
        bump: args.bump,
        release_date,
        dry_run: args.dry_run,
    };

    let outcome = match run_bump_workflow(workflow_args, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    match outcome {
        WorkflowOutcome::Skipped => {
            ui::display_notice(&Notice::DevVersion {
                version: args.release,
            });
        }
        WorkflowOutcome::DryRun { path, content, .. } => {
            print!("{}", content);
            ui::display_notice(&Notice::DryRun { path });
        }
        WorkflowOutcome::Written {
            path,
            next_version,
            release_date_line,
        } => {
            ui::display_success(&format!("Updated {}", path.display()));
            ui::display_release_summary(&args.release, &release_date_line, &next_version);
        }
    }

    Ok(())
}
