//! Terminal output: the tool's status and error reporting channel.

use console::style;

use crate::notice::Notice;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a notice on stderr so that stdout stays clean for dry-run output.
pub fn display_notice(notice: &Notice) {
    eprintln!("{} {}", style("⚠").yellow(), notice);
}

/// Summarize the two edits made to the changelog.
pub fn display_release_summary(released: &str, release_date_line: &str, next: &str) {
    println!("\n{}", style("Changelog updated:").bold());
    println!("  Released: {} ({})", style(released).green(), release_date_line);
    println!("  Pending:  {}", style(next).cyan());
}
