//! Pure formatting functions for console output.
//!
//! Status and success lines go to stdout; warnings and errors go to stderr.

use console::style;

use crate::domain::{Version, VersionBump};
use crate::sync::FileSet;
use crate::warning::BumpWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning.
pub fn display_warning(warning: &BumpWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the computed version change.
///
/// # Arguments
/// * `current` - Version read from the source file
/// * `next` - Version about to be written
/// * `bump` - Part that was incremented
pub fn display_version_change(current: &Version, next: &Version, bump: VersionBump) {
    println!("\n{}", style(format!("Bumping {} version:", bump)).bold());
    println!("  From: {}", style(current).red());
    println!("  To:   {}", style(next).green());
}

/// Display the files a run would touch, source first.
pub fn display_file_set(file_set: &FileSet) {
    println!("{}", style("Version files:").bold());
    for target in file_set.targets() {
        println!("  - {} ({})", target.path.display(), target.kind);
    }
}

/// Display what a dry run would have changed.
pub fn display_dry_run(file_set: &FileSet, next: &Version) {
    display_status("Dry run: no files will be written or staged");
    for target in file_set.targets() {
        display_success(&format!(
            "  Would set {} in {}",
            next,
            target.path.display()
        ));
    }
}
