//! Terminal output for the clipkit binaries.
//!
//! Progress and results the user asked for go to stdout; failures go to
//! stderr. Colors are only used on a color-capable terminal and never when
//! `NO_COLOR` is set.

use clipkit_core::{BatchOutcome, BatchSummary, CoreError};
use owo_colors::OwoColorize;
use supports_color::Stream;

/// Check if color should be used (respects NO_COLOR environment variable)
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && supports_color::on_cached(Stream::Stdout).is_some()
}

/// Prints the full external command line before it runs.
pub fn print_command(command_line: &str) {
    if should_use_color() {
        println!("{} {}", "Running command:".cyan(), command_line);
    } else {
        println!("Running command: {command_line}");
    }
}

pub fn print_success(message: &str) {
    if should_use_color() {
        println!("{}", message.green());
    } else {
        println!("{message}");
    }
}

/// Prints a failure.
///
/// A failed ffmpeg run prints `label` followed by the tool's own diagnostic
/// text; a failed ffprobe run is reported as such. Other errors print their
/// message.
pub fn print_error(label: &str, error: &CoreError) {
    let (title, detail) = match error {
        CoreError::ExternalTool { tool, stderr, .. } if tool == "ffmpeg" => {
            (format!("{label}:"), Some(stderr.as_str()))
        }
        CoreError::ExternalTool { tool, stderr, .. } => (format!("Error running {tool}:"), Some(stderr.as_str())),
        other => (format!("Error: {other}"), None),
    };

    if should_use_color() {
        eprintln!("{}", title.red().bold());
    } else {
        eprintln!("{title}");
    }
    if let Some(detail) = detail {
        eprintln!("{}", detail.trim_end());
    }
}

/// Prints the per-file outcome table and the totals of a batch run.
pub fn print_batch_summary(summary: &BatchSummary) {
    println!();
    for item in &summary.items {
        let name = item.input.display();
        match &item.outcome {
            BatchOutcome::Converted { output } => {
                print_success(&format!("  ✓ {} -> {}", name, output.display()));
            }
            BatchOutcome::Skipped { width, height, reason } => {
                println!("  - {name} ({width}x{height}): {reason}");
            }
            BatchOutcome::Failed { error } => {
                if should_use_color() {
                    println!("  {} {}: {}", "✗".red(), name, error);
                } else {
                    println!("  ✗ {name}: {error}");
                }
            }
        }
    }

    let totals = format!(
        "{} converted, {} skipped, {} failed",
        summary.converted(),
        summary.skipped(),
        summary.failed()
    );
    if should_use_color() && summary.has_failures() {
        println!("\n{}", totals.yellow().bold());
    } else if should_use_color() {
        println!("\n{}", totals.bold());
    } else {
        println!("\n{totals}");
    }
}
