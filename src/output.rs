//! CLI output formatting.
//!
//! `format_outcome` is pure (returns lines, no I/O) so tests can assert on
//! the exact messages; `print_outcome` is the stdout wrapper used by main.

use crate::generate::Outcome;
use std::path::Path;

/// Render the run outcome as display lines.
pub fn format_outcome(outcome: &Outcome, output: &Path) -> Vec<String> {
    match outcome {
        Outcome::MissingImageDir(dir) => {
            vec![format!("Image directory not found: {}", dir.display())]
        }
        Outcome::NoImages(dir) => {
            vec![format!("No images found in {}", dir.display())]
        }
        Outcome::Written { report, ids_reset } => {
            let mut lines = Vec::new();
            if *ids_reset {
                lines.push(format!(
                    "Warning: could not read existing {}; restarting ids at 1",
                    output.display()
                ));
            }
            if let Some(backup) = &report.backup {
                lines.push(format!(
                    "Backed up {} -> {}",
                    output.display(),
                    backup.display()
                ));
            }
            lines.push(format!(
                "Generated {} with {} products",
                output.display(),
                report.count
            ));
            lines
        }
    }
}

pub fn print_outcome(outcome: &Outcome, output: &Path) {
    for line in format_outcome(outcome, output) {
        println!("{line}");
    }
}
