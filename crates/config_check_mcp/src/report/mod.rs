use std::fmt::Write as _;

use crate::domain::{Inspection, Verdict};
use crate::errors::ConfigCheckResult;

/// Closing hint printed after every successful parse
pub const CLOSING_HINT: [&str; 2] = [
    "Note: If there are duplicate entries, they may be in separate configuration objects.",
    "Run 'claude mcp list' to see which configuration is being used.",
];

/// Human-readable diagnostic for one inspection
#[derive(Debug)]
pub struct Report<'a> {
    inspection: &'a Inspection,
    server_name: &'a str,
    expected_directories: &'a [String],
}

impl<'a> Report<'a> {
    pub fn new(
        inspection: &'a Inspection,
        server_name: &'a str,
        expected_directories: &'a [String],
    ) -> Self {
        Self {
            inspection,
            server_name,
            expected_directories,
        }
    }

    /// Render the full stdout text, closing hint included
    pub fn render(&self) -> ConfigCheckResult<String> {
        // Writing into a String cannot fail, so `writeln!` results are discarded.
        let mut out = String::new();

        if let Inspection::Found(report) = self.inspection {
            let title = capitalize(self.server_name);
            let descriptor = serde_json::to_string_pretty(&report.descriptor)?;
            let _ = writeln!(out, "Current {} configuration:", self.server_name);
            let _ = writeln!(out, "{descriptor}");

            match &report.verdict {
                Verdict::Correct => {
                    let _ = writeln!(out, "\n✓ {title} configuration is correct!");
                }
                Verdict::WrongDirectories { args } => {
                    let _ = writeln!(out, "\n✗ {title} has wrong directories: {args}");
                    let _ = writeln!(
                        out,
                        "Expected: {}",
                        join_expected(self.expected_directories)
                    );
                }
                Verdict::NoArgs => {
                    let _ = writeln!(out, "\n✗ No args found in {} config", self.server_name);
                }
            }
        }

        let _ = writeln!(out);
        for line in CLOSING_HINT {
            let _ = writeln!(out, "{line}");
        }

        Ok(out)
    }
}

/// Upper-case the first character, leaving the rest untouched
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "a", "a and b", "a, b and c"
fn join_expected(directories: &[String]) -> String {
    match directories {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
