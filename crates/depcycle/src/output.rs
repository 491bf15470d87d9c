//! Output formatting for check reports.
//!
//! Reports are rendered either as human-readable text or as JSON for
//! programmatic use.

use crate::check::CheckReport;
use colored::Colorize;
use std::env;
use std::io::{self, Write};

/// Output mode for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text
    #[default]
    Text,
    /// JSON for programmatic use
    Json,
}

/// Configuration for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// `NO_COLOR` (any non-empty value) disables colors.
    pub fn from_env() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            use_colors: !no_color,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Render a report as text lines.
pub fn format_report(report: &CheckReport, config: OutputConfig) -> String {
    let summary = format!(
        "{} edges checked, {} nodes, {} edges in graph",
        report.edges_processed, report.node_count, report.edge_count
    );

    match &report.first_cycle {
        None => {
            let status = paint("OK", config, |s| s.green().bold().to_string());
            format!("{status}: no dependency cycle\n  {summary}\n")
        }
        Some(hit) => {
            let status = paint("CYCLE", config, |s| s.red().bold().to_string());
            let edge = paint(&hit.edge.to_string(), config, |s| s.cyan().to_string());
            format!(
                "{status}: edge {edge} on line {} closes a dependency cycle\n  {summary}\n",
                hit.line
            )
        }
    }
}

/// Write a report to `writer` in the requested mode.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &CheckReport,
    mode: OutputMode,
    config: OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Text => writer.write_all(format_report(report, config).as_bytes()),
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)
        }
    }
}

fn paint(text: &str, config: OutputConfig, style: impl Fn(&str) -> String) -> String {
    if config.use_colors {
        style(text)
    } else {
        text.to_string()
    }
}
