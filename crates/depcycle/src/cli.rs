//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `check`: Replay an edge list and report the first dependency cycle
//!
//! # Example
//!
//! ```bash
//! depcycle check deps.txt
//! depcycle check --format jsonl --json deps.jsonl
//! cat deps.txt | depcycle check
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::check::check_edges;
use crate::config::Config;
use crate::edges::{parse_edges, read_edges, EdgeFormat};
use crate::output::{write_report, OutputConfig, OutputMode};

/// depcycle - dependency cycle detection for edge lists
///
/// Feeds edges one at a time into a dependency graph and reports the first
/// edge that closes a cycle.
#[derive(Parser, Debug)]
#[command(name = "depcycle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a YAML config file (default: ./.depcycle.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check an edge list for dependency cycles
    ///
    /// Exits with status 1 when a cycle is found.
    Check(CheckArgs),
}

/// Arguments for the `check` command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Edge list to read; stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Input format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<EdgeFormatArg>,

    /// Insert every edge even after a cycle has been found
    #[arg(long)]
    pub keep_going: bool,
}

/// Edge format argument (maps to `EdgeFormat`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EdgeFormatArg {
    /// `a -> b` or `a b` per line
    Text,
    /// One `{"source","target"}` JSON object per line
    Jsonl,
}

impl From<EdgeFormatArg> for EdgeFormat {
    fn from(arg: EdgeFormatArg) -> Self {
        match arg {
            EdgeFormatArg::Text => EdgeFormat::Text,
            EdgeFormatArg::Jsonl => EdgeFormat::Jsonl,
        }
    }
}

/// Result of running a command, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No cycle found
    Clean,
    /// A cycle was found
    CycleFound,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Execute the parsed command
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, the input
    /// cannot be read or parsed, or the report cannot be written. A detected
    /// cycle is not an error; it is reported as [`Outcome::CycleFound`].
    pub fn execute(&self) -> Result<Outcome> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let current_dir = std::env::current_dir().context("Cannot determine working directory")?;
        let config = Config::discover(self.config.as_deref(), &current_dir)?;

        match &self.command {
            Commands::Check(args) => execute_check(args, &config, output_mode),
        }
    }
}

/// Execute the check command
fn execute_check(args: &CheckArgs, config: &Config, output_mode: OutputMode) -> Result<Outcome> {
    let format = args.format.map_or(config.format, EdgeFormat::from);
    let mut options = config.check_options();
    if args.keep_going {
        options.stop_at_first_cycle = false;
    }

    let edges = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => read_edges(path, format)
            .with_context(|| format!("Failed to check '{}'", path.display()))?,
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            parse_edges(&input, format).context("Failed to parse stdin")?
        }
    };

    let report = check_edges(&edges, options);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, &report, output_mode, OutputConfig::from_env())
        .context("Failed to write report")?;

    Ok(if report.is_cyclic() {
        Outcome::CycleFound
    } else {
        Outcome::Clean
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_with_flags() {
        let cli = Cli::try_parse_from([
            "depcycle",
            "--json",
            "check",
            "--format",
            "jsonl",
            "--keep-going",
            "deps.jsonl",
        ])
        .unwrap();

        assert!(cli.json);
        let Commands::Check(args) = cli.command;
        assert_eq!(args.format, Some(EdgeFormatArg::Jsonl));
        assert!(args.keep_going);
        assert_eq!(args.file, Some(PathBuf::from("deps.jsonl")));
    }

    #[test]
    fn test_parse_check_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["depcycle", "check"]).unwrap();
        let Commands::Check(args) = cli.command;
        assert!(args.file.is_none());
        assert!(args.format.is_none());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["depcycle", "check", "--format", "yaml"]).is_err());
    }
}
