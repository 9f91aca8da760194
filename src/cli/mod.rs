//! CLI module for the Viper front end
//!
//! This module provides the command-line interface over the lexer and parser.
//!
//! ## Usage
//!
//! - `viper <file>` - Lex and parse a file, print `OK` or the first error
//! - `viper --lex <file>` - Print the token stream, one token per line
//! - `viper --parse <file>` - Print the AST debug tree
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use viper_syntax::parser::ParseOptions;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Viper programming language front end
#[derive(Parser, Debug)]
#[command(name = "viper")]
#[command(version = VERSION)]
#[command(about = "Lex and parse Viper source files", long_about = None)]
pub struct Cli {
    /// File to lex and parse (default action)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize only
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "parse_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse and print the AST
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Maximum bracket and block nesting before parsing stops
    #[arg(long = "max-depth", value_name = "N", default_value_t = ParseOptions::default().max_depth)]
    pub max_depth: usize,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_depth: self.max_depth,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let options = cli.parse_options();

    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file, options);
    }

    match cli.file {
        Some(file) => commands::check_file(&file, options),
        // No file - nothing to do
        None => Err(CliError::failure("Error: no input file (see --help)")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["viper", "main.vp"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("main.vp")));
        assert_eq!(cli.max_depth, ParseOptions::default().max_depth);
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["viper", "--lex", "main.vp"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["viper", "--parse", "main.vp"]).unwrap();
        assert!(cli.parse_file.is_some());
    }

    #[test]
    fn test_cli_debug_flags_conflict_with_file() {
        assert!(Cli::try_parse_from(["viper", "a.vp", "--lex", "b.vp"]).is_err());
        assert!(Cli::try_parse_from(["viper", "--lex", "a.vp", "--parse", "b.vp"]).is_err());
    }

    #[test]
    fn test_cli_max_depth() {
        let cli = Cli::try_parse_from(["viper", "--max-depth", "64", "main.vp"]).unwrap();
        assert_eq!(cli.parse_options().max_depth, 64);
        assert!(Cli::try_parse_from(["viper", "--max-depth", "deep", "main.vp"]).is_err());
    }

    #[test]
    fn test_cli_version() {
        let err = Cli::try_parse_from(["viper", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(err.to_string().trim_end(), format!("viper {VERSION}"));
    }
}
