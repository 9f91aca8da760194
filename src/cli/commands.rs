//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use viper_syntax::diagnostics::{self, SyntaxError};
use viper_syntax::lexer::{self, Token};
use viper_syntax::parser::{self, ParseOptions};

use super::{CliError, CliResult, ExitCode};
use crate::source::read_source;

fn load(file_path: &Path) -> CliResult<String> {
    read_source(file_path).map_err(|e| CliError::failure(e.to_string()))
}

/// Render a front-end failure against its source for the terminal.
fn syntax_failure(file_path: &Path, source: &str, err: impl Into<SyntaxError>) -> CliError {
    let err = err.into();
    let msg = diagnostics::format_error(&file_path.to_string_lossy(), source, &err);
    CliError::failure(msg.trim_end())
}

fn lex_source(file_path: &Path, source: &str) -> CliResult<Vec<Token>> {
    lexer::lex(source).map_err(|err| syntax_failure(file_path, source, err))
}

/// Lex and parse a file, printing `OK` on success.
pub fn check_file(file_path: &Path, options: ParseOptions) -> CliResult<ExitCode> {
    let source = load(file_path)?;
    let tokens = lex_source(file_path, &source)?;
    parser::parse_with_options(&tokens, options).map_err(|err| syntax_failure(file_path, &source, err))?;
    println!("OK");
    Ok(ExitCode::SUCCESS)
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = load(file_path)?;
    for tok in lex_source(file_path, &source)? {
        println!("{tok}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &Path, options: ParseOptions) -> CliResult<ExitCode> {
    let source = load(file_path)?;
    let tokens = lex_source(file_path, &source)?;
    let ast = parser::parse_with_options(&tokens, options).map_err(|err| syntax_failure(file_path, &source, err))?;
    println!("{ast:#?}");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("viper_cli_{}_{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_check_file_ok() {
        let path = fixture("ok.vp", "x = 1\n");
        let result = check_file(&path, ParseOptions::default());
        let _ = fs::remove_file(&path);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_check_file_renders_lex_error() {
        let path = fixture("lex_err.vp", "x = $\n");
        let err = check_file(&path, ParseOptions::default()).unwrap_err();
        let _ = fs::remove_file(&path);
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("lexical error: Encountered unexpected character: '$'"));
        assert!(err.message.contains(":1:5"));
    }

    #[test]
    fn test_parse_file_renders_parse_error() {
        let path = fixture("parse_err.vp", "x = = 1\n");
        let err = parse_file(&path, ParseOptions::default()).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(err.message.starts_with("syntax error: Unexpected token '='"));
    }

    #[test]
    fn test_missing_file() {
        let err = lex_file(Path::new("no/such/file.vp")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }
}
