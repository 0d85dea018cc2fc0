// src/cli.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::config::options::{Options, Source};
use crate::analysis::AnalyzerKind;

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Mode {
    Run(Options),
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown arg: {0}")]
    UnknownArg(String),
    #[error("Specify --symbol <SYM>")]
    MissingSymbol,
}

/// Parse args (program name already skipped).
/// Single-dash long flags (`-symbol`) are accepted as well.
pub fn parse_args<I>(args: I) -> Result<Mode, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| CliError::MissingValue(s!(flag)));
        match a.as_str() {
            "-s" | "--symbol" | "-symbol" => opts.symbol = value(&a)?,
            "-a" | "--analyzer" | "-analyzer" => opts.analyzer = AnalyzerKind::from_name(&value(&a)?),
            "--pages" | "-pages" => opts.source = Source::PageDir(PathBuf::from(value(&a)?)),
            "-h" | "--help" | "-help" => return Ok(Mode::Help),
            _ => return Err(CliError::UnknownArg(a)),
        }
    }

    if opts.symbol.trim().is_empty() {
        return Err(CliError::MissingSymbol);
    }
    Ok(Mode::Run(opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Mode, CliError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn run_opts(args: &[&str]) -> Options {
        match parse(args) {
            Ok(Mode::Run(o)) => o,
            Ok(Mode::Help) => panic!("unexpected help"),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn symbol_and_analyzer() {
        let o = run_opts(&["--symbol", "aapl", "--analyzer", "scored"]);
        assert_eq!(o.symbol, "aapl");
        assert_eq!(o.analyzer, AnalyzerKind::Scored);
        assert_eq!(o.source, Source::Yahoo);
    }

    #[test]
    fn go_style_flags_and_short_flags() {
        let o = run_opts(&["-symbol", "TSLA", "-analyzer", "asana"]);
        assert_eq!(o.analyzer, AnalyzerKind::Scored);
        let o = run_opts(&["-s", "TSLA", "-a", "whatever"]);
        assert_eq!(o.analyzer, AnalyzerKind::Plain);
    }

    #[test]
    fn pages_dir() {
        let o = run_opts(&["-s", "AMD", "--pages", "saved"]);
        assert_eq!(o.source, Source::PageDir(PathBuf::from("saved")));
    }

    #[test]
    fn errors() {
        assert_eq!(parse(&[]).err(), Some(CliError::MissingSymbol));
        assert_eq!(parse(&["--symbol"]).err(), Some(CliError::MissingValue(s!("--symbol"))));
        assert_eq!(parse(&["-s", "X", "--bogus"]).err(), Some(CliError::UnknownArg(s!("--bogus"))));
    }

    #[test]
    fn help_wins() {
        assert!(matches!(parse(&["--help"]), Ok(Mode::Help)));
        assert!(HELP.contains("--symbol"));
    }
}
