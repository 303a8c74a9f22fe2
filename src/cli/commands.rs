//! Command implementations for the Lexis CLI.

use std::io::{self, Write};

use log::{info, warn};

use crate::analysis::lexeme::LexemeAnalyzer;
use crate::cli::args::{LexisArgs, USAGE_EXAMPLE};
use crate::cli::output::{ComparisonResult, write_result};
use crate::config::MatchConfig;
use crate::error::{LexisError, Result};
use crate::similarity;

/// Execute the CLI command, writing to stdout.
pub fn execute_command(args: LexisArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    compare_phrases(&args, &mut out)
}

/// Compare the two phrases given on the command line and write the result.
pub fn compare_phrases<W: Write>(args: &LexisArgs, out: &mut W) -> Result<()> {
    let [input, compare_with] = args.phrases.as_slice() else {
        warn!("Expected two params, got {}", args.phrases.len());
        return Err(LexisError::invalid_argument("Expected two params"));
    };

    let config = MatchConfig::default().with_extra_stop_words(args.stop_words.iter().cloned());
    if !config.stop_words.is_empty() {
        info!("Using {} stop words", config.stop_words.len());
    }
    let analyzer = LexemeAnalyzer::new(config);

    let input_tokens = analyzer.analyze(input)?;
    let compare_tokens = analyzer.analyze(compare_with)?;
    let report = similarity::score(&input_tokens, &compare_tokens)?;

    info!(
        "Matched {} of {} input words ({} raw matches)",
        report.matched, report.countable, report.raw_matches
    );

    let result = ComparisonResult {
        input: input.clone(),
        compare_with: compare_with.clone(),
        report,
        input_tokens: args.explain.then_some(input_tokens),
        compare_tokens: args.explain.then_some(compare_tokens),
    };

    write_result(out, &result, args)
}

/// Describe a failed run on `err_out`, adding the usage example for argument errors.
pub fn report_error<W: Write>(error: &LexisError, err_out: &mut W) -> Result<()> {
    writeln!(err_out, "Error: {error}")?;
    if matches!(error, LexisError::InvalidArgument(_)) {
        writeln!(err_out, "{USAGE_EXAMPLE}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn run(argv: &[&str]) -> Result<String> {
        let args = LexisArgs::try_parse_from(argv).unwrap();
        let mut buf = Vec::new();
        compare_phrases(&args, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_compare_prints_ratio() {
        assert_eq!(run(&["lexis", "Малый пер.", "Малый пр."]).unwrap(), "0.5\n");
        assert_eq!(run(&["lexis", "Малый пер.", "Малый пер."]).unwrap(), "1.0\n");
    }

    #[test]
    fn test_wrong_phrase_count_is_rejected() {
        for argv in [
            vec!["lexis"],
            vec!["lexis", "Малый пер."],
            vec!["lexis", "a", "b", "c"],
        ] {
            let err = run(&argv).unwrap_err();
            assert!(matches!(err, LexisError::InvalidArgument(_)));
            assert_eq!(err.to_string(), "Invalid argument: Expected two params");
        }
    }

    #[test]
    fn test_stop_words_from_command_line() {
        assert_eq!(run(&["lexis", "д. Малый", "Малый"]).unwrap(), "0.0\n");
        assert_eq!(
            run(&["lexis", "-s", "д.", "д. Малый", "Малый"]).unwrap(),
            "1.0\n"
        );
    }

    #[test]
    fn test_empty_input_phrase_fails() {
        let err = run(&["lexis", "", "Малый"]).unwrap_err();
        assert!(matches!(err, LexisError::NoComparableTokens(_)));
    }

    #[test]
    fn test_explain_lists_tokens() {
        let output = run(&["lexis", "--explain", "Малый пер.", "Малый"]).unwrap();

        assert_eq!(
            output,
            "input:        0:Малый 1:пер. 2:переулок* 3:пер-ок*\n\
             compare with: 0:Малый\n\
             0.5\n"
        );
    }

    #[test]
    fn test_missing_phrase_reports_usage() {
        let err = run(&["lexis", "Малый пер."]).unwrap_err();
        let mut buf = Vec::new();
        report_error(&err, &mut buf).unwrap();
        let report = String::from_utf8(buf).unwrap();

        assert_eq!(
            report.lines().collect::<Vec<_>>(),
            vec![
                "Error: Invalid argument: Expected two params",
                "Usage example: lexis 'Малый пер.' 'Малый пр.'",
            ]
        );
    }

    #[test]
    fn test_other_errors_omit_usage() {
        let err = run(&["lexis", " ", "Малый"]).unwrap_err();
        let mut buf = Vec::new();
        report_error(&err, &mut buf).unwrap();
        let report = String::from_utf8(buf).unwrap();

        assert_eq!(report.lines().count(), 1);
        assert!(report.starts_with("Error: No comparable tokens:"));
    }
}
