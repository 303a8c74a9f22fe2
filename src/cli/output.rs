//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{LexisArgs, OutputFormat};
use crate::error::Result;
use crate::similarity::MatchReport;

/// Result structure for a phrase comparison.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub input: String,
    pub compare_with: String,
    #[serde(flatten)]
    pub report: MatchReport,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub input_tokens: Option<Vec<Token>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub compare_tokens: Option<Vec<Token>>,
}

/// Write a result in the format selected by `args`.
pub fn write_result<W: Write>(
    out: &mut W,
    result: &ComparisonResult,
    args: &LexisArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_human(out, result),
        OutputFormat::Json => write_json(out, result, args),
    }
}

/// The ratio on its own line, preceded by token listings when present.
fn write_human<W: Write>(out: &mut W, result: &ComparisonResult) -> Result<()> {
    if let Some(tokens) = &result.input_tokens {
        writeln!(out, "input:        {}", format_tokens(tokens))?;
    }
    if let Some(tokens) = &result.compare_tokens {
        writeln!(out, "compare with: {}", format_tokens(tokens))?;
    }
    writeln!(out, "{:?}", result.report.ratio)?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, result: &ComparisonResult, args: &LexisArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}

fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn sample(with_tokens: bool) -> ComparisonResult {
        let tokens = vec![
            Token::new("Малый", 0, false).unwrap(),
            Token::new("пр.", 1, false).unwrap(),
            Token::new("проезд", 2, true).unwrap(),
        ];
        ComparisonResult {
            input: "Малый пер.".to_string(),
            compare_with: "Малый пр.".to_string(),
            report: MatchReport {
                matched: 1,
                raw_matches: 1,
                countable: 2,
                ratio: 0.5,
            },
            input_tokens: with_tokens.then(|| tokens.clone()),
            compare_tokens: with_tokens.then_some(tokens),
        }
    }

    fn render(result: &ComparisonResult, argv: &[&str]) -> String {
        let args = LexisArgs::try_parse_from(argv).unwrap();
        let mut buf = Vec::new();
        write_result(&mut buf, result, &args).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_prints_bare_ratio() {
        assert_eq!(render(&sample(false), &["lexis"]), "0.5\n");
    }

    #[test]
    fn test_human_whole_ratio_keeps_decimal_point() {
        let mut result = sample(false);
        result.report.ratio = 1.0;
        assert_eq!(render(&result, &["lexis"]), "1.0\n");
    }

    #[test]
    fn test_human_with_tokens() {
        let output = render(&sample(true), &["lexis"]);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "input:        0:Малый 1:пр. 2:проезд*");
        assert_eq!(lines[2], "0.5");
    }

    #[test]
    fn test_json_report() {
        let output = render(&sample(false), &["lexis", "-f", "json"]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["input"], "Малый пер.");
        assert_eq!(value["matched"], 1);
        assert_eq!(value["countable"], 2);
        assert_eq!(value["ratio"], 0.5);
        assert!(value.get("input_tokens").is_none());
    }

    #[test]
    fn test_json_with_tokens_pretty() {
        let output = render(&sample(true), &["lexis", "-f", "json", "--pretty"]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(output.contains('\n'));
        assert_eq!(value["input_tokens"][2]["text"], "проезд");
        assert_eq!(value["input_tokens"][2]["dictionary_origin"], true);
    }
}
