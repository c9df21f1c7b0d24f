/*!
Command line argument parsing.
*/

use std::path::PathBuf;

use anyhow::{bail, Context};

const USAGE: &str = "\
sigscope: highlight known binary signatures in a file's visible window.

USAGE:
    sigscope --signatures <FILE> [OPTIONS] <FILE>

OPTIONS:
    -s, --signatures <FILE>  JSON array of signatures; each entry carries a
                             \"label\" and either a \"hash\" (u32, matched as
                             4 little-endian bytes) or a \"hex\" byte string
    -c, --columns <N>        bytes per display row (default: 16)
    -r, --rows <A:B>         realized display rows, half-open
                             (default: every row of the file)
        --select <A:B>       selection span as inclusive byte offsets;
                             prints the ranges fully containing it
        --json               emit the selection report as JSON
        --debug              log scan activity to stderr
    -h, --help               print this help

Offsets and row numbers accept decimal or 0x-prefixed hex.
";

/// Parsed command line arguments.
#[derive(Debug)]
pub(crate) struct Args {
    /// The binary file to inspect.
    pub(crate) path: PathBuf,
    /// The JSON signature definition file.
    pub(crate) signatures: PathBuf,
    /// Bytes per display row.
    pub(crate) columns: usize,
    /// Realized display rows `[start, end)`, or the whole file.
    pub(crate) rows: Option<(usize, usize)>,
    /// Inclusive selection span in byte offsets.
    pub(crate) select: Option<(usize, usize)>,
    /// Emit the selection report as JSON instead of text.
    pub(crate) json: bool,
    /// Enable debug logging to stderr.
    pub(crate) debug: bool,
}

/// Parses the process arguments, printing usage and exiting on `--help`.
pub(crate) fn parse() -> anyhow::Result<Args> {
    use lexopt::prelude::*;

    let mut path = None;
    let mut signatures = None;
    let mut columns = sigscope_scanner::Highlighter::DEFAULT_COLUMNS;
    let mut rows = None;
    let mut select = None;
    let mut json = false;
    let mut debug = false;

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('s') | Long("signatures") => {
                signatures = Some(PathBuf::from(parser.value()?));
            }
            Short('c') | Long("columns") => {
                columns = parser.value()?.parse()?;
                if columns == 0 {
                    bail!("--columns must be at least 1");
                }
            }
            Short('r') | Long("rows") => {
                rows = Some(parse_span(&parser.value()?.string()?)?);
            }
            Long("select") => {
                select = Some(parse_span(&parser.value()?.string()?)?);
            }
            Long("json") => json = true,
            Long("debug") => debug = true,
            Short('h') | Long("help") => {
                print!("{}", USAGE);
                std::process::exit(0);
            }
            Value(value) if path.is_none() => {
                path = Some(PathBuf::from(value));
            }
            arg => return Err(arg.unexpected().into()),
        }
    }

    let path = path.context("missing file to inspect (see --help)")?;
    let signatures =
        signatures.context("missing --signatures <FILE> (see --help)")?;
    Ok(Args { path, signatures, columns, rows, select, json, debug })
}

/// Parses a `A:B` span with `A <= B`.
fn parse_span(s: &str) -> anyhow::Result<(usize, usize)> {
    let (start, end) = s
        .split_once(':')
        .with_context(|| format!("expected a span of the form A:B, got {:?}", s))?;
    let start = parse_offset(start)?;
    let end = parse_offset(end)?;
    if start > end {
        bail!("span start {} is greater than its end {}", start, end);
    }
    Ok((start, end))
}

fn parse_offset(s: &str) -> anyhow::Result<usize> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x") {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.with_context(|| format!("invalid offset {:?}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_parse_decimal_and_hex() {
        assert_eq!(parse_span("2:5").unwrap(), (2, 5));
        assert_eq!(parse_span("0x10:0x20").unwrap(), (16, 32));
        assert_eq!(parse_span("7:7").unwrap(), (7, 7));
    }

    #[test]
    fn bad_spans_are_rejected() {
        assert!(parse_span("5").is_err());
        assert!(parse_span("9:2").is_err());
        assert!(parse_span("a:b").is_err());
    }
}
