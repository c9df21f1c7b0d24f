/*!
The main entry point into sigscope.

The heavy lifting lives in the library crates: `sigscope-scanner` finds
signature occurrences in the visible window, `sigscope-ranges` classifies
bytes and selections against them, and `sigscope-printer` renders the
results. This binary wires them to the command line: it maps the file,
decodes the signature definition file, rebuilds the range set for the
requested window and prints the decorated dump and selection report.
*/

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use memmap::Mmap;
use termcolor::{ColorChoice, StandardStream};

use sigscope_printer::HexDump;
use sigscope_scanner::{Highlighter, RowWindow, Signature};

mod flags;
mod logger;

fn main() -> ExitCode {
    let args = match flags::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("sigscope: {:#}", err);
            return ExitCode::from(2);
        }
    };
    if let Err(err) = run(&args) {
        eprintln!("sigscope: {:#}", err);
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}

fn run(args: &flags::Args) -> anyhow::Result<()> {
    if args.debug {
        logger::Logger::init().context("failed to install logger")?;
        log::set_max_level(log::LevelFilter::Debug);
    }

    let file = File::open(&args.path)
        .with_context(|| format!("failed to open {}", args.path.display()))?;
    // SAFETY: the map is read-only and sigscope never writes to the file
    // while it is mapped.
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("failed to mmap {}", args.path.display()))?;
    let buffer: &[u8] = &mmap;

    let signatures = load_signatures(&args.signatures)?;
    let highlighter = Highlighter::new(args.columns);
    let window = match args.rows {
        Some((start, end)) => RowWindow::new(start, end),
        None => RowWindow::new(0, buffer.len().div_ceil(args.columns)),
    };
    let ranges = highlighter.rebuild(window, buffer, &signatures);

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    HexDump::new(args.columns).dump(&mut stdout, buffer, window, &ranges)?;

    if let Some((sel_start, sel_end)) = args.select {
        let containing = ranges.find_containing(sel_start, sel_end);
        if args.json {
            sigscope_printer::write_selection_json(
                std::io::stdout().lock(),
                &containing,
            )?;
        } else {
            sigscope_printer::write_selection_report(
                &mut stdout,
                sel_start,
                sel_end,
                &containing,
            )?;
        }
    }
    Ok(())
}

/// Decodes a JSON signature definition file.
///
/// The file is an array of objects, each with a string `label` and either
/// an integer `hash` (a u32 matched as its 4-byte little-endian encoding)
/// or a `hex` byte string.
fn load_signatures(path: &Path) -> anyhow::Result<Vec<Signature>> {
    let data = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_slice(&data)
        .with_context(|| format!("{}: invalid JSON", path.display()))?;
    let entries = json
        .as_array()
        .with_context(|| format!("{}: expected a JSON array", path.display()))?;

    let mut signatures = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let label = entry
            .get("label")
            .and_then(|v| v.as_str())
            .with_context(|| format!("signature #{}: missing \"label\"", i))?;
        let signature = if let Some(hash) = entry.get("hash") {
            let hash = hash
                .as_u64()
                .and_then(|h| u32::try_from(h).ok())
                .with_context(|| {
                    format!("signature #{} ({}): \"hash\" must be a u32", i, label)
                })?;
            Signature::from_u32_le(hash, label)
        } else if let Some(hex) = entry.get("hex").and_then(|v| v.as_str()) {
            Signature::from_hex(hex, label).with_context(|| {
                format!("signature #{} ({}): bad \"hex\"", i, label)
            })?
        } else {
            anyhow::bail!(
                "signature #{} ({}): needs a \"hash\" or \"hex\" field",
                i,
                label,
            );
        };
        signatures.push(signature);
    }
    log::debug!("loaded {} signature(s) from {}", signatures.len(), path.display());
    Ok(signatures)
}
