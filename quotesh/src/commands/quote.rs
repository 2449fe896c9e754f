//! Quote command implementation: the file loop and the two delimiter paths.
//!
//! The core quoting functions never perform I/O; everything here is the thin
//! driver the core is designed for. Lines arrive with their delimiter already
//! stripped, get quoted, and leave with the delimiter re-appended.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use quotesh_core::{apply, QuotingStyle};

/// Options for a single quoting run.
pub struct QuoteOptions {
    /// The style every line is quoted with.
    pub style: QuotingStyle,
    /// Use NUL as the line delimiter instead of newline.
    pub null_delimited: bool,
    /// Inputs in command-line order; empty means standard input.
    pub files: Vec<PathBuf>,
}

/// The main operation runner for the quotesh CLI.
///
/// Processes every input in order and writes quoted lines to `out`. The first
/// I/O or decoding failure aborts the run; the caller maps the error to a
/// diagnostic and a nonzero exit status.
pub fn run_quote<W: Write>(opts: &QuoteOptions, out: &mut W) -> Result<()> {
    info!("Starting quotesh run with style '{}'.", opts.style);

    let mut inputs = opts.files.clone();
    if inputs.is_empty() {
        inputs.push(PathBuf::from("-"));
    }

    for path in &inputs {
        if path.as_os_str() == "-" {
            debug!("Reading standard input.");
            let stdin = io::stdin();
            quote_reader(opts, stdin.lock(), "standard input", out)?;
        } else {
            debug!("Reading file: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            quote_reader(opts, BufReader::new(file), &path.display().to_string(), out)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    info!("Quotesh run completed.");
    Ok(())
}

/// Quotes one input stream, choosing the delimiter code path.
fn quote_reader<R, W>(opts: &QuoteOptions, reader: R, source: &str, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    if opts.null_delimited {
        quote_delimited(opts.style, reader, source, out)
    } else {
        quote_native_lines(opts.style, reader, source, out)
    }
}

/// Default path: iterate native lines and re-append a newline after quoting.
fn quote_native_lines<R, W>(style: QuotingStyle, reader: R, source: &str, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read from {source}"))?;
        writeln!(out, "{}", apply(style, &line))
            .context("Failed to write to output")?;
    }
    Ok(())
}

/// NUL-delimiter path: read the whole input, split on NUL, and drop the one
/// trailing empty fragment a terminal delimiter produces.
fn quote_delimited<R, W>(style: QuotingStyle, mut reader: R, source: &str, out: &mut W) -> Result<()>
where
    R: Read,
    W: Write,
{
    let mut data = String::new();
    reader
        .read_to_string(&mut data)
        .with_context(|| format!("Failed to read from {source}"))?;

    let mut fragments: Vec<&str> = data.split('\0').collect();
    if fragments.last() == Some(&"") {
        fragments.pop();
    }

    for fragment in fragments {
        write!(out, "{}\0", apply(style, fragment)).context("Failed to write to output")?;
    }
    Ok(())
}

/// Convenience used by tests and library consumers: quotes a full in-memory
/// input and returns the produced output.
pub fn quote_to_string(opts: &QuoteOptions, input: &str) -> Result<String> {
    let mut out = Vec::new();
    quote_reader(opts, input.as_bytes(), "in-memory input", &mut out)?;
    String::from_utf8(out).context("Quoted output was not valid UTF-8")
}
