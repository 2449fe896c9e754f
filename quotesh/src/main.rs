// quotesh/src/main.rs
//! QuoteSH entry point.
//!
//! Parses the command line, initializes logging, and runs the quoting filter
//! over the requested inputs.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};

use quotesh::cli::Cli;
use quotesh::commands::quote::{run_quote, QuoteOptions};
use quotesh::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let opts = QuoteOptions {
        style: args.quoting_style.into(),
        null_delimited: args.null,
        files: args.files,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_quote(&opts, &mut out)
}
