use std::io::{self, Write};

use anyhow::Context;
use carsure_common::insurance::{Quote, QuoteReporter};

/// Writes each quote as one plain line on stdout.
pub struct StdoutReporter;

impl QuoteReporter for StdoutReporter {
    fn report(&self, quote: &Quote) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        write_line(&mut out, quote).context("failed to write quote to stdout")
    }
}

fn write_line<W: Write>(out: &mut W, quote: &Quote) -> io::Result<()> {
    writeln!(out, "{quote}")?;
    out.flush()
}
