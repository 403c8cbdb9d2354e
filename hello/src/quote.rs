use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

/// Something that can hand out a quotation.
///
/// A blanket implementation exists for any `Fn() -> Result<String>`, so a
/// closure can stand in for a real provider.
pub trait QuoteSource {
    /// Produce the quotation text.
    fn quote(&self) -> Result<String>;
}

impl<F: Fn() -> Result<String>> QuoteSource for F {
    fn quote(&self) -> Result<String> {
        self()
    }
}

/// Go proverb about concurrency.
pub struct GoProverb;

impl QuoteSource for GoProverb {
    fn quote(&self) -> Result<String> {
        Ok("Don't communicate by sharing memory, share memory by communicating.".to_string())
    }
}

/// Write the quotation from `source` to `stdout` as a single line.
///
/// Nothing is written when the provider fails.
pub fn print_quote(source: &dyn QuoteSource, stdout: &mut dyn Write) -> Result<()> {
    let text = source.quote().context("quote provider failed")?;
    debug!(len = text.len(), "got quotation");
    writeln!(stdout, "{text}")?;
    Ok(())
}
