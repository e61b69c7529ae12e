use std::sync::Mutex;

use tracing::debug;

use crate::insurance::Quote;

/// Destination for computed quotes.
///
/// Implemented by the terminal adapter in the CLI and by [`MemoryReporter`] in tests.
pub trait QuoteReporter {
    fn report(&self, quote: &Quote) -> anyhow::Result<()>;
}

/// Keeps every reported line in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl QuoteReporter for MemoryReporter {
    fn report(&self, quote: &Quote) -> anyhow::Result<()> {
        let line = quote.to_string();
        debug!(%line, "captured quote");
        self.lines
            .lock()
            .map_err(|_| anyhow::anyhow!("memory reporter lock poisoned"))?
            .push(line);
        Ok(())
    }
}
