//! Output sinks.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination for rendered lines.
///
/// `line` carries no terminator; the sink appends the newline.
pub trait Sink: Send + Sync {
    /// Write one complete line.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes to the process's standard output.
///
/// Each line goes out in a single `write_all` under the stdout lock, so
/// concurrent emissions never interleave inside a line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut out = io::stdout().lock();
        out.write_all(buf.as_bytes())
    }
}

/// Collects lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return every collected line.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let clone = sink.clone();

        clone.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert_eq!(clone.take().len(), 2);
        assert!(sink.lines().is_empty());
    }
}
