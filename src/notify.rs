//! Notifications

use std::io::{self, Write};

/// Sink for the human-readable lines describing inventory outcomes and reports.
///
/// The content of each line (names, quantities, amounts, timestamps, totals)
/// is produced by the inventory and report types; sinks only carry them.
pub trait NotificationSink {
    /// Receives one line of output.
    fn notify(&mut self, line: &str);
}

/// Sink that writes each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&mut self, line: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        writeln!(handle, "{line}").ok();
    }
}

/// Sink that buffers lines in memory.
///
/// Used by tests and demos that assert on notification content.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines received so far, in arrival order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Discards all buffered lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl NotificationSink for MemorySink {
    fn notify(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_buffers_lines_in_order() {
        let mut sink = MemorySink::new();

        sink.notify("first");
        sink.notify("second");

        assert_eq!(sink.lines(), ["first", "second"]);
    }

    #[test]
    fn memory_sink_clear_discards_lines() {
        let mut sink = MemorySink::new();

        sink.notify("line");
        sink.clear();

        assert!(sink.lines().is_empty());
    }
}
