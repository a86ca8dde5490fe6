//! Shared helpers for integration tests.

use clog::logger::NoContext;
use clog::{ContextId, Logger, LoggerConfig, MemorySink};

/// Logger writing into memory with a fixed `(thread 1)` context.
pub fn capturing_logger(config: LoggerConfig) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .config(config)
        .sink(sink.clone())
        .context_provider(|| Some(ContextId::new("thread", "1")))
        .build();
    (logger, sink)
}

/// Logger writing into memory without any context annotation source.
#[allow(dead_code)]
pub fn contextless_logger(config: LoggerConfig) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .config(config)
        .sink(sink.clone())
        .context_provider(NoContext)
        .build();
    (logger, sink)
}

/// Split a rendered line into `(timestamp, rest after the timestamp)`.
#[allow(dead_code)]
pub fn split_timestamp(line: &str) -> (&str, &str) {
    let start = line.find(" [").expect("timestamp bracket") + 2;
    let end = start + line[start..].find(']').expect("closing bracket");
    (&line[start..end], &line[end + 1..])
}
