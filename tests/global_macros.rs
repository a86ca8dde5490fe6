//! The process-wide logger and the logging macros.

use std::panic;

use clog::{Channel, ClogError, LoggerConfig, Severity};

mod common;

// A single test: the global logger is shared by every test in this binary.
#[test]
fn test_global_logger_and_macros() {
    let (logger, sink) = common::capturing_logger(LoggerConfig::default());
    clog::set_logger(logger).unwrap();
    assert!(matches!(
        clog::set_logger(clog::Logger::default()),
        Err(ClogError::AlreadyInitialized)
    ));

    clog::set_minimum_severity(Severity::Debug);
    clog::init!("Starting application...");
    clog::config!("Loading configuration from {}", "config.yaml");
    clog::info!("Application initialized successfully");
    clog::success!("Server started on port {}", 8080);
    clog::debug!("Connected to database with timeout: {:?}", std::time::Duration::from_secs(30));
    clog::trace!("Establishing connection pool with size: {}", 10);
    clog::warning!("High memory usage detected: {}%", 85);
    clog::error!("Database operation failed: {}", "connection timeout");
    clog::metric!("request_latency_ms", 156.3, "endpoint=/api/users");
    clog::metric!("user_registrations", 1, String::from("source=web"));

    let lines = sink.take();
    let labels = [
        Channel::Init,
        Channel::Config,
        Channel::Info,
        Channel::Success,
        Channel::Debug,
        Channel::Warning,
        Channel::Error,
        Channel::Metric,
        Channel::Metric,
    ];
    // trace is above the debug threshold
    assert_eq!(lines.len(), labels.len());
    for (line, channel) in lines.iter().zip(labels) {
        assert!(line.starts_with(channel.prefix()), "{line}");
        assert!(line.contains("[global_macros.rs:"), "{line}");
        assert!(line.contains("(thread 1)"), "{line}");
    }
    assert!(lines[1].ends_with(" Loading configuration from config.yaml"));
    assert!(lines[4].ends_with(" Connected to database with timeout: 30s"));
    assert!(lines[5].ends_with(" High memory usage detected: 85%"));
    assert!(lines[7].ends_with(" request_latency_ms: 156.3 [endpoint=/api/users]"));
    assert!(lines[8].ends_with(" user_registrations: 1 [source=web]"));

    clog::set_show_source_location(false);
    clog::set_show_context_id(false);
    let line = line!() + 1;
    clog::info!("bare");
    let bare = sink.take();
    assert!(!bare[0].contains(&format!(":{line}]")));
    assert!(!bare[0].contains("(thread"));

    clog::set_show_source_location(true);
    let line = line!() + 1;
    clog::warning!("located");
    assert!(sink.take()[0].contains(&format!("[global_macros.rs:{line}]")));

    let (explicit, explicit_sink) = common::capturing_logger(LoggerConfig::default());
    clog::error!(logger = explicit; "explicit {}", "handle");
    clog::metric!(logger = explicit; "queue_depth", 3, "queue=emails",);
    assert_eq!(explicit_sink.take().len(), 2);
    assert!(sink.lines().is_empty());

    let line = line!() + 1;
    clog::metric!("cache_hits", 7, "tier=l1");
    assert!(sink.take()[0].contains(&format!("[global_macros.rs:{line}]")));

    clog::set_minimum_severity(Severity::Fatal);
    let line = line!() + 1;
    let result = panic::catch_unwind(|| clog::fatal!("Critical system error: {}", "unexpected state"));
    assert!(result.is_err());
    let lines = sink.take();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("PANIC"));
    assert!(lines[0].contains(&format!("[global_macros.rs:{line}]")), "{}", lines[0]);
}
