//! Logging macros.
//!
//! Each channel macro takes `format!`-style arguments and logs through the
//! process-wide logger, or through an explicit handle when prefixed with
//! `logger = <expr>;`:
//!
//! ```no_run
//! let db = clog::Logger::default();
//! clog::success!("Server started on port {}", 8080);
//! clog::error!(logger = db; "Database operation failed: {}", "connection timeout");
//! clog::metric!("request_latency_ms", 156.3, "endpoint=/api/users");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __clog_channel {
    ($method:ident, logger = $logger:expr; $($arg:tt)+) => {
        $logger.$method(::core::format_args!($($arg)+))
    };
    ($method:ident, $($arg:tt)+) => {
        $crate::logger().$method(::core::format_args!($($arg)+))
    };
}

/// Log on the INFO channel.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__clog_channel!(info, $($arg)+) };
}

/// Log on the SUCCESS channel (filtered as info).
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => { $crate::__clog_channel!(success, $($arg)+) };
}

/// Log on the INIT channel (filtered as info).
#[macro_export]
macro_rules! init {
    ($($arg:tt)+) => { $crate::__clog_channel!(init, $($arg)+) };
}

/// Log on the CONFIG channel (filtered as info).
#[macro_export]
macro_rules! config {
    ($($arg:tt)+) => { $crate::__clog_channel!(config, $($arg)+) };
}

/// Log on the WARNING channel.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => { $crate::__clog_channel!(warning, $($arg)+) };
}

/// Log on the ERROR channel.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__clog_channel!(error, $($arg)+) };
}

/// Log on the DEBUG channel.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__clog_channel!(debug, $($arg)+) };
}

/// Log on the TRACE channel.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::__clog_channel!(trace, $($arg)+) };
}

/// Log on the PANIC channel regardless of threshold, then panic.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::__clog_channel!(fatal, $($arg)+) };
}

/// Log `<name>: <value> [tags]` on the METRIC channel.
///
/// Tags are anything that derefs to `str`, rendered in call order.
#[macro_export]
macro_rules! metric {
    (logger = $logger:expr; $name:expr, $value:expr $(, $tag:expr)* $(,)?) => {
        $logger.metric(
            ::core::convert::AsRef::<str>::as_ref(&$name),
            $value,
            &[$(::core::convert::AsRef::<str>::as_ref(&$tag)),*],
        )
    };
    ($name:expr, $value:expr $(, $tag:expr)* $(,)?) => {
        $crate::logger().metric(
            ::core::convert::AsRef::<str>::as_ref(&$name),
            $value,
            &[$(::core::convert::AsRef::<str>::as_ref(&$tag)),*],
        )
    };
}
