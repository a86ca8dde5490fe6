//! Observability integrations.
//!
//! # Data Flow
//! ```text
//! tracing events
//!     → logging.rs (ClogLayer)
//!     → Logger (filter, annotate, write)
//!
//! Logger::metric
//!     → metrics.rs (gauge update, when forwarding is on)
//! ```
//!
//! # Design Decisions
//! - Both bridges reuse the logger's filter instead of keeping their own
//! - Metric forwarding is off by default

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, ClogLayer};
