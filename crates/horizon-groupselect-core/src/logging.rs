//! Logging facilities for Horizon GroupSelect.
//!
//! GroupSelect uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_groupselect=debug")
//!     .init();
//! ```
//!
//! The [`targets`] constants name the subsystems so they can be filtered
//! individually.

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_groupselect_core::signal";
    /// Selection model target.
    pub const MODEL: &str = "horizon_groupselect::model";
    /// Group list ingestion target.
    pub const BUILDER: &str = "horizon_groupselect::model::builder";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_groupselect::config";
    /// Widget and renderer target.
    pub const WIDGET: &str = "horizon_groupselect::widget";
    /// Performance spans target.
    pub const PERF: &str = "horizon_groupselect::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for timing a render or a rebuild with a span-aware subscriber.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level log under the model target.
#[macro_export]
macro_rules! groupselect_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::MODEL, $($arg)*)
    };
}

/// Debug-level log under the model target.
#[macro_export]
macro_rules! groupselect_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::MODEL, $($arg)*)
    };
}

/// Warn-level log under the model target.
#[macro_export]
macro_rules! groupselect_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: $crate::logging::targets::MODEL, $($arg)*)
    };
}
