//! Core systems for Horizon GroupSelect.
//!
//! This crate provides the reactive plumbing the GroupSelect widgets are
//! built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Values with change detection
//! - **Logging**: `tracing` targets, log macros and performance spans
//!
//! # Example
//!
//! ```
//! use horizon_groupselect_core::{Property, Signal};
//!
//! struct Summary {
//!     text: Property<String>,
//!     text_changed: Signal<String>,
//! }
//!
//! impl Summary {
//!     fn update(&self, text: &str) {
//!         if self.text.set(text.to_string()) {
//!             self.text_changed.emit(text.to_string());
//!         }
//!     }
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionId, Signal};
