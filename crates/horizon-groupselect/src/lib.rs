//! Horizon GroupSelect - a grouped multi-select dropdown.
//!
//! GroupSelect renders a checkbox tree over a grouped set of values, keeps
//! track of which values are selected, and summarizes the selection in a
//! short line of text ("All", "None", "Fruit, Carrot", ...).
//!
//! # Modules
//!
//! - [`model`]: The selection state (`GroupList`) and its building blocks
//! - [`config`]: Serializable configuration with JSON and TOML loaders
//! - [`widget`]: The `MultiSelect` widget, render snapshots and renderers
//!
//! # Quick Start
//!
//! ```
//! use horizon_groupselect::prelude::*;
//!
//! let config = MultiSelectConfig::new()
//!     .with_group(1, "Fruit")
//!     .with_group(2, "Veg")
//!     .with_value("a", "Apple", Some(1.into()))
//!     .with_value("b", "Banana", Some(1.into()))
//!     .with_value("c", "Carrot", Some(2.into()))
//!     .with_selected(["a", "b"].into_iter().collect());
//!
//! let mut registry = WidgetRegistry::new();
//! let select = registry.attach(ElementId::new(1), &config)?;
//! assert_eq!(select.description().get(), "Fruit");
//!
//! select.handle_event(SelectEvent::GroupToggled("2".into()));
//! assert_eq!(select.description().get(), "All");
//! # Ok::<(), horizon_groupselect::Error>(())
//! ```

pub mod config;
pub mod model;
pub mod prelude;
pub mod widget;

mod error;

pub use error::{Error, Result};
