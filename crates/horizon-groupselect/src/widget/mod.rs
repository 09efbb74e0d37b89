//! Widget layer of GroupSelect.
//!
//! - [`MultiSelect`]: the dropdown widget, driven by [`SelectEvent`]s
//! - [`SelectView`]: snapshot of what is drawn
//! - [`SelectRenderer`]: the drawing backend supplied by the host
//! - [`TextRenderer`]: a plain-text backend
//! - [`WidgetRegistry`]: one widget per host element

mod multi_select;
mod registry;
mod renderer;
mod view;

pub use multi_select::{MultiSelect, SelectEvent};
pub use registry::{ElementId, WidgetRegistry};
pub use renderer::{SelectRenderer, TextRenderer, TreeStyle};
pub use view::{CheckBoxView, InputNames, SelectView, TreeRow, ValueRow};
