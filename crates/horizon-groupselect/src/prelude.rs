//! Prelude module with commonly used types.

pub use crate::config::MultiSelectConfig;
pub use crate::model::{CheckState, Group, GroupList, GroupListBuilder, ItemId, Selection, Value};
pub use crate::widget::{
    ElementId, MultiSelect, SelectEvent, SelectRenderer, SelectView, TextRenderer, WidgetRegistry,
};
pub use crate::{Error, Result};
