//! Multi-select configuration.
//!
//! A [`MultiSelectConfig`] is what a host hands over when it attaches a
//! multi-select to an element: the flat value and group lists, the initial
//! selection, and the form input names of the checkboxes. It can be built in
//! code or loaded from JSON or TOML.
//!
//! # JSON
//!
//! ```
//! use horizon_groupselect::config::MultiSelectConfig;
//!
//! let config = MultiSelectConfig::from_json(r#"{
//!     "groups": [{ "id": 1, "label": "Fruit" }],
//!     "values": [
//!         { "value": "a", "label": "Apple", "group": 1 },
//!         { "value": "z", "label": "Zucchini" }
//!     ],
//!     "selected": ["a"]
//! }"#)?;
//!
//! let list = config.build()?;
//! assert_eq!(list.describe_selection(), "Fruit");
//! # Ok::<(), horizon_groupselect::Error>(())
//! ```
//!
//! # TOML
//!
//! ```
//! use horizon_groupselect::config::MultiSelectConfig;
//!
//! let config = MultiSelectConfig::from_toml(r#"
//! name = "produce"
//! selected = "all"
//!
//! [[groups]]
//! id = 2
//! label = "Veg"
//!
//! [[values]]
//! value = "c"
//! label = "Carrot"
//! group = 2
//! "#)?;
//!
//! assert_eq!(config.name, "produce");
//! assert!(config.build()?.is_all_selected());
//! # Ok::<(), horizon_groupselect::Error>(())
//! ```

use serde::Deserialize;

use horizon_groupselect_core::logging::targets;

use crate::error::Result;
use crate::model::{GroupList, GroupListBuilder, ItemId, Selection, Value};

/// Default form input name of the value checkboxes.
pub const DEFAULT_INPUT_NAME: &str = "multiselectValue";

fn default_input_name() -> String {
    DEFAULT_INPUT_NAME.to_string()
}

/// A declared group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupConfig {
    pub id: ItemId,
    pub label: String,
}

/// A selectable value. `group` may be omitted, `null`, empty or `0` for
/// values without a group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValueConfig {
    pub value: ItemId,
    pub label: String,
    #[serde(default)]
    pub group: Option<ItemId>,
}

impl From<&ValueConfig> for Value {
    fn from(config: &ValueConfig) -> Self {
        Value {
            value: config.value.clone(),
            label: config.label.clone(),
            group: config.group.clone(),
        }
    }
}

/// Everything needed to build a multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MultiSelectConfig {
    /// The selectable values.
    #[serde(default)]
    pub values: Vec<ValueConfig>,

    /// The declared groups.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,

    /// The initial selection; omitted means everything.
    #[serde(default)]
    pub selected: Selection,

    /// Input name of the value checkboxes.
    #[serde(default = "default_input_name")]
    pub name: String,

    /// Input name of the group checkboxes, if they should be submitted.
    #[serde(default, alias = "groupName")]
    pub group_name: Option<String>,

    /// Input name of the "all" checkbox, if it should be submitted.
    #[serde(default, alias = "allName")]
    pub all_name: Option<String>,
}

impl Default for MultiSelectConfig {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            groups: Vec::new(),
            selected: Selection::All,
            name: default_input_name(),
            group_name: None,
            all_name: None,
        }
    }
}

impl MultiSelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(target: targets::CONFIG, values = config.values.len(), "loaded JSON configuration");
        Ok(config)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml)?;
        tracing::debug!(target: targets::CONFIG, values = config.values.len(), "loaded TOML configuration");
        Ok(config)
    }

    /// Add a group.
    pub fn with_group(mut self, id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        self.groups.push(GroupConfig {
            id: id.into(),
            label: label.into(),
        });
        self
    }

    /// Add a value, optionally assigned to a group.
    pub fn with_value(
        mut self,
        value: impl Into<ItemId>,
        label: impl Into<String>,
        group: Option<ItemId>,
    ) -> Self {
        self.values.push(ValueConfig {
            value: value.into(),
            label: label.into(),
            group,
        });
        self
    }

    /// Set the initial selection.
    pub fn with_selected(mut self, selected: Selection) -> Self {
        self.selected = selected;
        self
    }

    /// Set the input name of the value checkboxes.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the input name of the group checkboxes.
    pub fn with_group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = Some(name.into());
        self
    }

    /// Set the input name of the "all" checkbox.
    pub fn with_all_name(mut self, name: impl Into<String>) -> Self {
        self.all_name = Some(name.into());
        self
    }

    /// A builder primed with this configuration.
    pub fn builder(&self) -> GroupListBuilder {
        GroupListBuilder::new()
            .groups(
                self.groups
                    .iter()
                    .map(|group| (group.id.clone(), group.label.clone())),
            )
            .values(self.values.iter().map(Value::from))
            .selection(self.selected.clone())
    }

    /// Build the selection model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatchingGroup`](crate::Error::NoMatchingGroup) if
    /// a value references an undeclared group.
    pub fn build(&self) -> Result<GroupList> {
        self.builder().build()
    }
}
