//! Building a [`GroupList`] from flat values and groups.
//!
//! Configuration lists values and groups side by side; each value names
//! its group by id. [`GroupListBuilder`] attaches every value to its group,
//! wraps values without a group in synthesized groupless entries and sorts
//! the result by label.
//!
//! # Example
//!
//! ```
//! use horizon_groupselect::model::{GroupListBuilder, Value};
//!
//! let list = GroupListBuilder::new()
//!     .group(1, "Fruit")
//!     .value(Value::new("a", "Apple").with_group(1))
//!     .value(Value::new("z", "Zucchini"))
//!     .build()?;
//!
//! let labels: Vec<&str> = list.groups().iter().map(|g| g.label()).collect();
//! assert_eq!(labels, vec!["Fruit", "Zucchini"]);
//! # Ok::<(), horizon_groupselect::Error>(())
//! ```

use horizon_groupselect_core::logging::targets;

use super::group::{Group, Value};
use super::group_list::GroupList;
use super::id::ItemId;
use super::selection::Selection;
use crate::error::{Error, Result};

/// Group reference that means "no group".
pub const NO_GROUP_ID: &str = "0";

/// Collects groups, values and the initial selection, then builds a
/// [`GroupList`].
#[derive(Debug, Clone, Default)]
pub struct GroupListBuilder {
    groups: Vec<(ItemId, String)>,
    values: Vec<Value>,
    selection: Selection,
}

impl GroupListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a group.
    pub fn group(mut self, id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        self.groups.push((id.into(), label.into()));
        self
    }

    /// Declare several groups.
    pub fn groups<I, L>(mut self, groups: impl IntoIterator<Item = (I, L)>) -> Self
    where
        I: Into<ItemId>,
        L: Into<String>,
    {
        self.groups
            .extend(groups.into_iter().map(|(id, label)| (id.into(), label.into())));
        self
    }

    /// Add a value.
    pub fn value(mut self, value: Value) -> Self {
        self.values.push(value);
        self
    }

    /// Add several values.
    pub fn values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.values.extend(values);
        self
    }

    /// Set the initial selection. Defaults to [`Selection::All`].
    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Attach values to their groups and sort the groups by label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatchingGroup`] if a value names a group that was
    /// never declared.
    pub fn build_groups(self) -> Result<Vec<Group>> {
        let mut groups: Vec<Group> = self
            .groups
            .into_iter()
            .map(|(id, label)| Group::new(id, label))
            .collect();

        for mut value in self.values {
            value.group = value.group.filter(|group| !is_no_group(group));

            let Some(group_id) = value.group.clone() else {
                groups.push(Group::groupless(value));
                continue;
            };

            match groups
                .iter_mut()
                .find(|group| !group.is_groupless() && *group.id() == group_id)
            {
                Some(group) => group.push_value(value),
                None => {
                    tracing::error!(
                        target: targets::BUILDER,
                        value_id = %value.value,
                        group_id = %group_id,
                        "value references an undeclared group"
                    );
                    return Err(Error::no_matching_group(value.value, group_id));
                }
            }
        }

        groups.sort_by(|a, b| a.label().cmp(b.label()));
        Ok(groups)
    }

    /// Build the [`GroupList`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatchingGroup`] if a value names a group that was
    /// never declared. No partial list is produced.
    pub fn build(mut self) -> Result<GroupList> {
        let selection = std::mem::take(&mut self.selection);
        let groups = self.build_groups()?;
        Ok(GroupList::new(groups, selection))
    }
}

/// Returns `true` if a group reference means the value has no group.
fn is_no_group(group: &ItemId) -> bool {
    group.is_empty() || group.as_str() == NO_GROUP_ID
}
