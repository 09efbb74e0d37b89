//! Selection state of a grouped multi-select.
//!
//! [`GroupList`] owns the groups, their values and the set of selected value
//! ids. Which groups are fully selected, whether all or nothing is selected
//! and the summary text are all derived from that set on every query.
//!
//! # Example
//!
//! ```
//! use horizon_groupselect::model::{Group, GroupList, Value};
//!
//! let groups = vec![
//!     Group::new("1", "Fruit").with_values([
//!         Value::new("a", "Apple").with_group("1"),
//!         Value::new("b", "Banana").with_group("1"),
//!     ]),
//!     Group::new("2", "Veg").with_values([Value::new("c", "Carrot").with_group("2")]),
//! ];
//!
//! let mut list = GroupList::new(groups, ["a", "b"].into_iter().collect());
//! assert_eq!(list.describe_selection(), "Fruit");
//!
//! list.toggle_value("c").toggle_value("a");
//! assert_eq!(list.describe_selection(), "Veg, Banana");
//!
//! list.toggle_all();
//! assert_eq!(list.describe_selection(), "All");
//! ```

use std::collections::BTreeSet;

use horizon_groupselect_core::{Signal, groupselect_debug, groupselect_trace, groupselect_warn};

use super::check_state::CheckState;
use super::group::Group;
use super::id::ItemId;
use super::selection::Selection;

/// Summary when every value is selected.
pub const ALL_DESCRIPTION: &str = "All";
/// Summary when no value is selected.
pub const NONE_DESCRIPTION: &str = "None";
/// Separator between labels in the summary.
pub const DESCRIPTION_SEPARATOR: &str = ", ";
/// Summaries longer than this many characters are truncated.
pub const DESCRIPTION_MAX_CHARS: usize = 25;
/// Characters kept from a truncated summary, before the ellipsis.
pub const DESCRIPTION_TRUNCATED_CHARS: usize = 24;
/// Appended to a truncated summary.
pub const DESCRIPTION_ELLIPSIS: &str = "...";

/// Grouped values plus the set of selected value ids.
///
/// # Signals
///
/// - `selection_changed`: Emitted after a mutation that changed the
///   selection, with `(added, removed)` value ids in sorted order.
#[derive(Debug)]
pub struct GroupList {
    groups: Vec<Group>,
    selected: BTreeSet<ItemId>,

    /// Emitted when the selection changes. Args: (added, removed)
    pub selection_changed: Signal<(Vec<ItemId>, Vec<ItemId>)>,
}

impl GroupList {
    /// Create a list over `groups` with the given initial selection.
    ///
    /// Groups keep the order they are given in; [`GroupListBuilder`]
    /// produces them sorted by label. Ids in an explicit selection that
    /// match no value are dropped.
    ///
    /// [`GroupListBuilder`]: super::GroupListBuilder
    pub fn new(groups: Vec<Group>, selection: Selection) -> Self {
        let mut list = Self {
            groups,
            selected: BTreeSet::new(),
            selection_changed: Signal::new(),
        };
        list.selected = list.resolve(selection);
        groupselect_debug!(
            groups = list.groups.len(),
            values = list.value_count(),
            selected = list.selected.len(),
            "group list created"
        );
        list
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All groups, in display order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Find the declared group with the given id.
    pub fn group(&self, group_id: &str) -> Option<&Group> {
        self.groups
            .iter()
            .find(|group| !group.is_groupless() && group.id() == group_id)
    }

    /// The selected value ids, in sorted order.
    pub fn selected_values(&self) -> &BTreeSet<ItemId> {
        &self.selected
    }

    /// Returns `true` if the value with this id is selected.
    pub fn is_selected(&self, value_id: &str) -> bool {
        self.selected.contains(value_id)
    }

    /// Every value id across all groups, in sorted order.
    pub fn all_value_ids(&self) -> BTreeSet<ItemId> {
        self.groups
            .iter()
            .flat_map(Group::value_ids)
            .cloned()
            .collect()
    }

    /// Number of distinct values across all groups.
    pub fn value_count(&self) -> usize {
        self.all_value_ids().len()
    }

    /// Returns `true` if a value with this id exists in any group.
    pub fn contains_value(&self, value_id: &str) -> bool {
        self.groups
            .iter()
            .any(|group| group.value_ids().any(|id| id == value_id))
    }

    /// Returns `true` if every value is selected.
    pub fn is_all_selected(&self) -> bool {
        self.selected.len() == self.value_count()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_none_selected(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns `true` if `group` is a declared group whose every value is
    /// selected.
    pub fn is_group_selected(&self, group: &Group) -> bool {
        !group.is_groupless() && group.value_ids().all(|id| self.selected.contains(id))
    }

    /// Ids of the declared groups whose every value is selected.
    pub fn selected_group_ids(&self) -> BTreeSet<ItemId> {
        self.selected_groups().map(|group| group.id().clone()).collect()
    }

    /// Labels of the fully selected declared groups, in group order.
    pub fn selected_group_labels(&self) -> Vec<&str> {
        self.selected_groups().map(Group::label).collect()
    }

    fn selected_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups
            .iter()
            .filter(move |group| self.is_group_selected(group))
    }

    /// Tri-state check state of a group's checkbox.
    pub fn check_state(&self, group: &Group) -> CheckState {
        let selected = group
            .value_ids()
            .filter(|id| self.selected.contains(*id))
            .count();
        CheckState::from_counts(selected, group.values().len())
    }

    /// Check state of the declared group with the given id.
    pub fn group_check_state(&self, group_id: &str) -> Option<CheckState> {
        self.group(group_id).map(|group| self.check_state(group))
    }

    /// Check state of the "select all" checkbox.
    pub fn all_check_state(&self) -> CheckState {
        if self.is_all_selected() {
            CheckState::Checked
        } else if self.is_none_selected() {
            CheckState::Unchecked
        } else {
            CheckState::PartiallyChecked
        }
    }

    /// The untruncated selection summary.
    ///
    /// `"All"`, `"None"`, or the labels of fully selected groups followed by
    /// the labels of selected values those groups do not cover.
    pub fn full_description(&self) -> String {
        if self.is_all_selected() {
            return ALL_DESCRIPTION.to_string();
        }
        if self.is_none_selected() {
            return NONE_DESCRIPTION.to_string();
        }

        let group_labels = self.selected_group_labels().join(DESCRIPTION_SEPARATOR);
        let value_labels = self
            .groups
            .iter()
            .filter(|group| !self.is_group_selected(group))
            .flat_map(Group::values)
            .filter(|value| self.selected.contains(&value.value))
            .map(|value| value.label.as_str())
            .collect::<Vec<_>>()
            .join(DESCRIPTION_SEPARATOR);

        [group_labels, value_labels]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(DESCRIPTION_SEPARATOR)
    }

    /// The selection summary, truncated for display.
    ///
    /// Summaries over 25 characters keep their first 24 characters followed
    /// by `"..."`.
    pub fn describe_selection(&self) -> String {
        truncate_description(self.full_description())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Select everything, or clear the selection if everything was selected.
    pub fn toggle_all(&mut self) -> &mut Self {
        let target = if self.is_all_selected() {
            BTreeSet::new()
        } else {
            self.all_value_ids()
        };
        groupselect_trace!(select = !target.is_empty(), "toggle all");
        self.replace_selection(target);
        self
    }

    /// Deselect a fully selected group, or select all of its values.
    ///
    /// Unknown ids and the groupless sentinel are ignored.
    pub fn toggle_group(&mut self, group_id: &str) -> &mut Self {
        let Some(group) = self.group(group_id) else {
            groupselect_debug!(group_id, "toggle of unknown group ignored");
            return self;
        };

        let ids: Vec<ItemId> = group.value_ids().cloned().collect();
        let mut target = self.selected.clone();
        if self.is_group_selected(group) {
            for id in &ids {
                target.remove(id);
            }
        } else {
            target.extend(ids);
        }

        groupselect_trace!(group_id, "toggle group");
        self.replace_selection(target);
        self
    }

    /// Deselect the value if it is selected, select it otherwise.
    ///
    /// Ids that match no value are ignored.
    pub fn toggle_value(&mut self, value_id: &str) -> &mut Self {
        if !self.contains_value(value_id) {
            groupselect_debug!(value_id, "toggle of unknown value ignored");
            return self;
        }

        let mut target = self.selected.clone();
        if !target.remove(value_id) {
            target.insert(ItemId::from(value_id));
        }

        groupselect_trace!(value_id, "toggle value");
        self.replace_selection(target);
        self
    }

    /// Replace the selection outright.
    pub fn set_selection(&mut self, selection: Selection) -> &mut Self {
        let target = self.resolve(selection);
        self.replace_selection(target);
        self
    }

    fn resolve(&self, selection: Selection) -> BTreeSet<ItemId> {
        match selection {
            Selection::All => self.all_value_ids(),
            Selection::Values(ids) => {
                let known = self.all_value_ids();
                ids.into_iter()
                    .filter(|id| {
                        let exists = known.contains(id);
                        if !exists {
                            groupselect_warn!(value_id = %id, "selected id matches no value, dropping");
                        }
                        exists
                    })
                    .collect()
            }
        }
    }

    fn replace_selection(&mut self, target: BTreeSet<ItemId>) {
        let added: Vec<ItemId> = target.difference(&self.selected).cloned().collect();
        let removed: Vec<ItemId> = self.selected.difference(&target).cloned().collect();
        self.selected = target;

        if !added.is_empty() || !removed.is_empty() {
            self.selection_changed.emit((added, removed));
        }
    }
}

/// Cut a summary down to display length, counting characters.
pub fn truncate_description(description: String) -> String {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        let mut truncated: String = description
            .chars()
            .take(DESCRIPTION_TRUNCATED_CHARS)
            .collect();
        truncated.push_str(DESCRIPTION_ELLIPSIS);
        truncated
    } else {
        description
    }
}
