//! Render snapshots of a multi-select.
//!
//! A [`SelectView`] is everything a renderer needs to draw the widget,
//! captured from the model at one point in time. Renderers never touch the
//! model directly.

use crate::model::{CheckState, Group, GroupList, ItemId};

/// A checkbox as the renderer should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckBoxView {
    /// Form input name, if the checkbox is submitted with a form.
    pub name: Option<String>,
    /// Submitted value: a value id, a group id, or `None` for "all".
    pub value: Option<ItemId>,
    pub state: CheckState,
}

impl CheckBoxView {
    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }
}

/// A labeled value checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRow {
    pub label: String,
    pub checkbox: CheckBoxView,
}

/// A top-level row of the dropdown tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    /// A declared group with its own checkbox and nested value rows.
    Group {
        id: ItemId,
        label: String,
        checkbox: CheckBoxView,
        values: Vec<ValueRow>,
    },
    /// A value without a group, drawn at the top level.
    Value(ValueRow),
}

impl TreeRow {
    pub fn label(&self) -> &str {
        match self {
            TreeRow::Group { label, .. } => label,
            TreeRow::Value(row) => &row.label,
        }
    }
}

/// Input names used when building a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputNames {
    pub value: String,
    pub group: Option<String>,
    pub all: Option<String>,
}

/// Snapshot of the whole widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    /// The truncated selection summary shown in the closed box.
    pub description: String,
    /// Whether the dropdown is expanded.
    pub open: bool,
    /// The "select all" checkbox.
    pub all: CheckBoxView,
    /// Groups and groupless values, in display order.
    pub rows: Vec<TreeRow>,
}

impl SelectView {
    /// Capture the current state of `model`.
    pub fn capture(model: &GroupList, names: &InputNames, open: bool) -> Self {
        let all = CheckBoxView {
            name: names.all.clone(),
            value: None,
            state: model.all_check_state(),
        };

        let mut rows = Vec::with_capacity(model.groups().len());
        for group in model.groups() {
            let values = group
                .values()
                .iter()
                .map(|value| ValueRow {
                    label: value.label.clone(),
                    checkbox: CheckBoxView {
                        name: Some(names.value.clone()),
                        value: Some(value.value.clone()),
                        state: model.is_selected(&value.value).into(),
                    },
                })
                .collect::<Vec<_>>();

            if group.is_groupless() {
                rows.extend(values.into_iter().map(TreeRow::Value));
            } else {
                rows.push(Self::group_row(model, group, names, values));
            }
        }

        Self {
            description: model.describe_selection(),
            open,
            all,
            rows,
        }
    }

    fn group_row(
        model: &GroupList,
        group: &Group,
        names: &InputNames,
        values: Vec<ValueRow>,
    ) -> TreeRow {
        TreeRow::Group {
            id: group.id().clone(),
            label: group.label().to_string(),
            checkbox: CheckBoxView {
                name: names.group.clone(),
                value: Some(group.id().clone()),
                state: model.check_state(group),
            },
            values,
        }
    }

    /// Every checked value checkbox, as `(input name, value id)` pairs.
    ///
    /// This is what a form submission of the widget would contain.
    pub fn checked_values(&self) -> Vec<(&str, &ItemId)> {
        let value_rows = self.rows.iter().flat_map(|row| match row {
            TreeRow::Group { values, .. } => values.iter().collect::<Vec<_>>(),
            TreeRow::Value(row) => vec![row],
        });

        value_rows
            .filter(|row| row.checkbox.is_checked())
            .filter_map(|row| Some((row.checkbox.name.as_deref()?, row.checkbox.value.as_ref()?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupListBuilder, Value};

    fn names() -> InputNames {
        InputNames {
            value: "produce".to_string(),
            group: Some("produce_group".to_string()),
            all: None,
        }
    }

    fn model() -> GroupList {
        GroupListBuilder::new()
            .group(1, "Fruit")
            .values([
                Value::new("a", "Apple").with_group(1),
                Value::new("b", "Banana").with_group(1),
                Value::new("z", "Zucchini"),
            ])
            .selection(["a", "z"].into_iter().collect())
            .build()
            .unwrap()
    }

    #[test]
    fn test_capture_rows() {
        let view = SelectView::capture(&model(), &names(), false);

        assert_eq!(view.description, "Apple, Zucchini");
        assert_eq!(view.all.state, CheckState::PartiallyChecked);
        assert_eq!(view.all.name, None);

        let labels: Vec<&str> = view.rows.iter().map(TreeRow::label).collect();
        assert_eq!(labels, vec!["Fruit", "Zucchini"]);

        match &view.rows[0] {
            TreeRow::Group { checkbox, values, .. } => {
                assert_eq!(checkbox.state, CheckState::PartiallyChecked);
                assert_eq!(checkbox.name.as_deref(), Some("produce_group"));
                assert!(values[0].checkbox.is_checked());
                assert!(!values[1].checkbox.is_checked());
            }
            other => panic!("expected group row, got {other:?}"),
        }
        assert!(matches!(&view.rows[1], TreeRow::Value(row) if row.checkbox.is_checked()));
    }

    #[test]
    fn test_checked_values() {
        let view = SelectView::capture(&model(), &names(), true);
        let checked: Vec<(&str, &str)> = view
            .checked_values()
            .into_iter()
            .map(|(name, id)| (name, id.as_str()))
            .collect();
        assert_eq!(checked, vec![("produce", "a"), ("produce", "z")]);
    }
}
