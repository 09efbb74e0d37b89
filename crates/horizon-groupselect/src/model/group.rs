//! Values and the groups that hold them.

use super::id::ItemId;

/// Identifier shared by every synthesized groupless entry.
pub const GROUPLESS_ID: &str = "groupless";

/// A selectable leaf item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    /// The identifier submitted when this value is selected.
    pub value: ItemId,
    /// The text shown next to the checkbox.
    pub label: String,
    /// The declared group this value belongs to, if any.
    pub group: Option<ItemId>,
}

impl Value {
    /// Create a value without a group.
    pub fn new(value: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            group: None,
        }
    }

    /// Assign this value to a declared group.
    pub fn with_group(mut self, group: impl Into<ItemId>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Whether a group was declared by the user or synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupKind {
    /// A group from the configuration, selectable as a whole.
    #[default]
    Declared,
    /// A synthesized entry for a value without a group.
    ///
    /// Never reported as a selected group.
    Groupless,
}

/// A labeled, ordered collection of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: ItemId,
    label: String,
    kind: GroupKind,
    values: Vec<Value>,
}

impl Group {
    /// Create an empty declared group.
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: GroupKind::Declared,
            values: Vec::new(),
        }
    }

    /// Wrap a value that has no group in a synthesized entry.
    ///
    /// The entry takes the value's label so it sorts among the declared
    /// groups by that label.
    pub fn groupless(value: Value) -> Self {
        Self {
            id: ItemId::from(GROUPLESS_ID),
            label: value.label.clone(),
            kind: GroupKind::Groupless,
            values: vec![value],
        }
    }

    /// Builder-style replacement of the group's values.
    pub fn with_values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.values = values.into_iter().collect();
        self
    }

    /// Append a value to the group.
    pub fn push_value(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns `true` for synthesized groupless entries.
    pub fn is_groupless(&self) -> bool {
        self.kind == GroupKind::Groupless
    }

    /// Iterate over the identifiers of this group's values.
    pub fn value_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.values.iter().map(|value| &value.value)
    }
}
