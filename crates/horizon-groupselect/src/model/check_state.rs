//! Check state of a checkbox in the dropdown tree.

/// The check state of a checkbox.
///
/// - `Unchecked`: none of the covered values is selected
/// - `Checked`: every covered value is selected
/// - `PartiallyChecked`: some, but not all, covered values are selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    PartiallyChecked,
}

impl CheckState {
    /// Derive the state from how many of `total` items are selected.
    pub fn from_counts(selected: usize, total: usize) -> Self {
        if selected >= total {
            CheckState::Checked
        } else if selected == 0 {
            CheckState::Unchecked
        } else {
            CheckState::PartiallyChecked
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }

    pub fn is_unchecked(&self) -> bool {
        matches!(self, CheckState::Unchecked)
    }

    pub fn is_partially_checked(&self) -> bool {
        matches!(self, CheckState::PartiallyChecked)
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}
