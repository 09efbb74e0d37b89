//! Initial selection requests.

use serde::Deserialize;

use super::id::ItemId;

/// Keyword that selects every value.
pub const ALL_KEYWORD: &str = "all";

/// Which values start out selected.
///
/// Deserializes from the string `"all"` or from a list of ids (strings or
/// numbers). An omitted selection means [`Selection::All`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "SelectionRepr")]
pub enum Selection {
    /// Every value is selected.
    #[default]
    All,
    /// Exactly these values are selected.
    Values(Vec<ItemId>),
}

impl Selection {
    /// An empty selection.
    pub fn none() -> Self {
        Selection::Values(Vec::new())
    }

    /// Returns `true` for [`Selection::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<I: Into<ItemId>> FromIterator<I> for Selection {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Selection::Values(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectionRepr {
    Keyword(String),
    Values(Vec<ItemId>),
}

impl TryFrom<SelectionRepr> for Selection {
    type Error = String;

    fn try_from(repr: SelectionRepr) -> Result<Self, Self::Error> {
        match repr {
            SelectionRepr::Keyword(keyword) if keyword == ALL_KEYWORD => Ok(Selection::All),
            SelectionRepr::Keyword(keyword) => Err(format!(
                "unknown selection keyword '{keyword}', expected \"{ALL_KEYWORD}\" or a list of ids"
            )),
            SelectionRepr::Values(ids) => Ok(Selection::Values(ids)),
        }
    }
}
