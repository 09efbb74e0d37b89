//! One multi-select per host element.
//!
//! Hosts identify their elements (DOM nodes, widget handles, ...) with an
//! [`ElementId`]. A [`WidgetRegistry`] keeps at most one [`MultiSelect`] per
//! element: attaching twice returns the widget that is already there.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use horizon_groupselect_core::logging::targets;

use super::multi_select::{MultiSelect, SelectEvent};
use crate::config::MultiSelectConfig;
use crate::error::Result;

/// Identity of a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ElementId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Owns the multi-selects attached to host elements.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    widgets: HashMap<ElementId, MultiSelect>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a multi-select to `element`, or return the one already there.
    ///
    /// An existing widget is returned untouched; `config` is ignored.
    ///
    /// # Errors
    ///
    /// Fails if a new widget has to be built and `config` is invalid. The
    /// registry is left unchanged.
    pub fn attach(
        &mut self,
        element: ElementId,
        config: &MultiSelectConfig,
    ) -> Result<&mut MultiSelect> {
        match self.widgets.entry(element) {
            Entry::Occupied(entry) => {
                tracing::debug!(target: targets::WIDGET, ?element, "already attached");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let widget = MultiSelect::new(element, config)?;
                Ok(entry.insert(widget))
            }
        }
    }

    pub fn get(&self, element: ElementId) -> Option<&MultiSelect> {
        self.widgets.get(&element)
    }

    pub fn get_mut(&mut self, element: ElementId) -> Option<&mut MultiSelect> {
        self.widgets.get_mut(&element)
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.widgets.contains_key(&element)
    }

    /// Remove and return the widget attached to `element`.
    pub fn detach(&mut self, element: ElementId) -> Option<MultiSelect> {
        let widget = self.widgets.remove(&element);
        if widget.is_some() {
            tracing::debug!(target: targets::WIDGET, ?element, "detached");
        }
        widget
    }

    /// Route an event to the widget attached to `element`.
    ///
    /// Returns `None` if no widget is attached, otherwise whether the widget
    /// needs a repaint.
    pub fn dispatch(&mut self, element: ElementId, event: SelectEvent) -> Option<bool> {
        self.widgets
            .get_mut(&element)
            .map(|widget| widget.handle_event(event))
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Widgets with a pending repaint.
    pub fn dirty(&mut self) -> impl Iterator<Item = &mut MultiSelect> {
        self.widgets
            .values_mut()
            .filter(|widget| widget.needs_repaint())
    }
}
