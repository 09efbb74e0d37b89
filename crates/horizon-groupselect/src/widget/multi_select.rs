//! MultiSelect widget implementation.
//!
//! [`MultiSelect`] is a dropdown with a checkbox tree over grouped values.
//! The closed box shows a short summary of the selection; the open dropdown
//! shows an "All" checkbox, one checkbox per group and one per value.
//!
//! The host translates user input into [`SelectEvent`]s, passes them to
//! [`MultiSelect::handle_event`] and calls [`MultiSelect::paint`] whenever
//! [`MultiSelect::needs_repaint`] reports a pending change.
//!
//! # Example
//!
//! ```
//! use horizon_groupselect::config::MultiSelectConfig;
//! use horizon_groupselect::widget::{ElementId, MultiSelect, SelectEvent, TextRenderer};
//!
//! let config = MultiSelectConfig::new()
//!     .with_group(1, "Fruit")
//!     .with_value("a", "Apple", Some(1.into()))
//!     .with_value("b", "Banana", Some(1.into()));
//!
//! let mut select = MultiSelect::new(ElementId::new(1), &config)?;
//! select.description_changed.connect(|text| println!("now: {text}"));
//!
//! select.handle_event(SelectEvent::ValueToggled("a".into()));
//!
//! let mut renderer = TextRenderer::new();
//! select.paint(&mut renderer);
//! assert_eq!(renderer.description(), "Banana");
//! # Ok::<(), horizon_groupselect::Error>(())
//! ```

use horizon_groupselect_core::logging::targets;
use horizon_groupselect_core::{PerfSpan, Property, ReadOnlyProperty, Signal};

use super::registry::ElementId;
use super::renderer::SelectRenderer;
use super::view::{InputNames, SelectView};
use crate::config::{DEFAULT_INPUT_NAME, MultiSelectConfig};
use crate::error::Result;
use crate::model::{GroupList, ItemId};

/// A user interaction the widget reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// A value checkbox changed.
    ValueToggled(ItemId),
    /// A group checkbox changed.
    GroupToggled(ItemId),
    /// The "All" checkbox changed.
    AllToggled,
    /// The closed box was clicked.
    BoxClicked,
}

/// A grouped multi-select dropdown.
///
/// # Signals
///
/// - `description_changed(String)`: Emitted when the summary text changes
/// - `open_changed(bool)`: Emitted when the dropdown opens or closes
///
/// Selection changes are reported by the model's `selection_changed` signal.
pub struct MultiSelect {
    element: ElementId,
    model: GroupList,
    input_names: InputNames,

    description: Property<String>,
    open: Property<bool>,
    needs_repaint: bool,

    /// Emitted when the summary text changes.
    pub description_changed: Signal<String>,

    /// Emitted when the dropdown is opened or closed.
    pub open_changed: Signal<bool>,
}

impl MultiSelect {
    /// Build a multi-select for `element` from its configuration.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NoMatchingGroup`](crate::Error::NoMatchingGroup)
    /// if a value references an undeclared group. No widget is created.
    pub fn new(element: ElementId, config: &MultiSelectConfig) -> Result<Self> {
        let model = config.build()?;
        let input_names = InputNames {
            value: config.name.clone(),
            group: config.group_name.clone(),
            all: config.all_name.clone(),
        };
        Ok(Self::with_model(element, model, input_names))
    }

    /// Wrap an existing model.
    pub fn from_model(element: ElementId, model: GroupList) -> Self {
        let input_names = InputNames {
            value: DEFAULT_INPUT_NAME.to_string(),
            group: None,
            all: None,
        };
        Self::with_model(element, model, input_names)
    }

    fn with_model(element: ElementId, model: GroupList, input_names: InputNames) -> Self {
        let description = model.describe_selection();
        tracing::debug!(target: targets::WIDGET, ?element, %description, "multi-select created");
        Self {
            element,
            model,
            input_names,
            description: Property::new(description),
            open: Property::new(false),
            needs_repaint: true,
            description_changed: Signal::new(),
            open_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The host element this widget is attached to.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// The selection model.
    pub fn model(&self) -> &GroupList {
        &self.model
    }

    /// The current (truncated) selection summary.
    pub fn description(&self) -> ReadOnlyProperty<'_, String> {
        ReadOnlyProperty::new(&self.description)
    }

    pub fn input_names(&self) -> &InputNames {
        &self.input_names
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Open or close the dropdown.
    pub fn set_open(&mut self, open: bool) {
        if self.open.set(open) {
            self.needs_repaint = true;
            self.open_changed.emit(open);
        }
    }

    /// Returns `true` if something changed since the last paint.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Toggle one value.
    pub fn toggle_value(&mut self, value_id: &str) {
        self.model.toggle_value(value_id);
        self.selection_updated();
    }

    /// Toggle a whole group.
    pub fn toggle_group(&mut self, group_id: &str) {
        self.model.toggle_group(group_id);
        self.selection_updated();
    }

    /// Toggle between everything and nothing selected.
    pub fn toggle_all(&mut self) {
        self.model.toggle_all();
        self.selection_updated();
    }

    /// React to a user interaction.
    ///
    /// Returns `true` if the widget needs a repaint afterwards. Every toggle
    /// schedules one, even when it was ignored by the model.
    pub fn handle_event(&mut self, event: SelectEvent) -> bool {
        tracing::trace!(target: targets::WIDGET, element = ?self.element, ?event, "handling event");
        match event {
            SelectEvent::ValueToggled(id) => self.toggle_value(&id),
            SelectEvent::GroupToggled(id) => self.toggle_group(&id),
            SelectEvent::AllToggled => self.toggle_all(),
            SelectEvent::BoxClicked => {
                let open = !self.is_open();
                self.set_open(open);
            }
        }
        self.needs_repaint
    }

    fn selection_updated(&mut self) {
        let description = self.model.describe_selection();
        if self.description.set(description.clone()) {
            self.description_changed.emit(description);
        }
        self.needs_repaint = true;
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Snapshot of everything the renderer draws.
    pub fn view(&self) -> SelectView {
        SelectView::capture(&self.model, &self.input_names, self.is_open())
    }

    /// Redraw the widget through `renderer`.
    pub fn paint(&mut self, renderer: &mut dyn SelectRenderer) {
        let _span = PerfSpan::new("multi_select::paint");
        let view = self.view();
        renderer.render_description(&view.description);
        renderer.set_dropdown_visible(view.open);
        renderer.render_tree(&view);
        self.needs_repaint = false;
    }
}

impl std::fmt::Debug for MultiSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiSelect")
            .field("element", &self.element)
            .field("description", &self.description.get())
            .field("open", &self.open.get())
            .field("selected", &self.model.selected_values().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::TextRenderer;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn config() -> MultiSelectConfig {
        MultiSelectConfig::new()
            .with_group(1, "Fruit")
            .with_group(2, "Veg")
            .with_value("a", "Apple", Some(1.into()))
            .with_value("b", "Banana", Some(1.into()))
            .with_value("c", "Carrot", Some(2.into()))
            .with_value("p", "Potato", Some(2.into()))
    }

    #[test]
    fn test_starts_closed_with_all_selected() {
        let select = MultiSelect::new(ElementId::new(7), &config()).unwrap();
        assert_eq!(select.element(), ElementId::new(7));
        assert!(!select.is_open());
        assert!(select.needs_repaint());
        assert_eq!(select.description().get(), "All");
    }

    #[test]
    fn test_events_drive_model() {
        let mut select = MultiSelect::new(ElementId::new(1), &config()).unwrap();

        assert!(select.handle_event(SelectEvent::AllToggled));
        assert_eq!(select.description().get(), "None");

        select.handle_event(SelectEvent::GroupToggled("2".into()));
        assert_eq!(select.description().get(), "Veg");

        select.handle_event(SelectEvent::ValueToggled("b".into()));
        assert_eq!(select.description().get(), "Veg, Banana");

        select.handle_event(SelectEvent::ValueToggled("a".into()));
        assert_eq!(select.description().get(), "All");
    }

    #[test]
    fn test_box_click_toggles_open() {
        let mut select = MultiSelect::new(ElementId::new(1), &config()).unwrap();
        let states = Arc::new(Mutex::new(Vec::new()));
        let states_clone = states.clone();
        select.open_changed.connect(move |&open| states_clone.lock().push(open));

        select.handle_event(SelectEvent::BoxClicked);
        assert!(select.is_open());
        select.handle_event(SelectEvent::BoxClicked);
        assert!(!select.is_open());

        assert_eq!(*states.lock(), vec![true, false]);
    }

    #[test]
    fn test_disconnected_listener_stops_receiving() {
        let mut select = MultiSelect::new(ElementId::new(1), &config()).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let conn = select
            .description_changed
            .connect(move |text| seen_clone.lock().push(text.clone()));

        select.toggle_all();
        assert!(select.description_changed.disconnect(conn));
        select.toggle_all();

        assert_eq!(*seen.lock(), vec!["None".to_string()]);
        assert_eq!(select.description_changed.connection_count(), 0);
    }

    #[test]
    fn test_description_signal_only_on_change() {
        let mut select = MultiSelect::new(ElementId::new(1), &config()).unwrap();
        let texts = Arc::new(Mutex::new(Vec::new()));
        let texts_clone = texts.clone();
        select
            .description_changed
            .connect(move |text: &String| texts_clone.lock().push(text.clone()));

        select.toggle_group("99");
        select.toggle_value("c");
        select.toggle_value("c");

        assert_eq!(*texts.lock(), vec!["Fruit, Potato".to_string(), "All".to_string()]);
    }

    #[test]
    fn test_paint_clears_repaint_flag() {
        let mut select = MultiSelect::new(ElementId::new(1), &config()).unwrap();
        let mut renderer = TextRenderer::new();

        select.paint(&mut renderer);
        assert!(!select.needs_repaint());
        assert!(!renderer.is_dropdown_visible());

        assert!(select.handle_event(SelectEvent::GroupToggled("missing".into())));
        select.handle_event(SelectEvent::BoxClicked);
        select.paint(&mut renderer);
        assert!(renderer.is_dropdown_visible());
        assert!(renderer.tree().contains("[x] Fruit"));
    }

    #[test]
    fn test_from_model_uses_default_names() {
        let model = config().build().unwrap();
        let select = MultiSelect::from_model(ElementId::new(3), model);
        assert_eq!(select.input_names().value, DEFAULT_INPUT_NAME);
        assert_eq!(select.input_names().group, None);
    }

    #[test]
    fn test_invalid_config_creates_no_widget() {
        let config = config().with_value("x", "Mystery", Some(9.into()));
        assert!(MultiSelect::new(ElementId::new(1), &config).is_err());
    }
}
