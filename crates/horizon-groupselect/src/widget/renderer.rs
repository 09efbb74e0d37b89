//! Rendering backends for multi-selects.
//!
//! The widget does not draw anything itself. After every change it hands a
//! [`SelectView`] to a [`SelectRenderer`] supplied by the host toolkit, which
//! may build DOM nodes, paint into a canvas or write terminal cells.
//!
//! [`TextRenderer`] is a small backend that draws the widget as plain text.
//! It is handy for logging and for tests.

use std::fmt::Write as FmtWrite;

use super::view::{CheckBoxView, SelectView, TreeRow};
use crate::model::CheckState;

/// Draws a multi-select from a snapshot.
pub trait SelectRenderer {
    /// Draw the summary shown in the closed box.
    fn render_description(&mut self, description: &str);

    /// Draw the checkbox tree.
    fn render_tree(&mut self, view: &SelectView);

    /// Show or hide the dropdown.
    fn set_dropdown_visible(&mut self, _visible: bool) {}
}

/// Style options for the text tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

impl TreeStyle {
    fn connector(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (TreeStyle::Ascii, false) => "+-- ",
            (TreeStyle::Ascii, true) => "`-- ",
            (TreeStyle::Unicode, false) => "\u{251c}\u{2500}\u{2500} ",
            (TreeStyle::Unicode, true) => "\u{2514}\u{2500}\u{2500} ",
        }
    }

    fn branch(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (_, true) => "    ",
            (TreeStyle::Ascii, false) => "|   ",
            (TreeStyle::Unicode, false) => "\u{2502}   ",
        }
    }
}

/// Renders a multi-select into strings.
///
/// ```text
/// [Fruit, Carrot]
/// [-] All
/// ├── [x] Fruit
/// │   ├── [x] Apple
/// │   └── [x] Banana
/// └── [-] Veg
///     ├── [x] Carrot
///     └── [ ] Peanut
/// ```
///
/// The tree is only drawn while the dropdown is visible.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    style: TreeStyle,
    description: String,
    tree: String,
    visible: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: TreeStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// The last rendered summary.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The last rendered tree.
    pub fn tree(&self) -> &str {
        &self.tree
    }

    pub fn is_dropdown_visible(&self) -> bool {
        self.visible
    }

    /// The summary line, followed by the tree when the dropdown is visible.
    pub fn output(&self) -> String {
        let mut output = format!("[{}]\n", self.description);
        if self.visible {
            output.push_str(&self.tree);
        }
        output
    }

    fn marker(checkbox: &CheckBoxView) -> &'static str {
        match checkbox.state {
            CheckState::Checked => "[x]",
            CheckState::Unchecked => "[ ]",
            CheckState::PartiallyChecked => "[-]",
        }
    }

    fn format_tree(&self, view: &SelectView) -> String {
        let mut output = String::new();
        writeln!(output, "{} All", Self::marker(&view.all)).expect("write to String");

        let row_count = view.rows.len();
        for (i, row) in view.rows.iter().enumerate() {
            let is_last = i + 1 == row_count;
            output.push_str(self.style.connector(is_last));

            match row {
                TreeRow::Group {
                    label,
                    checkbox,
                    values,
                    ..
                } => {
                    writeln!(output, "{} {}", Self::marker(checkbox), label)
                        .expect("write to String");
                    let value_count = values.len();
                    for (j, value) in values.iter().enumerate() {
                        output.push_str(self.style.branch(is_last));
                        output.push_str(self.style.connector(j + 1 == value_count));
                        writeln!(output, "{} {}", Self::marker(&value.checkbox), value.label)
                            .expect("write to String");
                    }
                }
                TreeRow::Value(value) => {
                    writeln!(output, "{} {}", Self::marker(&value.checkbox), value.label)
                        .expect("write to String");
                }
            }
        }
        output
    }
}

impl SelectRenderer for TextRenderer {
    fn render_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    fn render_tree(&mut self, view: &SelectView) {
        self.tree = self.format_tree(view);
    }

    fn set_dropdown_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupListBuilder, Value};
    use crate::widget::view::InputNames;

    fn view(open: bool) -> SelectView {
        let model = GroupListBuilder::new()
            .groups([(1, "Fruit"), (2, "Veg")])
            .values([
                Value::new("a", "Apple").with_group(1),
                Value::new("b", "Banana").with_group(1),
                Value::new("c", "Carrot").with_group(2),
                Value::new("p", "Peanut").with_group(2),
            ])
            .selection(["a", "b", "c"].into_iter().collect())
            .build()
            .unwrap();
        let names = InputNames {
            value: "v".to_string(),
            group: None,
            all: None,
        };
        SelectView::capture(&model, &names, open)
    }

    #[test]
    fn test_unicode_tree() {
        let mut renderer = TextRenderer::new();
        let view = view(true);
        renderer.render_description(&view.description);
        renderer.render_tree(&view);
        renderer.set_dropdown_visible(true);

        let expected = "\
[Fruit, Carrot]
[-] All
├── [x] Fruit
│   ├── [x] Apple
│   └── [x] Banana
└── [-] Veg
    ├── [x] Carrot
    └── [ ] Peanut
";
        assert_eq!(renderer.output(), expected);
    }

    #[test]
    fn test_ascii_tree() {
        let mut renderer = TextRenderer::with_style(TreeStyle::Ascii);
        renderer.render_tree(&view(true));
        assert!(renderer.tree().contains("+-- [x] Fruit\n|   +-- [x] Apple\n"));
        assert!(renderer.tree().contains("`-- [-] Veg\n"));
    }

    #[test]
    fn test_closed_dropdown_hides_tree() {
        let mut renderer = TextRenderer::new();
        let view = view(false);
        renderer.render_description(&view.description);
        renderer.render_tree(&view);
        renderer.set_dropdown_visible(false);
        assert_eq!(renderer.output(), "[Fruit, Carrot]\n");
    }
}
