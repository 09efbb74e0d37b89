//! End-to-end tests: configuration in, summaries and rendered trees out.

use std::collections::BTreeSet;

use horizon_groupselect::model::{DESCRIPTION_MAX_CHARS, DESCRIPTION_TRUNCATED_CHARS};
use horizon_groupselect::prelude::*;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const PRODUCE: &str = r#"{
    "groups": [{ "id": 1, "label": "Fruit" }, { "id": 2, "label": "Veg" }],
    "values": [
        { "value": "a", "label": "Apple", "group": 1 },
        { "value": "b", "label": "Banana", "group": 1 },
        { "value": "c", "label": "Carrot", "group": 2 }
    ]
}"#;

fn produce(selected: Selection) -> GroupList {
    MultiSelectConfig::from_json(PRODUCE)
        .unwrap()
        .with_selected(selected)
        .build()
        .unwrap()
}

fn selection(ids: &[&str]) -> Selection {
    ids.iter().copied().collect()
}

fn ids(set: &BTreeSet<ItemId>) -> Vec<&str> {
    set.iter().map(ItemId::as_str).collect()
}

#[test]
fn test_omitted_or_all_selects_everything() {
    setup();
    let omitted = MultiSelectConfig::from_json(PRODUCE).unwrap().build().unwrap();
    assert!(omitted.is_all_selected());
    assert_eq!(omitted.describe_selection(), "All");

    let keyword = MultiSelectConfig::from_json(
        &PRODUCE.replacen('{', r#"{ "selected": "all","#, 1),
    )
    .unwrap()
    .build()
    .unwrap();
    assert!(keyword.is_all_selected());
    assert_eq!(keyword.describe_selection(), "All");
}

#[test]
fn test_full_group_is_named() {
    let list = produce(selection(&["a", "b"]));
    assert_eq!(ids(&list.selected_group_ids()), vec!["1"]);
    assert_eq!(list.describe_selection(), "Fruit");
}

#[test]
fn test_single_value_group_counts_as_selected() {
    // Veg holds only Carrot, so selecting Carrot selects the whole group.
    let list = produce(selection(&["a", "c"]));
    assert!(!list.is_all_selected());
    assert_eq!(ids(&list.selected_group_ids()), vec!["2"]);
    assert_eq!(list.describe_selection(), "Veg, Apple");
}

#[test]
fn test_partial_groups_name_values() {
    let list = MultiSelectConfig::from_json(PRODUCE)
        .unwrap()
        .with_value("p", "Potato", Some(2.into()))
        .with_selected(selection(&["a", "c"]))
        .build()
        .unwrap();
    assert!(list.selected_group_ids().is_empty());
    assert_eq!(list.describe_selection(), "Apple, Carrot");
}

#[test]
fn test_empty_selection() {
    let list = produce(selection(&[]));
    assert_eq!(list.describe_selection(), "None");
}

#[test]
fn test_explicit_everything() {
    let list = produce(selection(&["a", "b", "c"]));
    assert!(list.is_all_selected());
    assert_eq!(list.describe_selection(), "All");
}

#[test]
fn test_groupless_value() {
    let list = MultiSelectConfig::from_json(PRODUCE)
        .unwrap()
        .with_value("z", "Zucchini", None)
        .with_selected(selection(&["z"]))
        .build()
        .unwrap();
    assert_eq!(list.describe_selection(), "Zucchini");
}

#[test]
fn test_toggle_all_from_partial() {
    let mut list = produce(selection(&["a"]));
    list.toggle_all();
    assert!(list.is_all_selected());
    list.toggle_all().toggle_all();
    assert!(list.is_all_selected());

    let mut empty = produce(selection(&[]));
    empty.toggle_all().toggle_all();
    assert!(empty.is_none_selected());
}

#[test]
fn test_toggles_are_involutions() {
    let starts: [&[&str]; 5] = [&[], &["a"], &["b", "c"], &["a", "b"], &["a", "b", "c"]];
    for start in starts {
        let list = produce(selection(start));
        let before = list.selected_values().clone();

        for value in ["a", "b", "c"] {
            let mut list = produce(selection(start));
            list.toggle_value(value).toggle_value(value);
            assert_eq!(list.selected_values(), &before);
        }

        for group in ["1", "2"] {
            let mut list = produce(selection(start));
            let partial = list.group_check_state(group) == Some(CheckState::PartiallyChecked);
            let members: Vec<ItemId> = list.group(group).unwrap().value_ids().cloned().collect();
            list.toggle_group(group).toggle_group(group);

            if partial {
                // A partial group fills on the first toggle and empties on the second.
                assert_eq!(list.group_check_state(group), Some(CheckState::Unchecked));
                let expected: BTreeSet<ItemId> = before
                    .iter()
                    .filter(|id| !members.contains(*id))
                    .cloned()
                    .collect();
                assert_eq!(list.selected_values(), &expected, "group {group} from {start:?}");
            } else {
                assert_eq!(list.selected_values(), &before, "group {group} from {start:?}");
            }
        }
    }
}

#[test]
fn test_description_length_is_bounded() {
    let mut config = MultiSelectConfig::new();
    let labels = ["Aubergine", "Broccoli", "Cauliflower", "Daikon", "Endive", "Fennel"];
    for (i, label) in labels.iter().enumerate() {
        config = config.with_value(i, *label, None);
    }

    let list = config.with_selected(Selection::none()).build().unwrap();
    let mut select = MultiSelect::from_model(ElementId::new(1), list);

    for i in 0..labels.len() {
        select.toggle_value(&i.to_string());
        let full = select.model().full_description();
        let shown = select.description().get();
        let shown_len = shown.chars().count();

        if full.chars().count() > DESCRIPTION_MAX_CHARS {
            assert_eq!(shown_len, DESCRIPTION_TRUNCATED_CHARS + 3);
            assert!(shown.ends_with("..."));
            assert!(full.starts_with(shown.trim_end_matches("...")));
        } else {
            assert!(shown_len <= DESCRIPTION_MAX_CHARS);
            assert_eq!(shown, full);
        }
    }
}

#[test]
fn test_widget_round_trip_through_renderer() {
    setup();
    let config = MultiSelectConfig::from_toml(
        r#"
        name = "produce"
        group_name = "produce_group"
        selected = ["a"]

        [[groups]]
        id = 1
        label = "Fruit"

        [[values]]
        value = "a"
        label = "Apple"
        group = 1

        [[values]]
        value = "b"
        label = "Banana"
        group = 1

        [[values]]
        value = 3
        label = "Zucchini"
        "#,
    )
    .unwrap();

    let mut registry = WidgetRegistry::new();
    let element = ElementId::new(5);
    registry.attach(element, &config).unwrap();

    let mut renderer = TextRenderer::new();
    registry.dispatch(element, SelectEvent::BoxClicked);
    registry.dispatch(element, SelectEvent::ValueToggled("3".into()));

    let select = registry.get_mut(element).unwrap();
    select.paint(&mut renderer);

    let expected = "\
[Apple, Zucchini]
[-] All
├── [-] Fruit
│   ├── [x] Apple
│   └── [ ] Banana
└── [x] Zucchini
";
    assert_eq!(renderer.output(), expected);

    let view = select.view();
    let checked: Vec<(&str, &str)> = view
        .checked_values()
        .into_iter()
        .map(|(name, id)| (name, id.as_str()))
        .collect();
    assert_eq!(checked, vec![("produce", "a"), ("produce", "3")]);
}

#[test]
fn test_unknown_group_aborts_construction() {
    let json = r#"{
        "groups": [{ "id": 1, "label": "Fruit" }],
        "values": [{ "value": "x", "label": "Mystery", "group": 4 }]
    }"#;
    let config = MultiSelectConfig::from_json(json).unwrap();

    let mut registry = WidgetRegistry::new();
    let err = registry.attach(ElementId::new(1), &config).unwrap_err();
    assert_eq!(err.to_string(), "No matching group 4 for value x");
    assert!(registry.is_empty());
}
