use dropdown::prelude::*;
use dropdown::{ConfigError, SelectionMode};

fn fruit() -> Vec<Item> {
    vec![
        Item::new("Fruit", "fruit"),
        Item::new("Apple", "apple").parent("fruit"),
        Item::new("Banana", "banana").parent("fruit"),
    ]
}

fn labels(dropdown: &Dropdown) -> Vec<String> {
    dropdown.display_items().into_iter().map(|i| i.label).collect()
}

fn row_of(dropdown: &Dropdown, label: &str) -> usize {
    dropdown
        .display_rows()
        .iter()
        .position(|row| row.item.label == label)
        .unwrap()
}

#[derive(Default)]
struct Recorder {
    values: Vec<DropdownValue>,
    single: Vec<Item>,
    multi: Vec<Vec<Item>>,
    opened: usize,
    closed: usize,
}

impl DropdownListener for Recorder {
    fn on_change_value(&mut self, value: &DropdownValue) {
        self.values.push(value.clone());
    }

    fn on_select_item(&mut self, item: &Item) {
        self.single.push(item.clone());
    }

    fn on_select_items(&mut self, items: &[Item]) {
        self.multi.push(items.to_vec());
    }

    fn on_open(&mut self) {
        self.opened += 1;
    }

    fn on_close(&mut self) {
        self.closed += 1;
    }
}

// -----------------------------------------------------------------------------
// Multi-select
// -----------------------------------------------------------------------------

#[test]
fn test_multi_scenario_order_flags_and_search() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().multiple().searchable(),
        fruit(),
        DropdownValue::multiple(["apple"]),
    )
    .unwrap();

    assert_eq!(labels(&dropdown), ["Fruit", "Apple", "Banana"]);
    let flags: Vec<bool> = dropdown.display_rows().iter().map(|r| r.is_selected).collect();
    assert_eq!(flags, [false, true, false]);

    assert_eq!(dropdown.set_search_text("ban"), EventResult::Consumed);
    assert_eq!(labels(&dropdown), ["Fruit", "Banana"]);
    assert!(dropdown.take_events().is_empty());
}

#[test]
fn test_multi_min_blocks_removal() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().multiple().min(1),
        fruit(),
        DropdownValue::multiple(["apple"]),
    )
    .unwrap();

    let apple = row_of(&dropdown, "Apple");
    assert_eq!(dropdown.press_row(apple), EventResult::Ignored);
    assert_eq!(dropdown.value(), DropdownValue::multiple(["apple"]));
    assert_eq!(dropdown.selected_items().len(), 1);
    assert!(dropdown.take_events().is_empty());
}

#[test]
fn test_multi_max_blocks_addition() {
    let items = vec![Item::new("A", "a"), Item::new("B", "b"), Item::new("C", "c")];
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().multiple().max(2),
        items,
        DropdownValue::multiple(["a", "b"]),
    )
    .unwrap();

    assert_eq!(dropdown.press_row(2), EventResult::Ignored);
    assert_eq!(dropdown.value(), DropdownValue::multiple(["a", "b"]));
    assert!(!dropdown.display_rows()[2].is_selected);

    // Removing one makes room again.
    assert_eq!(dropdown.press_row(0), EventResult::Consumed);
    assert_eq!(dropdown.press_row(2), EventResult::Consumed);
    assert_eq!(dropdown.value(), DropdownValue::multiple(["b", "c"]));
}

#[test]
fn test_multi_toggle_emits_value_and_items() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().multiple(),
        fruit(),
        DropdownValue::multiple(["apple"]),
    )
    .unwrap();
    dropdown.open();
    dropdown.take_events();

    let banana = row_of(&dropdown, "Banana");
    assert_eq!(dropdown.press_row(banana), EventResult::Consumed);
    assert!(dropdown.is_open());

    let events = dropdown.take_events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        DropdownEvent::ChangeValue(DropdownValue::multiple(["apple", "banana"]))
    );
    match &events[1] {
        DropdownEvent::SelectItems(items) => {
            let names: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
            assert_eq!(names, ["Apple", "Banana"]);
            assert!(items.iter().all(|i| i.selected.is_none()));
        }
        other => panic!("unexpected event {:?}", other),
    }

    assert_eq!(dropdown.press_row(banana), EventResult::Consumed);
    assert_eq!(dropdown.value(), DropdownValue::multiple(["apple"]));
}

#[test]
fn test_multi_external_duplicates_collapse() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().multiple(),
        fruit(),
        DropdownValue::multiple(["banana", "apple", "banana"]),
    )
    .unwrap();
    assert_eq!(dropdown.value(), DropdownValue::multiple(["banana", "apple"]));
    assert_eq!(dropdown.label(), "Selected Items Count: 2");
}

#[test]
fn test_multi_items_replacement_rebuilds_mirror_silently() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().multiple(),
        fruit(),
        DropdownValue::multiple(["kiwi"]),
    )
    .unwrap();
    assert!(dropdown.selected_items().is_empty());

    let mut items = fruit();
    items.push(Item::new("Kiwi", "kiwi").parent("fruit"));
    dropdown.set_items(items);

    let selected = dropdown.selected_items();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].label, "Kiwi");
    assert!(dropdown.take_events().is_empty());
    assert!(dropdown.is_dirty());
}

#[test]
fn test_multi_owner_value_resyncs_mirror() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().multiple(),
        fruit(),
        DropdownValue::multiple(["apple"]),
    )
    .unwrap();
    dropdown.set_value(DropdownValue::single("banana"));

    assert_eq!(dropdown.value(), DropdownValue::multiple(["banana"]));
    let selected = dropdown.selected_items();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].label, "Banana");
}

// -----------------------------------------------------------------------------
// Single-select
// -----------------------------------------------------------------------------

#[test]
fn test_single_press_replaces_value() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().keep_open(),
        fruit(),
        DropdownValue::single("apple"),
    )
    .unwrap();

    let banana = row_of(&dropdown, "Banana");
    assert_eq!(dropdown.press_row(banana), EventResult::Consumed);
    assert_eq!(dropdown.value(), DropdownValue::single("banana"));

    let mut recorder = Recorder::default();
    dropdown.dispatch_events(&mut recorder);
    assert_eq!(recorder.values, [DropdownValue::single("banana")]);
    assert_eq!(recorder.single.len(), 1);
    assert_eq!(recorder.single[0].label, "Banana");
    assert!(recorder.multi.is_empty());
}

#[test]
fn test_single_press_closes_and_clears_search() {
    let items = vec![Item::new("X", "x"), Item::new("Y", "y")];
    let dropdown =
        Dropdown::with_items(DropdownConfig::new().searchable(), items, DropdownValue::none())
            .unwrap();

    dropdown.open();
    dropdown.set_search_text("x");
    assert_eq!(dropdown.display_len(), 1);
    dropdown.take_events();

    assert_eq!(dropdown.press_row(0), EventResult::Consumed);
    assert_eq!(dropdown.value(), DropdownValue::single("x"));
    assert!(!dropdown.is_open());
    assert_eq!(dropdown.search_text(), "");
    assert_eq!(dropdown.display_len(), 2);

    let mut recorder = Recorder::default();
    dropdown.dispatch_events(&mut recorder);
    assert_eq!(recorder.closed, 1);
    assert_eq!(recorder.single[0].value, Some(Value::from("x")));
}

#[test]
fn test_single_press_same_value_reports_item_only() {
    let dropdown =
        Dropdown::with_items(DropdownConfig::new(), fruit(), DropdownValue::single("apple"))
            .unwrap();
    dropdown.press_row(row_of(&dropdown, "Apple"));

    let events = dropdown.take_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], DropdownEvent::SelectItem(item) if item.label == "Apple"));
}

#[test]
fn test_single_label_and_placeholder() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().searchable().placeholder("Pick one"),
        fruit(),
        DropdownValue::none(),
    )
    .unwrap();
    assert!(dropdown.is_null());
    assert_eq!(dropdown.label(), "Pick one");

    dropdown.set_value(DropdownValue::single("banana"));
    assert!(!dropdown.is_null());
    assert_eq!(dropdown.label(), "Banana");
    assert_eq!(dropdown.selected_item().map(|i| i.label), Some("Banana".to_string()));

    // Lookup runs over the displayed rows.
    dropdown.set_search_text("app");
    assert_eq!(dropdown.selected_item(), None);
    assert_eq!(dropdown.label(), "Pick one");

    dropdown.set_value(DropdownValue::single("kiwi"));
    dropdown.set_search_text("");
    assert_eq!(dropdown.label(), "Pick one");
}

#[test]
fn test_empty_string_value_is_null() {
    let items = vec![Item::new("Blank", "")];
    let dropdown =
        Dropdown::with_items(DropdownConfig::new(), items, DropdownValue::single("")).unwrap();
    assert!(dropdown.is_null());
    assert_eq!(dropdown.selected_item(), None);
}

// -----------------------------------------------------------------------------
// Ignored presses
// -----------------------------------------------------------------------------

#[test]
fn test_category_press_ignored_when_not_selectable() {
    let mut items = fruit();
    items.push(Item::new("Nuts", "nuts").selectable(true));
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().categories_not_selectable(),
        items,
        DropdownValue::none(),
    )
    .unwrap();

    assert_eq!(dropdown.press_row(row_of(&dropdown, "Fruit")), EventResult::Ignored);
    assert_eq!(dropdown.value(), DropdownValue::none());
    assert!(dropdown.take_events().is_empty());

    let rows = dropdown.display_rows();
    assert!(!rows[0].is_pressable);
    assert!(rows[1].is_pressable);

    assert_eq!(dropdown.press_row(row_of(&dropdown, "Nuts")), EventResult::Consumed);
    assert_eq!(dropdown.value(), DropdownValue::single("nuts"));
}

#[test]
fn test_disabled_and_unselectable_items_ignored() {
    let items = vec![
        Item::new("Off", "off").disabled(true),
        Item::new("Label only", "label").selectable(false),
    ];
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().multiple(),
        items,
        DropdownValue::Multiple(vec![]),
    )
    .unwrap();

    assert_eq!(dropdown.press_row(0), EventResult::Ignored);
    assert_eq!(dropdown.press_row(1), EventResult::Ignored);
    assert!(dropdown.value().is_empty());
    assert!(dropdown.take_events().is_empty());
    assert!(dropdown.display_rows()[0].is_disabled);
}

#[test]
fn test_press_on_unknown_item_or_row() {
    let dropdown =
        Dropdown::with_items(DropdownConfig::new(), fruit(), DropdownValue::none()).unwrap();

    assert_eq!(dropdown.press_item(&Item::new("Kiwi", "kiwi")), EventResult::Ignored);
    assert_eq!(dropdown.press_item(&Item::unvalued("Ghost")), EventResult::Ignored);
    assert_eq!(dropdown.press_row(42), EventResult::Ignored);
    assert_eq!(dropdown.value(), DropdownValue::none());
    assert!(dropdown.take_events().is_empty());

    assert_eq!(dropdown.press_item(&Item::new("whatever", "apple")), EventResult::Consumed);
    assert_eq!(dropdown.value(), DropdownValue::single("apple"));
}

#[test]
fn test_unvalued_row_is_not_pressable() {
    let items = vec![Item::unvalued("Header"), Item::new("A", "a")];
    let dropdown =
        Dropdown::with_items(DropdownConfig::new(), items, DropdownValue::none()).unwrap();
    assert_eq!(dropdown.press_row(0), EventResult::Ignored);
    assert!(!dropdown.display_rows()[0].is_pressable);
}

// -----------------------------------------------------------------------------
// Open/close, scroll, headers
// -----------------------------------------------------------------------------

#[test]
fn test_toggle_open_emits_press_open_and_scroll() {
    let dropdown =
        Dropdown::with_items(DropdownConfig::new(), fruit(), DropdownValue::single("banana"))
            .unwrap();

    assert_eq!(dropdown.toggle_open(), EventResult::Consumed);
    assert!(dropdown.is_open());
    assert_eq!(
        dropdown.take_events(),
        [DropdownEvent::Press, DropdownEvent::Open, DropdownEvent::ScrollTo(2)]
    );

    assert_eq!(dropdown.toggle_open(), EventResult::Consumed);
    assert!(!dropdown.is_open());
    assert_eq!(dropdown.take_events(), [DropdownEvent::Press, DropdownEvent::Close]);
}

#[test]
fn test_no_scroll_without_selection_or_auto_scroll() {
    let dropdown =
        Dropdown::with_items(DropdownConfig::new(), fruit(), DropdownValue::none()).unwrap();
    dropdown.open();
    assert_eq!(dropdown.take_events(), [DropdownEvent::Open]);

    let filtered = Dropdown::with_items(
        DropdownConfig::new().searchable(),
        fruit(),
        DropdownValue::single("banana"),
    )
    .unwrap();
    filtered.set_search_text("ban");
    assert_eq!(filtered.scroll_target(), Some(1));
    assert_eq!(filtered.selected_item().map(|i| i.label), Some("Banana".to_string()));

    let quiet = Dropdown::with_items(
        DropdownConfig::new().no_auto_scroll(),
        fruit(),
        DropdownValue::single("apple"),
    )
    .unwrap();
    quiet.open();
    assert_eq!(quiet.take_events(), [DropdownEvent::Open]);
    assert_eq!(quiet.scroll_target(), Some(1));
}

#[test]
fn test_toggle_close_keeps_search_but_close_clears_it() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().searchable(),
        fruit(),
        DropdownValue::none(),
    )
    .unwrap();

    dropdown.toggle_open();
    dropdown.set_search_text("app");
    dropdown.toggle_open();
    assert_eq!(dropdown.search_text(), "app");

    dropdown.open();
    assert_eq!(dropdown.close(), EventResult::Consumed);
    assert_eq!(dropdown.search_text(), "");
    assert_eq!(dropdown.close(), EventResult::Ignored);
}

#[test]
fn test_disabled_control_ignores_toggle() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().disabled(),
        fruit(),
        DropdownValue::none(),
    )
    .unwrap();
    assert_eq!(dropdown.toggle_open(), EventResult::Ignored);
    assert_eq!(dropdown.open(), EventResult::Ignored);
    assert!(!dropdown.is_open());
    assert!(dropdown.take_events().is_empty());
}

#[test]
fn test_disabled_control_ignores_presses() {
    let dropdown = Dropdown::with_items(
        DropdownConfig::new().multiple().disabled(),
        fruit(),
        DropdownValue::multiple(["apple"]),
    )
    .unwrap();

    assert_eq!(dropdown.press_row(row_of(&dropdown, "Banana")), EventResult::Ignored);
    assert_eq!(dropdown.press_item(&Item::new("Apple", "apple")), EventResult::Ignored);
    assert_eq!(dropdown.value(), DropdownValue::multiple(["apple"]));
    assert!(dropdown.take_events().is_empty());
    assert!(dropdown.display_rows().iter().all(|row| !row.is_pressable));
}

#[test]
fn test_search_ignored_when_not_searchable() {
    let dropdown =
        Dropdown::with_items(DropdownConfig::new(), fruit(), DropdownValue::none()).unwrap();
    assert_eq!(dropdown.set_search_text("ban"), EventResult::Ignored);
    assert_eq!(dropdown.display_len(), 3);
}

#[test]
fn test_sticky_header_indices_follow_display() {
    let mut items = fruit();
    items.push(Item::new("Veg", "veg"));
    items.push(Item::new("Bean", "bean").parent("veg"));

    let dropdown = Dropdown::with_items(
        DropdownConfig::new().searchable().sticky_header(),
        items.clone(),
        DropdownValue::none(),
    )
    .unwrap();
    assert_eq!(dropdown.sticky_header_indices(), [0, 3]);

    dropdown.set_search_text("b");
    assert_eq!(labels(&dropdown), ["Fruit", "Banana", "Veg", "Bean"]);
    assert_eq!(dropdown.sticky_header_indices(), [0, 2]);

    let plain =
        Dropdown::with_items(DropdownConfig::new(), items, DropdownValue::none()).unwrap();
    assert!(plain.sticky_header_indices().is_empty());
}

#[test]
fn test_rows_carry_depth_and_root_flag() {
    let dropdown =
        Dropdown::with_items(DropdownConfig::new(), fruit(), DropdownValue::none()).unwrap();
    let rows = dropdown.display_rows();
    assert_eq!(rows[0].depth, 0);
    assert!(rows[0].is_root);
    assert_eq!(rows[1].depth, 1);
    assert!(!rows[1].is_root);
    assert_eq!(rows[2].index, 2);
}

// -----------------------------------------------------------------------------
// Handle
// -----------------------------------------------------------------------------

#[test]
fn test_clones_share_state() {
    let dropdown =
        Dropdown::with_items(DropdownConfig::new(), fruit(), DropdownValue::none()).unwrap();
    let handle = dropdown.clone();

    handle.press_row(1);
    assert_eq!(dropdown.value(), DropdownValue::single("apple"));
    assert_eq!(dropdown.id(), handle.id());
    assert_eq!(dropdown.take_events().len(), 2);
    assert!(handle.take_events().is_empty());
}

#[test]
fn test_ids_are_unique() {
    let a = Dropdown::new(DropdownConfig::new()).unwrap();
    let b = Dropdown::new(DropdownConfig::new()).unwrap();
    assert_ne!(a.id(), b.id());
    assert!(a.id_string().starts_with("__dropdown_"));
}

#[test]
fn test_dirty_tracking() {
    let dropdown =
        Dropdown::with_items(DropdownConfig::new(), fruit(), DropdownValue::none()).unwrap();
    assert!(!dropdown.is_dirty());
    dropdown.press_row(1);
    assert!(dropdown.is_dirty());
    dropdown.clear_dirty();
    assert!(!dropdown.is_dirty());
}

#[test]
fn test_invalid_limits_rejected() {
    let err = Dropdown::new(DropdownConfig::new().multiple().min(3).max(1)).unwrap_err();
    assert_eq!(err, ConfigError::LimitsInverted { min: 3, max: 1 });
}

#[test]
fn test_mode_follows_config() {
    let multi = Dropdown::new(DropdownConfig::new().multiple()).unwrap();
    assert_eq!(multi.config().mode(), SelectionMode::Multi);
    assert_eq!(multi.value(), DropdownValue::Multiple(vec![]));
    assert_eq!(multi.label(), "");
}
