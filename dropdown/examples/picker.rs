use std::fs::File;

use dropdown::prelude::*;
use dropdown::{DropdownError, items_from_json};
use simplelog::{Config, LevelFilter, WriteLogger};

const ITEMS: &str = r#"[
    {"label": "Apple", "value": "apple", "parent": "fruit"},
    {"label": "Fruit", "value": "fruit"},
    {"label": "Banana", "value": "banana", "parent": "fruit"},
    {"label": "Vegetables", "value": "veg"},
    {"label": "Carrot", "value": "carrot", "parent": "veg"},
    {"label": "Bean", "value": "bean", "parent": "veg", "disabled": true},
    {"label": "Kiwi", "value": "kiwi", "parent": "exotic"}
]"#;

/// Prints events as they are drained.
struct Printer;

impl DropdownListener for Printer {
    fn on_change_value(&mut self, value: &DropdownValue) {
        println!("  -> value {}", serde_json::to_string(value).unwrap_or_default());
    }

    fn on_select_item(&mut self, item: &Item) {
        println!("  -> picked {}", item.label);
    }

    fn on_select_items(&mut self, items: &[Item]) {
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        println!("  -> selection [{}]", labels.join(", "));
    }

    fn on_open(&mut self) {
        println!("  -> open");
    }

    fn on_close(&mut self) {
        println!("  -> close");
    }

    fn on_scroll_to(&mut self, row: usize) {
        println!("  -> scroll to row {}", row);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("picker.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let items = items_from_json(ITEMS)?;

    println!("== single select ==");
    let single = Dropdown::with_items(
        DropdownConfig::new().searchable().placeholder("Pick a food"),
        items.clone(),
        DropdownValue::none(),
    )
    .map_err(DropdownError::from)?;
    let mut printer = Printer;

    show(&single);
    single.toggle_open();
    single.set_search_text("car");
    show(&single);
    single.press_row(1);
    single.dispatch_events(&mut printer);
    show(&single);

    println!("== multi select, at most 2 ==");
    let multi = Dropdown::with_items(
        DropdownConfig::new().multiple().max(2).sticky_header(),
        items,
        DropdownValue::multiple(["apple"]),
    )
    .map_err(DropdownError::from)?;

    multi.open();
    multi.dispatch_events(&mut printer);
    show(&multi);
    println!("sticky headers at {:?}", multi.sticky_header_indices());

    for label in ["Banana", "Carrot", "Bean", "Apple", "Carrot"] {
        let Some(row) = multi.display_rows().iter().position(|r| r.item.label == label) else {
            continue;
        };
        println!("press {}: {:?}", label, multi.press_row(row));
        multi.dispatch_events(&mut printer);
    }
    show(&multi);

    Ok(())
}

fn show(dropdown: &Dropdown) {
    println!("[{}] {}", dropdown.label(), if dropdown.is_open() { "open" } else { "closed" });
    for row in dropdown.display_rows() {
        let mark = match (row.is_selected, row.is_pressable) {
            (true, _) => "[x]",
            (false, true) => "[ ]",
            (false, false) => " - ",
        };
        println!("  {}{} {}", "  ".repeat(row.depth as usize), mark, row.item.label);
    }
}
