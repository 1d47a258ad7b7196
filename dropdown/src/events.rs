//! Dropdown event types.
//!
//! State changes queue events on the dropdown instead of calling closures.
//! The owner drains the queue after each interaction with
//! [`Dropdown::take_events`](crate::Dropdown::take_events), or hands a
//! [`DropdownListener`] to
//! [`Dropdown::dispatch_events`](crate::Dropdown::dispatch_events).

use crate::item::Item;
use crate::selection::DropdownValue;

// =============================================================================
// Dropdown Event Types
// =============================================================================

/// An event produced by the dropdown for its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEvent {
    /// The external value changed.
    ChangeValue(DropdownValue),
    /// An item was picked in single-select mode.
    SelectItem(Item),
    /// The multi-select selection changed; carries every selected item.
    SelectItems(Vec<Item>),
    /// The list opened.
    Open,
    /// The list closed.
    Close,
    /// The header was pressed.
    Press,
    /// The presentation layer should scroll to this display row.
    ScrollTo(usize),
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Input was ignored; no state changed.
    Ignored,
    /// Input was consumed.
    Consumed,
}

/// Receiver for dropdown events.
///
/// All methods default to doing nothing, so owners only implement the events
/// they care about.
pub trait DropdownListener {
    /// The external value changed.
    fn on_change_value(&mut self, _value: &DropdownValue) {}

    /// An item was picked in single-select mode.
    fn on_select_item(&mut self, _item: &Item) {}

    /// The multi-select selection changed.
    fn on_select_items(&mut self, _items: &[Item]) {}

    /// The list opened.
    fn on_open(&mut self) {}

    /// The list closed.
    fn on_close(&mut self) {}

    /// The header was pressed.
    fn on_press(&mut self) {}

    /// Scroll request for a display row.
    fn on_scroll_to(&mut self, _row: usize) {}

    /// Route one event to the matching method.
    fn handle(&mut self, event: &DropdownEvent) {
        match event {
            DropdownEvent::ChangeValue(value) => self.on_change_value(value),
            DropdownEvent::SelectItem(item) => self.on_select_item(item),
            DropdownEvent::SelectItems(items) => self.on_select_items(items),
            DropdownEvent::Open => self.on_open(),
            DropdownEvent::Close => self.on_close(),
            DropdownEvent::Press => self.on_press(),
            DropdownEvent::ScrollTo(row) => self.on_scroll_to(*row),
        }
    }
}
