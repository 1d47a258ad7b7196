//! Dropdown state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::config::DropdownConfig;
use crate::error::ConfigError;
use crate::events::{DropdownEvent, DropdownListener, EventResult};
use crate::hierarchy::Hierarchy;
use crate::item::{Item, find_by_value};
use crate::reducer::reduce;
use crate::search::filter_indices;
use crate::selection::{
    DropdownValue, LocalSelection, SelectionMode, is_item_selected, selected_position,
};
use crate::toggle::{IgnoreReason, PressDecision, check_pressable, resolve_press};

/// Unique identifier for a Dropdown instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

/// A row of the displayed list.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Index of the item in the source collection.
    pub index: usize,
    /// The item itself.
    pub item: Item,
    /// Depth in the hierarchy (0 = root).
    pub depth: u16,
    /// Whether the item has no parent.
    pub is_root: bool,
    /// Whether the item is part of the current value.
    pub is_selected: bool,
    /// Whether the item is disabled.
    pub is_disabled: bool,
    /// Whether a press on this row would be accepted.
    pub is_pressable: bool,
}

/// Internal state for a Dropdown.
#[derive(Debug, Default)]
struct DropdownInner {
    config: DropdownConfig,
    /// Source items, as handed in by the owner.
    items: Vec<Item>,
    /// Display order of `items` (rebuilt when items are replaced).
    hierarchy: Hierarchy,
    /// Filtered display order (rebuilt on item or search changes).
    display: Vec<usize>,
    /// External value, normalized to the selection mode.
    value: DropdownValue,
    /// Multi-select mirror of `value`.
    local: LocalSelection,
    /// Current search text.
    search: String,
    /// Events waiting to be drained by the owner.
    events: Vec<DropdownEvent>,
}

impl DropdownInner {
    fn mode(&self) -> SelectionMode {
        self.config.mode()
    }

    fn refilter(&mut self) {
        self.display = filter_indices(&self.items, &self.hierarchy, &self.search);
    }

    fn rebuild_local(&mut self) {
        match self.mode() {
            SelectionMode::Multi => self.local = LocalSelection::rebuild(&self.items, &self.value),
            SelectionMode::Single => self.local.clear(),
        }
    }

    fn is_selected(&self, index: usize) -> bool {
        is_item_selected(&self.items[index], &self.value, self.mode())
    }

    /// First display row showing a selected item.
    fn first_selected_row(&self) -> Option<usize> {
        match self.mode() {
            SelectionMode::Single => selected_position(&self.items, &self.display, &self.value),
            SelectionMode::Multi => self.display.iter().position(|&i| self.is_selected(i)),
        }
    }

    fn selected_item(&self) -> Option<Item> {
        if self.mode() == SelectionMode::Multi {
            return None;
        }
        let row = selected_position(&self.items, &self.display, &self.value)?;
        Some(self.items[self.display[row]].clone())
    }
}

/// A dropdown picker with shared, reactive state.
///
/// `Dropdown` owns the item collection, the current value, the multi-select
/// mirror, the search text and the open flag. The presentation layer reads
/// [`display_rows`](Self::display_rows) and reports presses, text input and
/// header toggles; the owner drains [`DropdownEvent`]s afterwards.
///
/// Clones share state, so a handle can be captured by event handlers.
///
/// # Example
///
/// ```
/// use dropdown::{Dropdown, DropdownConfig, DropdownValue, Item};
///
/// let picker = Dropdown::with_items(
///     DropdownConfig::new().multiple().searchable(),
///     vec![
///         Item::new("Fruit", "fruit"),
///         Item::new("Apple", "apple").parent("fruit"),
///         Item::new("Banana", "banana").parent("fruit"),
///     ],
///     DropdownValue::multiple(["apple"]),
/// )
/// .unwrap();
///
/// picker.set_search_text("ban");
/// let labels: Vec<String> = picker.display_items().into_iter().map(|i| i.label).collect();
/// assert_eq!(labels, ["Fruit", "Banana"]);
/// ```
#[derive(Debug)]
pub struct Dropdown {
    /// Unique identifier for this dropdown instance
    id: DropdownId,
    /// Internal state
    inner: Arc<RwLock<DropdownInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Whether the list is open
    is_open: Arc<AtomicBool>,
}

impl Dropdown {
    /// Create an empty dropdown.
    pub fn new(config: DropdownConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let value = DropdownValue::none().normalized(config.mode());
        Ok(Self {
            id: DropdownId::new(),
            inner: Arc::new(RwLock::new(DropdownInner {
                config,
                value,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            is_open: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Create a dropdown with items and an initial value.
    pub fn with_items(
        config: DropdownConfig,
        items: Vec<Item>,
        value: DropdownValue,
    ) -> Result<Self, ConfigError> {
        let dropdown = Self::new(config)?;
        dropdown.set_value(value);
        dropdown.set_items(items);
        dropdown.clear_dirty();
        Ok(dropdown)
    }

    /// Get the unique ID for this dropdown.
    pub fn id(&self) -> DropdownId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Get a copy of the configuration.
    pub fn config(&self) -> DropdownConfig {
        self.inner
            .read()
            .map(|guard| guard.config.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Get the source items.
    pub fn items(&self) -> Vec<Item> {
        self.inner
            .read()
            .map(|guard| guard.items.clone())
            .unwrap_or_default()
    }

    /// Replace the item collection.
    ///
    /// Rebuilds the display order and, in multi-select mode, the selection
    /// mirror from the current value. Emits no events.
    pub fn set_items(&self, items: Vec<Item>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.items = items;
            guard.hierarchy = Hierarchy::build(&guard.items);
            guard.refilter();
            guard.rebuild_local();
            log::debug!(
                "[dropdown] {} items replaced ({} rows shown)",
                self.id,
                guard.display.len()
            );
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// Get the current value.
    pub fn value(&self) -> DropdownValue {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Replace the value from the owner's side.
    ///
    /// The value is normalized to the selection mode. Emits no events.
    pub fn set_value(&self, value: DropdownValue) {
        if let Ok(mut guard) = self.inner.write() {
            let value = value.normalized(guard.mode());
            if guard.value != value {
                log::debug!("[dropdown] {} value set to {:?}", self.id, value);
                guard.value = value;
                guard.rebuild_local();
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// The selected item in single-select mode.
    ///
    /// Looked up among the displayed rows; `None` when nothing matches.
    pub fn selected_item(&self) -> Option<Item> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.selected_item())
    }

    /// The selected items.
    ///
    /// In multi-select mode these come from the selection mirror, in
    /// collection order.
    pub fn selected_items(&self) -> Vec<Item> {
        self.inner
            .read()
            .map(|guard| match guard.mode() {
                SelectionMode::Multi => guard.local.selected_items(),
                SelectionMode::Single => guard.selected_item().into_iter().collect(),
            })
            .unwrap_or_default()
    }

    /// Returns `true` if there is nothing to show as selected.
    pub fn is_null(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_null() || guard.hierarchy.is_empty())
            .unwrap_or(true)
    }

    /// Header label: the selected label, the multi-select count, or the
    /// placeholder.
    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|guard| match guard.mode() {
                SelectionMode::Multi if !guard.value.is_empty() => {
                    format!("{} {}", guard.config.multiple_text, guard.value.len())
                }
                SelectionMode::Multi => guard.config.placeholder.clone(),
                SelectionMode::Single => guard
                    .selected_item()
                    .map(|item| item.label)
                    .unwrap_or_else(|| guard.config.placeholder.clone()),
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the list is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Open the list.
    ///
    /// With `auto_scroll`, also requests a scroll to the first selected row.
    pub fn open(&self) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if guard.config.disabled {
            return EventResult::Ignored;
        }
        self.open_locked(&mut guard)
    }

    /// Close the list and clear the search text.
    pub fn close(&self) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        self.close_locked(&mut guard, true)
    }

    /// Handle a press on the header: toggle the list open or closed.
    ///
    /// Closing this way keeps the search text.
    pub fn toggle_open(&self) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if guard.config.disabled {
            log::trace!("[dropdown] {} toggle ignored, disabled", self.id);
            return EventResult::Ignored;
        }
        guard.events.push(DropdownEvent::Press);
        if self.is_open() {
            self.close_locked(&mut guard, false)
        } else {
            self.open_locked(&mut guard)
        }
    }

    fn open_locked(&self, guard: &mut DropdownInner) -> EventResult {
        if self.is_open.swap(true, Ordering::SeqCst) {
            return EventResult::Ignored;
        }
        guard.events.push(DropdownEvent::Open);
        if guard.config.auto_scroll
            && let Some(row) = guard.first_selected_row()
        {
            guard.events.push(DropdownEvent::ScrollTo(row));
        }
        log::debug!("[dropdown] {} opened", self.id);
        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    fn close_locked(&self, guard: &mut DropdownInner, clear_search: bool) -> EventResult {
        if clear_search && !guard.search.is_empty() {
            guard.search.clear();
            guard.refilter();
            self.dirty.store(true, Ordering::SeqCst);
        }
        if !self.is_open.swap(false, Ordering::SeqCst) {
            return EventResult::Ignored;
        }
        guard.events.push(DropdownEvent::Close);
        log::debug!("[dropdown] {} closed", self.id);
        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Get the current search text.
    pub fn search_text(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.search.clone())
            .unwrap_or_default()
    }

    /// Set the search text and refilter.
    ///
    /// Ignored unless the dropdown is searchable.
    pub fn set_search_text(&self, text: impl Into<String>) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if !guard.config.searchable {
            return EventResult::Ignored;
        }
        let text = text.into();
        if guard.search != text {
            guard.search = text;
            guard.refilter();
            log::trace!(
                "[dropdown] {} search {:?} shows {} rows",
                self.id,
                guard.search,
                guard.display.len()
            );
            self.dirty.store(true, Ordering::SeqCst);
        }
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// The rows to render, in order.
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .display
                    .iter()
                    .map(|&index| {
                        let item = &guard.items[index];
                        DisplayRow {
                            index,
                            item: item.clone(),
                            depth: guard.hierarchy.depth(index),
                            is_root: item.is_root(),
                            is_selected: guard.is_selected(index),
                            is_disabled: item.is_disabled(),
                            is_pressable: check_pressable(item, &guard.config).is_ok(),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The displayed items, in order.
    pub fn display_items(&self) -> Vec<Item> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .display
                    .iter()
                    .map(|&i| guard.items[i].clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of displayed rows.
    pub fn display_len(&self) -> usize {
        self.inner.read().map(|guard| guard.display.len()).unwrap_or(0)
    }

    /// Display rows of root items, for sticky section headers.
    ///
    /// Empty unless `sticky_header` is enabled.
    pub fn sticky_header_indices(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|guard| {
                if !guard.config.sticky_header {
                    return Vec::new();
                }
                guard
                    .display
                    .iter()
                    .enumerate()
                    .filter(|&(_, &i)| guard.items[i].is_root())
                    .map(|(row, _)| row)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Display row of the first selected item.
    pub fn scroll_target(&self) -> Option<usize> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.first_selected_row())
    }

    // -------------------------------------------------------------------------
    // Presses
    // -------------------------------------------------------------------------

    /// Handle a press on display row `row`.
    pub fn press_row(&self, row: usize) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let Some(&index) = guard.display.get(row) else {
            log::trace!("[dropdown] {} press on missing row {}", self.id, row);
            return EventResult::Ignored;
        };
        self.press_locked(&mut guard, index)
    }

    /// Handle a press on `item`, located in the collection by its value.
    ///
    /// An item that is not in the collection is ignored.
    pub fn press_item(&self, item: &Item) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let found = item
            .value
            .as_ref()
            .and_then(|value| find_by_value(&guard.items, value))
            .map(|(index, _)| index);
        match found {
            Some(index) => self.press_locked(&mut guard, index),
            None => {
                log::debug!(
                    "[dropdown] {} press on {:?} ignored: {:?}",
                    self.id,
                    item.label,
                    IgnoreReason::Unknown
                );
                EventResult::Ignored
            }
        }
    }

    fn press_locked(&self, guard: &mut DropdownInner, index: usize) -> EventResult {
        let item = guard.items[index].without_selected();

        let action = match resolve_press(&item, &guard.value, &guard.config) {
            PressDecision::Apply(action) => action,
            PressDecision::Ignored(reason) => {
                log::debug!(
                    "[dropdown] {} press on {:?} ignored: {:?}",
                    self.id,
                    item.label,
                    reason
                );
                return EventResult::Ignored;
            }
        };

        let next = reduce(&guard.value, &action, guard.config.limits());

        match guard.mode() {
            SelectionMode::Single => {
                if next != guard.value {
                    guard.value = next.clone();
                    guard.events.push(DropdownEvent::ChangeValue(next));
                }
                log::debug!("[dropdown] {} selected {:?}", self.id, item.label);
                guard.events.push(DropdownEvent::SelectItem(item));
                if guard.config.close_after_selecting {
                    self.close_locked(guard, true);
                }
            }
            SelectionMode::Multi => {
                if next == guard.value {
                    log::debug!(
                        "[dropdown] {} toggle of {:?} refused by limits",
                        self.id,
                        item.label
                    );
                    return EventResult::Ignored;
                }
                let selected = next.contains(action.value());
                guard.local.set_selected(action.value(), selected);
                guard.value = next.clone();
                log::debug!(
                    "[dropdown] {} toggled {:?} to {}",
                    self.id,
                    item.label,
                    selected
                );
                guard.events.push(DropdownEvent::ChangeValue(next));
                let items = guard.local.selected_items();
                guard.events.push(DropdownEvent::SelectItems(items));
            }
        }

        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Drain queued events.
    pub fn take_events(&self) -> Vec<DropdownEvent> {
        self.inner
            .write()
            .map(|mut guard| std::mem::take(&mut guard.events))
            .unwrap_or_default()
    }

    /// Drain queued events into `listener`, in order.
    pub fn dispatch_events(&self, listener: &mut impl DropdownListener) {
        for event in self.take_events() {
            listener.handle(&event);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the dropdown state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Dropdown {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            is_open: Arc::clone(&self.is_open),
        }
    }
}
