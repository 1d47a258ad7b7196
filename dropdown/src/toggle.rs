//! Press handling: turns a pressed item into a value action.

use crate::config::DropdownConfig;
use crate::item::Item;
use crate::reducer::ValueAction;
use crate::selection::{DropdownValue, SelectionMode};

/// Why a press was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The whole control is disabled.
    ControlDisabled,
    /// The item is disabled.
    Disabled,
    /// The item is explicitly marked `selectable: false`.
    NotSelectable,
    /// The item is a root and categories are not selectable.
    Category,
    /// The item has no value to select.
    NoValue,
    /// The item is not part of the current collection.
    Unknown,
}

/// Outcome of resolving a press.
#[derive(Debug, Clone, PartialEq)]
pub enum PressDecision {
    /// No state change, no event.
    Ignored(IgnoreReason),
    /// Apply this action to the external value.
    Apply(ValueAction),
}

/// Check whether `item` accepts presses under `config`.
pub fn check_pressable(item: &Item, config: &DropdownConfig) -> Result<(), IgnoreReason> {
    if config.disabled {
        return Err(IgnoreReason::ControlDisabled);
    }
    if item.is_disabled() {
        return Err(IgnoreReason::Disabled);
    }
    if item.selectable == Some(false) {
        return Err(IgnoreReason::NotSelectable);
    }
    if item.is_root() && !config.category_selectable && item.selectable != Some(true) {
        return Err(IgnoreReason::Category);
    }
    if item.value.is_none() {
        return Err(IgnoreReason::NoValue);
    }
    Ok(())
}

/// Decide what a press on `item` does to `current`.
///
/// Single mode always selects. Multi mode removes members and adds
/// non-members; the limits are applied later by the reducer.
pub fn resolve_press(item: &Item, current: &DropdownValue, config: &DropdownConfig) -> PressDecision {
    if let Err(reason) = check_pressable(item, config) {
        return PressDecision::Ignored(reason);
    }
    let Some(value) = item.value.clone() else {
        return PressDecision::Ignored(IgnoreReason::NoValue);
    };

    let action = match config.mode() {
        SelectionMode::Single => ValueAction::Select(value),
        SelectionMode::Multi if current.contains(&value) => ValueAction::ToggleRemove(value),
        SelectionMode::Multi => ValueAction::ToggleAdd(value),
    };
    PressDecision::Apply(action)
}
