//! Pure value updates.
//!
//! The toggle controller decides *what* a press means and emits a
//! [`ValueAction`]; [`reduce`] computes the next external value from the
//! current one. The reducer never mutates its input, so a caller holding its
//! own state can apply the same actions without going through a
//! [`Dropdown`](crate::Dropdown).

use crate::config::SelectionLimits;
use crate::selection::DropdownValue;
use crate::value::Value;

/// An update to the external value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueAction {
    /// Replace the single value.
    Select(Value),
    /// Add a value to the set.
    ToggleAdd(Value),
    /// Remove a value from the set.
    ToggleRemove(Value),
}

impl ValueAction {
    /// The value the action is about.
    pub fn value(&self) -> &Value {
        match self {
            ValueAction::Select(v) | ValueAction::ToggleAdd(v) | ValueAction::ToggleRemove(v) => v,
        }
    }
}

/// Compute the next external value.
///
/// - `Select` always yields a single value.
/// - `ToggleAdd` appends unless the value is already present or the set has
///   reached `limits.max`.
/// - `ToggleRemove` removes unless the value is absent or the set is already
///   at or below `limits.min`.
///
/// Set results are deduplicated. A refused toggle returns the current set.
pub fn reduce(current: &DropdownValue, action: &ValueAction, limits: SelectionLimits) -> DropdownValue {
    match action {
        ValueAction::Select(value) => DropdownValue::Single(Some(value.clone())),
        ValueAction::ToggleAdd(value) => {
            let mut set = current.values();
            if !set.contains(value) && limits.allows_addition(set.len()) {
                set.push(value.clone());
            }
            DropdownValue::Multiple(set)
        }
        ValueAction::ToggleRemove(value) => {
            let mut set = current.values();
            if let Some(index) = set.iter().position(|v| v == value)
                && limits.allows_removal(set.len())
            {
                set.remove(index);
            }
            DropdownValue::Multiple(set)
        }
    }
}
