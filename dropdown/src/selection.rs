//! Selection values and the multi-select mirror state.

use serde::Deserialize;
use serde::Serialize;

use crate::item::Item;
use crate::value::Value;

/// Selection mode of a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// One value at a time (radio-button style).
    #[default]
    Single,
    /// A set of values (checkbox style).
    Multi,
}

/// The caller-owned selection.
///
/// Deserializes from `null`, a primitive, or an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DropdownValue {
    /// Single-select value, `None` when nothing is selected.
    Single(Option<Value>),
    /// Multi-select values. Duplicates collapse to their first occurrence.
    Multiple(Vec<Value>),
}

impl Default for DropdownValue {
    fn default() -> Self {
        DropdownValue::Single(None)
    }
}

impl DropdownValue {
    /// No single value selected.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single selected value.
    pub fn single(value: impl Into<Value>) -> Self {
        DropdownValue::Single(Some(value.into()))
    }

    /// A set of selected values.
    pub fn multiple<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        DropdownValue::Multiple(values.into_iter().map(Into::into).collect())
    }

    /// Coerce to the shape required by `mode`, deduplicating sets.
    ///
    /// A single value in multi mode becomes a one-element set; a set in
    /// single mode keeps its first element.
    pub fn normalized(&self, mode: SelectionMode) -> Self {
        match (mode, self) {
            (SelectionMode::Single, DropdownValue::Single(v)) => DropdownValue::Single(v.clone()),
            (SelectionMode::Single, DropdownValue::Multiple(vs)) => {
                DropdownValue::Single(vs.first().cloned())
            }
            (SelectionMode::Multi, _) => DropdownValue::Multiple(self.values()),
        }
    }

    /// The single selected value.
    ///
    /// An empty string counts as no value. For a set this is its first member.
    pub fn as_single(&self) -> Option<&Value> {
        match self {
            DropdownValue::Single(v) => v.as_ref().filter(|v| !v.is_blank()),
            DropdownValue::Multiple(vs) => vs.first(),
        }
    }

    /// All selected values as a deduplicated list in first-occurrence order.
    pub fn values(&self) -> Vec<Value> {
        match self {
            DropdownValue::Single(v) => v.iter().cloned().collect(),
            DropdownValue::Multiple(vs) => normalize(vs),
        }
    }

    /// Returns `true` if `value` is selected.
    pub fn contains(&self, value: &Value) -> bool {
        match self {
            DropdownValue::Single(v) => v.as_ref() == Some(value),
            DropdownValue::Multiple(vs) => vs.contains(value),
        }
    }

    /// Number of distinct selected values.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for no value, an empty string, or an empty set.
    pub fn is_null(&self) -> bool {
        match self {
            DropdownValue::Single(_) => self.as_single().is_none(),
            DropdownValue::Multiple(vs) => vs.is_empty(),
        }
    }
}

impl From<Option<Value>> for DropdownValue {
    fn from(v: Option<Value>) -> Self {
        DropdownValue::Single(v)
    }
}

impl From<Vec<Value>> for DropdownValue {
    fn from(v: Vec<Value>) -> Self {
        DropdownValue::Multiple(v)
    }
}

/// Collapse duplicates, keeping the first occurrence of each value.
pub fn normalize(raw: &[Value]) -> Vec<Value> {
    let mut set: Vec<Value> = Vec::with_capacity(raw.len());
    for value in raw {
        if !set.contains(value) {
            set.push(value.clone());
        }
    }
    set
}

/// Position in `display` of the first item whose value equals the selected
/// single value.
pub fn selected_position(items: &[Item], display: &[usize], value: &DropdownValue) -> Option<usize> {
    let selected = value.as_single()?;
    display.iter().position(|&i| items[i].has_value(selected))
}

/// Returns `true` if `item` is selected under `value`.
///
/// Items without a value are never selected.
pub fn is_item_selected(item: &Item, value: &DropdownValue, mode: SelectionMode) -> bool {
    let Some(item_value) = item.value.as_ref() else {
        return false;
    };
    match mode {
        SelectionMode::Single => value.as_single() == Some(item_value),
        SelectionMode::Multi => value.contains(item_value),
    }
}

/// Per-item selected flags mirroring the external value in multi-select mode.
///
/// Rebuilds only read the external value. Toggles write a flag together with
/// the external value, so the two never need reconciling afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalSelection {
    entries: Vec<Item>,
}

impl LocalSelection {
    /// Mirror `items`, flagging those whose value is in `value`.
    pub fn rebuild(items: &[Item], value: &DropdownValue) -> Self {
        let set = value.values();
        let entries = items
            .iter()
            .map(|item| {
                let selected = item.value.as_ref().is_some_and(|v| set.contains(v));
                Item {
                    selected: Some(selected),
                    ..item.clone()
                }
            })
            .collect();
        Self { entries }
    }

    /// Set the flag of every entry carrying `value`. Returns true if a flag
    /// changed.
    pub fn set_selected(&mut self, value: &Value, selected: bool) -> bool {
        let mut changed = false;
        for entry in self.entries.iter_mut().filter(|e| e.has_value(value)) {
            if entry.selected != Some(selected) {
                entry.selected = Some(selected);
                changed = true;
            }
        }
        changed
    }

    /// Check whether the entry carrying `value` is flagged.
    pub fn is_selected(&self, value: &Value) -> bool {
        self.entries
            .iter()
            .any(|e| e.has_value(value) && e.selected == Some(true))
    }

    /// Flagged entries in collection order, with the flag stripped.
    pub fn selected_items(&self) -> Vec<Item> {
        self.entries
            .iter()
            .filter(|e| e.selected == Some(true))
            .map(Item::without_selected)
            .collect()
    }

    /// All mirrored entries with their flags.
    pub fn entries(&self) -> &[Item] {
        &self.entries
    }

    /// Clear the mirror.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
