//! The dropdown item entity.

use serde::Deserialize;
use serde::Serialize;

use crate::error::DropdownError;
use crate::value::Value;

/// An entry in a dropdown list.
///
/// Items without a `parent` are roots (category headers when the list is
/// hierarchical). Items with a `parent` are children of the item whose
/// `value` equals that key.
///
/// An item with no `value` is tolerated: it is displayed, but it is never
/// matched by a lookup and never selected.
///
/// # Example
///
/// ```
/// use dropdown::Item;
///
/// let items = vec![
///     Item::new("Fruit", "fruit"),
///     Item::new("Apple", "apple").parent("fruit"),
///     Item::new("Banana", "banana").parent("fruit").disabled(true),
/// ];
/// assert!(items[0].is_root());
/// assert!(!items[1].is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    /// Display text, also used for search matching.
    pub label: String,
    /// Identifying value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Value of the parent item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Value>,
    /// Explicit selectable override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectable: Option<bool>,
    /// Whether presses on this item are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Selection mirror flag, only set on items handed out by a multi-select
    /// dropdown's local state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

impl Item {
    /// Create an item with a label and a value.
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Create an item that has a label but no value.
    pub fn unvalued(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the parent key.
    pub fn parent(mut self, parent: impl Into<Value>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the explicit selectable flag.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = Some(selectable);
        self
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Returns `true` if the item has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` if the item is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    /// Returns `true` if this item's value equals `value`.
    ///
    /// Always `false` for items without a value.
    pub fn has_value(&self, value: &Value) -> bool {
        self.value.as_ref() == Some(value)
    }

    /// Returns `true` if this item's parent key equals `key`.
    pub fn has_parent(&self, key: &Value) -> bool {
        self.parent.as_ref() == Some(key)
    }

    /// A copy of this item with the `selected` flag stripped.
    pub fn without_selected(&self) -> Self {
        Self {
            selected: None,
            ..self.clone()
        }
    }
}

impl<S1, S2> From<(S1, S2)> for Item
where
    S1: Into<String>,
    S2: Into<Value>,
{
    fn from((label, value): (S1, S2)) -> Self {
        Item::new(label, value)
    }
}

/// Find the first item carrying `value`.
pub fn find_by_value<'a>(items: &'a [Item], value: &Value) -> Option<(usize, &'a Item)> {
    items.iter().enumerate().find(|(_, item)| item.has_value(value))
}

/// Parse an item list from a JSON array.
///
/// Missing `value` fields are accepted and produce unmatchable items.
pub fn items_from_json(json: &str) -> Result<Vec<Item>, DropdownError> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    log::debug!("[dropdown] parsed {} items from json", items.len());
    Ok(items)
}
