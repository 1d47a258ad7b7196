//! Dropdown configuration types.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::selection::SelectionMode;

/// Default prefix for the multi-select header label.
pub const DEFAULT_MULTIPLE_TEXT: &str = "Selected Items Count:";

/// Per-dropdown configuration.
///
/// Every field has a default, so partial JSON documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Allow several values to be selected at once.
    pub multiple: bool,

    /// Enable the search field.
    pub searchable: bool,

    /// Minimum number of selected values in multi-select mode.
    /// `None` or `Some(0)` means no minimum.
    pub min: Option<usize>,

    /// Maximum number of selected values in multi-select mode.
    /// `None` or `Some(0)` means no maximum.
    pub max: Option<usize>,

    /// Close the list after a single-select press.
    pub close_after_selecting: bool,

    /// Allow root items (categories) to be selected.
    /// Roots marked `selectable: true` are always selectable.
    pub category_selectable: bool,

    /// Request a scroll to the selected row when the list opens.
    pub auto_scroll: bool,

    /// Expose root row indices for sticky section headers.
    pub sticky_header: bool,

    /// Make the control inert: open/close toggles and item presses are
    /// ignored.
    pub disabled: bool,

    /// Header text when nothing is selected.
    pub placeholder: String,

    /// Prefix of the multi-select header label, followed by the count.
    pub multiple_text: String,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            searchable: false,
            min: None,
            max: None,
            close_after_selecting: true,
            category_selectable: true,
            auto_scroll: true,
            sticky_header: false,
            disabled: false,
            placeholder: String::new(),
            multiple_text: DEFAULT_MULTIPLE_TEXT.to_string(),
        }
    }
}

impl DropdownConfig {
    /// Create a single-select config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to multi-select mode.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Enable the search field.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Set the minimum selection count.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum selection count.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Keep the list open after a single-select press.
    pub fn keep_open(mut self) -> Self {
        self.close_after_selecting = false;
        self
    }

    /// Treat roots as non-selectable section headers.
    pub fn categories_not_selectable(mut self) -> Self {
        self.category_selectable = false;
        self
    }

    /// Disable scroll requests on open.
    pub fn no_auto_scroll(mut self) -> Self {
        self.auto_scroll = false;
        self
    }

    /// Expose sticky header indices.
    pub fn sticky_header(mut self) -> Self {
        self.sticky_header = true;
        self
    }

    /// Disable the control.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the multi-select header prefix.
    pub fn multiple_text(mut self, text: impl Into<String>) -> Self {
        self.multiple_text = text.into();
        self
    }

    /// Selection mode implied by `multiple`.
    pub fn mode(&self) -> SelectionMode {
        if self.multiple {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }

    /// The effective selection-count limits.
    pub fn limits(&self) -> SelectionLimits {
        SelectionLimits {
            min: self.min.filter(|&n| n > 0),
            max: self.max.filter(|&n| n > 0),
        }
    }

    /// Check the configuration for contradictions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = self.limits();
        if let (Some(min), Some(max)) = (limits.min, limits.max)
            && min > max
        {
            return Err(ConfigError::LimitsInverted { min, max });
        }
        Ok(())
    }
}

/// Selection-count limits applied on multi-select toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionLimits {
    /// Removal is refused while the set size is at or below this.
    pub min: Option<usize>,
    /// Addition is refused while the set size is at or above this.
    pub max: Option<usize>,
}

impl SelectionLimits {
    /// No limits.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if a set of `len` values may lose one.
    pub fn allows_removal(&self, len: usize) -> bool {
        self.min.is_none_or(|min| len > min)
    }

    /// Returns `true` if a set of `len` values may gain one.
    pub fn allows_addition(&self, len: usize) -> bool {
        self.max.is_none_or(|max| len < max)
    }
}
