//! Item organization and selection state for dropdown pickers.
//!
//! The crate turns a flat, possibly hierarchical item list into the rows a
//! dropdown displays, filters them by search text, and applies presses to the
//! caller's selection in single- or multi-select mode. Rendering is left to
//! the caller: it reads [`DisplayRow`]s and reports presses, text input and
//! header toggles back to a [`Dropdown`].

pub mod config;
pub mod error;
pub mod events;
pub mod hierarchy;
pub mod item;
pub mod reducer;
pub mod search;
pub mod selection;
pub mod state;
pub mod toggle;
pub mod value;

pub use config::{DropdownConfig, SelectionLimits};
pub use error::{ConfigError, DropdownError};
pub use events::{DropdownEvent, DropdownListener, EventResult};
pub use hierarchy::Hierarchy;
pub use item::{Item, items_from_json};
pub use reducer::{ValueAction, reduce};
pub use selection::{DropdownValue, LocalSelection, SelectionMode};
pub use state::{DisplayRow, Dropdown, DropdownId};
pub use value::Value;

pub mod prelude {
    pub use crate::config::DropdownConfig;
    pub use crate::events::{DropdownEvent, DropdownListener, EventResult};
    pub use crate::item::Item;
    pub use crate::selection::DropdownValue;
    pub use crate::state::{DisplayRow, Dropdown};
    pub use crate::value::Value;
}
