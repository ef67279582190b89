//! Core types for tui-combobox
//!
//! A combobox is split in two collaborators:
//!
//! - **Item** ([`ComboboxItem`]): one option. Owns its local flags (selected,
//!   active, eligible) and derives them from the container.
//! - **Container** ([`ComboboxContainer`]): owns the value(s), the search
//!   string, the converter and the selection mode. [`ComboboxStore`] is a
//!   reducer-backed implementation.
//!
//! Items read container state and send requests back; the container is the
//! only thing that mutates selection. Everything runs on the UI thread.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use tui_combobox_core::prelude::*;
//!
//! let store = Rc::new(ComboboxStore::new(ComboboxConfig::default()));
//! let mut item = ComboboxItem::new("apple")
//!     .text("Apple")
//!     .with_container(Rc::clone(&store));
//! item.on_create()?;
//!
//! item.handle_click().await;
//! item.on_state_refresh()?;
//! assert!(item.is_selected());
//! ```

pub mod action;
pub mod component;
pub mod config;
pub mod container;
pub mod convert;
pub mod error;
pub mod event;
pub mod item;
pub mod keymap;
pub mod lifecycle;
pub mod navigation;
pub mod options;
pub mod state;
pub mod store;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use config::ComboboxConfig;
pub use container::{ComboboxContainer, ItemRef};
pub use convert::{
    display_or_empty, Converter, DisplayConverter, ItemDisabledFn, SearchFn, SharedConverter,
};
pub use error::{ComboboxError, Result};
pub use event::EventKind;
pub use item::{ComboboxItem, ItemId, ItemState};
pub use keymap::{parse_key_string, NavCommand, NavKeymap};
pub use lifecycle::ItemLifecycle;
pub use navigation::{navigable_flags, next_navigable};
pub use options::{Dense, ItemColor, SelectionMode, Typo, ValuePresenter};
pub use state::{reducer, ComboboxAction, ComboboxState, ComboboxStore, Registration};
pub use store::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::config::ComboboxConfig;
    pub use crate::container::{ComboboxContainer, ItemRef};
    pub use crate::convert::{Converter, DisplayConverter};
    pub use crate::error::{ComboboxError, Result};
    pub use crate::event::EventKind;
    pub use crate::item::{ComboboxItem, ItemId, ItemState};
    pub use crate::keymap::{NavCommand, NavKeymap};
    pub use crate::lifecycle::ItemLifecycle;
    pub use crate::navigation::{navigable_flags, next_navigable};
    pub use crate::options::{Dense, ItemColor, SelectionMode, Typo, ValuePresenter};
    pub use crate::state::{ComboboxAction, ComboboxState, ComboboxStore};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
