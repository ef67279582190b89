//! Store-backed reference container
//!
//! [`ComboboxStore`] implements [`ComboboxContainer`] on top of the reducer
//! [`Store`](crate::store::Store). Every request from an item becomes a
//! [`ComboboxAction`] that flows through [`LoggingMiddleware`] into
//! [`reducer`], so the whole selection history is observable in the logs.
//!
//! ```ignore
//! let store = Rc::new(ComboboxStore::new(ComboboxConfig::default()));
//! let mut item = ComboboxItem::new("apple").with_container(Rc::clone(&store));
//! item.on_create()?;
//! item.handle_click().await;
//! assert_eq!(store.value(), Some("apple"));
//! ```

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use crate::config::ComboboxConfig;
use crate::container::{ComboboxContainer, ItemRef};
use crate::convert::{Converter, ItemDisabledFn, SearchFn, SharedConverter};
use crate::error::{ComboboxError, Result};
use crate::item::ItemId;
use crate::keymap::NavKeymap;
use crate::options::{Dense, ItemColor, SelectionMode, ValuePresenter};
use crate::store::{LoggingMiddleware, StoreWithMiddleware};
use crate::Action;

/// An item as the container remembers it
#[derive(Debug, Clone, PartialEq)]
pub struct Registration<T> {
    pub id: ItemId,
    pub value: Option<T>,
    pub functional: bool,
}

/// Everything a combobox container owns
#[derive(Debug, Clone)]
pub struct ComboboxState<T> {
    pub mode: SelectionMode,
    pub value: Option<T>,
    pub selected_values: Vec<T>,
    pub search: Option<String>,
    pub editable: bool,
    pub presenter: ValuePresenter,
    pub dense: Dense,
    pub color: ItemColor,
    pub bordered: bool,
    pub items: Vec<Registration<T>>,
    pub focused: bool,
}

impl<T> ComboboxState<T> {
    pub fn from_config(config: &ComboboxConfig) -> Self {
        Self {
            mode: config.selection_mode,
            value: None,
            selected_values: Vec::new(),
            search: None,
            editable: config.editable,
            presenter: config.presenter,
            dense: config.dense,
            color: config.color,
            bordered: config.bordered,
            items: Vec::new(),
            focused: false,
        }
    }

    pub fn is_registered(&self, id: ItemId) -> bool {
        self.items.iter().any(|r| r.id == id)
    }
}

impl<T> Default for ComboboxState<T> {
    fn default() -> Self {
        Self::from_config(&ComboboxConfig::default())
    }
}

/// Requests that mutate container state
#[derive(Debug, Clone, PartialEq)]
pub enum ComboboxAction<T> {
    Register {
        id: ItemId,
        value: Option<T>,
        functional: bool,
    },
    Deregister(ItemId),
    ToggleOption {
        value: Option<T>,
        functional: bool,
        selected: bool,
    },
    SetValue(Option<T>),
    SetSelectedValues(Vec<T>),
    SetSearch(Option<String>),
    SetSelectionMode(SelectionMode),
    Focus,
    Blur,
}

impl<T: Clone + Debug + 'static> Action for ComboboxAction<T> {
    fn name(&self) -> &'static str {
        match self {
            ComboboxAction::Register { .. } => "Register",
            ComboboxAction::Deregister(_) => "Deregister",
            ComboboxAction::ToggleOption { .. } => "ToggleOption",
            ComboboxAction::SetValue(_) => "SetValue",
            ComboboxAction::SetSelectedValues(_) => "SetSelectedValues",
            ComboboxAction::SetSearch(_) => "SetSearch",
            ComboboxAction::SetSelectionMode(_) => "SetSelectionMode",
            ComboboxAction::Focus => "Focus",
            ComboboxAction::Blur => "Blur",
        }
    }
}

/// Reducer for container state
///
/// Returns `true` if items need to refresh.
pub fn reducer<T: Clone + PartialEq>(state: &mut ComboboxState<T>, action: ComboboxAction<T>) -> bool {
    match action {
        ComboboxAction::Register {
            id,
            value,
            functional,
        } => {
            if state.is_registered(id) {
                return false;
            }
            state.items.push(Registration {
                id,
                value,
                functional,
            });
            true
        }

        ComboboxAction::Deregister(id) => {
            let before = state.items.len();
            state.items.retain(|r| r.id != id);
            state.items.len() != before
        }

        // Functional items carry no value
        ComboboxAction::ToggleOption {
            functional: true, ..
        } => false,

        ComboboxAction::ToggleOption {
            value, selected, ..
        } => match state.mode {
            SelectionMode::Single => {
                if selected {
                    let changed = state.value != value;
                    state.value = value;
                    changed
                } else if state.value == value {
                    state.value = None;
                    true
                } else {
                    false
                }
            }
            SelectionMode::Multi => {
                let Some(value) = value else {
                    return false;
                };
                if selected {
                    if state.selected_values.contains(&value) {
                        return false;
                    }
                    state.selected_values.push(value);
                    true
                } else {
                    let before = state.selected_values.len();
                    state.selected_values.retain(|v| *v != value);
                    state.selected_values.len() != before
                }
            }
        },

        ComboboxAction::SetValue(value) => {
            if state.value == value {
                return false;
            }
            state.value = value;
            true
        }

        ComboboxAction::SetSelectedValues(values) => {
            if state.selected_values == values {
                return false;
            }
            state.selected_values = values;
            true
        }

        ComboboxAction::SetSearch(search) => {
            if state.search == search {
                return false;
            }
            state.search = search;
            true
        }

        ComboboxAction::SetSelectionMode(mode) => {
            if state.mode == mode {
                return false;
            }
            match mode {
                SelectionMode::Single => {
                    state.value = state.selected_values.first().cloned();
                    state.selected_values.clear();
                }
                SelectionMode::Multi => {
                    state.selected_values = state.value.take().into_iter().collect();
                }
            }
            state.mode = mode;
            true
        }

        ComboboxAction::Focus => {
            let changed = !state.focused;
            state.focused = true;
            changed
        }

        ComboboxAction::Blur => {
            let changed = state.focused;
            state.focused = false;
            changed
        }
    }
}

type InnerStore<T> = StoreWithMiddleware<ComboboxState<T>, ComboboxAction<T>, LoggingMiddleware>;

/// Reference container: a reducer store plus the pluggable predicates
pub struct ComboboxStore<T: Clone + PartialEq + Debug + 'static> {
    store: RefCell<InnerStore<T>>,
    keymap: NavKeymap,
    converter: Option<SharedConverter<T>>,
    item_disabled_fn: Option<ItemDisabledFn<T>>,
    search_fn: Option<SearchFn<T>>,
}

impl<T: Clone + PartialEq + Debug + 'static> ComboboxStore<T> {
    pub fn new(config: ComboboxConfig) -> Self {
        let state = ComboboxState::from_config(&config);
        Self {
            store: RefCell::new(StoreWithMiddleware::new(
                state,
                reducer::<T>,
                LoggingMiddleware,
            )),
            keymap: config.keymap,
            converter: None,
            item_disabled_fn: None,
            search_fn: None,
        }
    }

    pub fn with_converter(mut self, converter: impl Converter<T> + 'static) -> Self {
        self.converter = Some(Rc::new(converter));
        self
    }

    pub fn with_search_fn<F>(mut self, search_fn: F) -> Self
    where
        F: Fn(Option<&T>, Option<&str>, &str) -> bool + 'static,
    {
        self.search_fn = Some(Rc::new(search_fn));
        self
    }

    pub fn with_item_disabled_fn<F>(mut self, disabled_fn: F) -> Self
    where
        F: Fn(Option<&T>) -> bool + 'static,
    {
        self.item_disabled_fn = Some(Rc::new(disabled_fn));
        self
    }

    /// Dispatch an action; returns `true` if items should refresh
    pub fn dispatch(&self, action: ComboboxAction<T>) -> bool {
        self.store.borrow_mut().dispatch(action)
    }

    /// Read the state without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&ComboboxState<T>) -> R) -> R {
        f(self.store.borrow().state())
    }

    pub fn keymap(&self) -> &NavKeymap {
        &self.keymap
    }

    pub fn is_focused(&self) -> bool {
        self.with_state(|s| s.focused)
    }

    pub fn registered_count(&self) -> usize {
        self.with_state(|s| s.items.len())
    }
}

impl<T: Clone + PartialEq + Debug + 'static> ComboboxContainer<T> for ComboboxStore<T> {
    fn add(&self, item: ItemRef<'_, T>) {
        self.dispatch(ComboboxAction::Register {
            id: item.id,
            value: item.value.cloned(),
            functional: item.functional,
        });
    }

    fn remove(&self, id: ItemId) -> Result<()> {
        if !self.with_state(|s| s.is_registered(id)) {
            return Err(ComboboxError::NotRegistered(id));
        }
        self.dispatch(ComboboxAction::Deregister(id));
        Ok(())
    }

    fn selection_mode(&self) -> SelectionMode {
        self.with_state(|s| s.mode)
    }

    fn value(&self) -> Option<T> {
        self.with_state(|s| s.value.clone())
    }

    fn selected_values(&self) -> Vec<T> {
        self.with_state(|s| s.selected_values.clone())
    }

    fn search_string(&self) -> Option<String> {
        self.with_state(|s| s.search.clone())
    }

    fn editable(&self) -> bool {
        self.with_state(|s| s.editable)
    }

    fn presenter(&self) -> ValuePresenter {
        self.with_state(|s| s.presenter)
    }

    fn converter(&self) -> Option<SharedConverter<T>> {
        self.converter.clone()
    }

    fn item_disabled_fn(&self) -> Option<ItemDisabledFn<T>> {
        self.item_disabled_fn.clone()
    }

    fn search_fn(&self) -> Option<SearchFn<T>> {
        self.search_fn.clone()
    }

    fn dense(&self) -> Dense {
        self.with_state(|s| s.dense)
    }

    fn color(&self) -> ItemColor {
        self.with_state(|s| s.color)
    }

    fn bordered(&self) -> bool {
        self.with_state(|s| s.bordered)
    }

    async fn toggle_option(&self, item: ItemRef<'_, T>, selected: bool) {
        self.dispatch(ComboboxAction::ToggleOption {
            value: item.value.cloned(),
            functional: item.functional,
            selected,
        });
    }

    async fn focus(&self) {
        self.dispatch(ComboboxAction::Focus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(value: &'static str, selected: bool) -> ComboboxAction<&'static str> {
        ComboboxAction::ToggleOption {
            value: Some(value),
            functional: false,
            selected,
        }
    }

    fn multi() -> ComboboxState<&'static str> {
        ComboboxState {
            mode: SelectionMode::Multi,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_toggle_replaces_value() {
        let mut state = ComboboxState::default();

        assert!(reducer(&mut state, toggle("A", true)));
        assert!(reducer(&mut state, toggle("B", true)));
        assert_eq!(state.value, Some("B"));

        // Deselecting something else leaves the value alone
        assert!(!reducer(&mut state, toggle("A", false)));
        assert!(reducer(&mut state, toggle("B", false)));
        assert_eq!(state.value, None);
    }

    #[test]
    fn test_multi_toggle_adds_and_removes() {
        let mut state = multi();

        assert!(reducer(&mut state, toggle("A", true)));
        assert!(reducer(&mut state, toggle("B", true)));
        assert!(!reducer(&mut state, toggle("A", true)));
        assert_eq!(state.selected_values, vec!["A", "B"]);

        assert!(reducer(&mut state, toggle("A", false)));
        assert_eq!(state.selected_values, vec!["B"]);
    }

    #[test]
    fn test_functional_toggle_is_ignored() {
        let mut state = ComboboxState::default();
        let action = ComboboxAction::ToggleOption {
            value: Some("A"),
            functional: true,
            selected: true,
        };

        assert!(!reducer(&mut state, action));
        assert_eq!(state.value, None);
    }

    #[test]
    fn test_set_value_and_blur_report_changes() {
        let mut state = ComboboxState::default();

        assert!(reducer(&mut state, ComboboxAction::SetValue(Some("A"))));
        assert!(!reducer(&mut state, ComboboxAction::SetValue(Some("A"))));
        assert_eq!(state.value, Some("A"));
        assert!(reducer(&mut state, ComboboxAction::SetValue(None)));

        assert!(!reducer(&mut state, ComboboxAction::Blur));
        assert!(reducer(&mut state, ComboboxAction::Focus));
        assert!(reducer(&mut state, ComboboxAction::Blur));
        assert!(!state.focused);
    }

    #[test]
    fn test_register_keeps_functional_flag() {
        let mut state = ComboboxState::default();
        reducer(
            &mut state,
            ComboboxAction::Register {
                id: ItemId(1),
                value: Some("A"),
                functional: false,
            },
        );
        reducer(
            &mut state,
            ComboboxAction::Register {
                id: ItemId(2),
                value: Some("Add new..."),
                functional: true,
            },
        );

        // Registering the same id twice is a no-op
        assert!(!reducer(
            &mut state,
            ComboboxAction::Register {
                id: ItemId(1),
                value: Some("A"),
                functional: false,
            },
        ));
        assert_eq!(state.items.len(), 2);
        assert!(!state.items[0].functional);
        assert!(state.items[1].functional);
    }

    #[test]
    fn test_mode_switch_carries_selection() {
        let mut state = ComboboxState::default();
        reducer(&mut state, toggle("A", true));

        assert!(reducer(
            &mut state,
            ComboboxAction::SetSelectionMode(SelectionMode::Multi)
        ));
        assert_eq!(state.selected_values, vec!["A"]);
        assert_eq!(state.value, None);

        reducer(&mut state, toggle("B", true));
        reducer(
            &mut state,
            ComboboxAction::SetSelectionMode(SelectionMode::Single),
        );
        assert_eq!(state.value, Some("A"));
        assert!(state.selected_values.is_empty());
    }

    #[test]
    fn test_store_remove_unknown_item() {
        let store: ComboboxStore<&'static str> = ComboboxStore::new(ComboboxConfig::default());

        assert!(matches!(
            store.remove(ItemId(9999)),
            Err(ComboboxError::NotRegistered(ItemId(9999)))
        ));
    }

    #[test]
    fn test_store_register_and_remove() {
        let store: ComboboxStore<&'static str> = ComboboxStore::new(ComboboxConfig::default());
        let id = ItemId(7);
        store.add(ItemRef {
            id,
            value: Some(&"A"),
            functional: false,
        });
        assert_eq!(store.registered_count(), 1);

        store.remove(id).unwrap();
        assert_eq!(store.registered_count(), 0);
    }

    #[tokio::test]
    async fn test_store_focus_and_toggle() {
        let store: ComboboxStore<&'static str> = ComboboxStore::new(ComboboxConfig::default());
        let item = ItemRef {
            id: ItemId(1),
            value: Some(&"X"),
            functional: false,
        };

        store.toggle_option(item, true).await;
        store.focus().await;

        assert_eq!(store.value(), Some("X"));
        assert!(store.is_focused());
    }
}
