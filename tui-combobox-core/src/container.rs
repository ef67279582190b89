//! Contract between an item and the container that owns selection state
//!
//! The container is the single source of truth for what is selected and what
//! is searched for. Items read through this trait and only ever *request*
//! changes via [`ComboboxContainer::toggle_option`] and
//! [`ComboboxContainer::focus`].

use crate::convert::{ItemDisabledFn, SearchFn, SharedConverter};
use crate::error::Result;
use crate::item::ItemId;
use crate::options::{Dense, ItemColor, SelectionMode, ValuePresenter};

/// Borrowed view of an item, handed to the container on every request
#[derive(Debug)]
pub struct ItemRef<'a, T> {
    pub id: ItemId,
    pub value: Option<&'a T>,
    /// Functional items carry no selectable value
    pub functional: bool,
}

// Manual impls: derives would require `T: Clone`.
impl<T> Clone for ItemRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ItemRef<'_, T> {}

/// Parent of a set of combobox items
///
/// Implementations live on the UI thread and use interior mutability for the
/// request methods. The async methods are suspension points for the host's
/// render cycle, not parallel work.
#[allow(async_fn_in_trait)]
pub trait ComboboxContainer<T> {
    /// Register an item
    fn add(&self, item: ItemRef<'_, T>);

    /// Deregister an item
    fn remove(&self, id: ItemId) -> Result<()>;

    fn selection_mode(&self) -> SelectionMode;

    /// Current value in single-selection mode
    fn value(&self) -> Option<T>;

    /// Current values in multi-selection mode
    fn selected_values(&self) -> Vec<T>;

    /// Raw search string as typed
    fn search_string(&self) -> Option<String>;

    /// Search string passed to custom search predicates
    fn normalized_search_string(&self) -> String {
        self.search_string()
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    /// Whether the container accepts typed search input
    fn editable(&self) -> bool;

    fn presenter(&self) -> ValuePresenter;

    fn converter(&self) -> Option<SharedConverter<T>>;

    fn item_disabled_fn(&self) -> Option<ItemDisabledFn<T>>;

    fn search_fn(&self) -> Option<SearchFn<T>>;

    fn dense(&self) -> Dense;

    fn color(&self) -> ItemColor;

    fn bordered(&self) -> bool;

    /// Ask the container to select or deselect an item
    async fn toggle_option(&self, item: ItemRef<'_, T>, selected: bool);

    /// Ask the container to take focus back
    async fn focus(&self);
}
