//! A single combobox option and its selection/search state

use std::fmt::{self, Display};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::container::{ComboboxContainer, ItemRef};
use crate::convert::{display_or_empty, SharedConverter};
use crate::error::Result;
use crate::lifecycle::ItemLifecycle;
use crate::options::{SelectionMode, Typo, ValuePresenter};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies an item's registration with its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{:08x}", self.0)
    }
}

/// Snapshot of an item's flags, used as render input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemState {
    pub selected: bool,
    pub active: bool,
    pub eligible: bool,
    pub disabled: bool,
}

type ClickHandler<T> = Box<dyn FnMut(Option<&T>)>;

/// One option of a combobox
///
/// The item's `selected` flag is always derived from its container; it is
/// never authoritative. `eligible` reflects the container's current search.
/// The three axes (selected, active, eligible) change independently.
///
/// The container link is optional. Every operation that needs it falls back
/// to a safe default when it is absent.
pub struct ComboboxItem<T, C: ComboboxContainer<T>> {
    id: ItemId,
    value: Option<T>,
    text: Option<String>,
    disabled: bool,
    functional: bool,
    selected: bool,
    active: bool,
    eligible: bool,
    needs_render: bool,
    container: Option<Rc<C>>,
    on_click: Option<ClickHandler<T>>,
}

impl<T, C: ComboboxContainer<T>> ComboboxItem<T, C> {
    /// Create an unlinked item holding `value`
    pub fn new(value: impl Into<Option<T>>) -> Self {
        Self {
            id: ItemId::next(),
            value: value.into(),
            text: None,
            disabled: false,
            functional: false,
            selected: false,
            active: false,
            eligible: true,
            needs_render: false,
            container: None,
            on_click: None,
        }
    }

    /// Text shown instead of the converted value
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark as functional: no value semantics, no navigation, no selection
    pub fn functional(mut self, functional: bool) -> Self {
        self.functional = functional;
        self
    }

    /// Callback fired at the end of [`handle_click`](Self::handle_click)
    pub fn on_click<F>(mut self, f: F) -> Self
    where
        F: FnMut(Option<&T>) + 'static,
    {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Link the item to its container
    pub fn with_container(mut self, container: Rc<C>) -> Self {
        self.container = Some(container);
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn container(&self) -> Option<&Rc<C>> {
        self.container.as_ref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    pub fn is_functional(&self) -> bool {
        self.functional
    }

    /// Whether a render was requested and not yet committed
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Borrowed view handed to the container
    pub fn item_ref(&self) -> ItemRef<'_, T> {
        ItemRef {
            id: self.id,
            value: self.value.as_ref(),
            functional: self.functional,
        }
    }

    /// Set the highlighted state and request a render
    pub fn set_active(&mut self, is_active: bool) {
        self.active = is_active;
        self.request_render();
    }

    /// Effective disabled state
    ///
    /// A container-supplied predicate overrides the local flag.
    pub fn disabled_status(&self) -> bool {
        match self.container.as_deref().and_then(|c| c.item_disabled_fn()) {
            Some(is_disabled) => is_disabled(self.value.as_ref()),
            None => self.disabled,
        }
    }

    /// Text style for the container's density
    pub fn typo(&self) -> Typo {
        Typo::for_dense(self.container.as_deref().map(|c| c.dense()))
    }

    /// Whether keyboard navigation may land on this item
    pub fn is_navigable(&self) -> bool {
        self.eligible && !self.functional && !self.disabled_status()
    }

    pub fn state(&self) -> ItemState {
        ItemState {
            selected: self.selected,
            active: self.active,
            eligible: self.eligible,
            disabled: self.disabled_status(),
        }
    }

    fn request_render(&mut self) {
        self.needs_render = true;
    }

    /// Non-empty text override
    fn text_override(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

impl<T, C> ComboboxItem<T, C>
where
    T: Display + PartialEq,
    C: ComboboxContainer<T>,
{
    fn convert_value(&self, converter: Option<SharedConverter<T>>) -> Result<String> {
        match converter {
            Some(converter) => converter.to_display(self.value.as_ref()),
            None => Ok(display_or_empty(self.value.as_ref())),
        }
    }

    /// String shown for this item
    ///
    /// With the `None` presenter the text override is ignored. Otherwise a
    /// non-empty text override wins over the converter.
    pub fn display_string(&self) -> Result<String> {
        let container = self.container.as_deref();
        let converter = container.and_then(|c| c.converter());

        if container.map(|c| c.presenter()) == Some(ValuePresenter::None) {
            return self.convert_value(converter);
        }

        match self.text_override() {
            Some(text) => Ok(text.to_string()),
            None => self.convert_value(converter),
        }
    }

    /// Whether the item passes the container's current search
    ///
    /// Resolution order: custom search predicate, then the text override,
    /// then the converted value. Only editable containers with a non-empty
    /// search string filter at all.
    pub fn compute_eligible(&self) -> Result<bool> {
        let Some(container) = self.container.as_deref() else {
            return Ok(true);
        };
        if !container.editable() {
            return Ok(true);
        }

        let search = container.search_string().unwrap_or_default();
        if search.is_empty() {
            return Ok(true);
        }

        if let Some(search_fn) = container.search_fn() {
            return Ok(search_fn(
                self.value.as_ref(),
                self.text.as_deref(),
                &container.normalized_search_string(),
            ));
        }

        let haystack = match self.text_override() {
            Some(text) => text.to_string(),
            None => self.convert_value(container.converter())?,
        };
        Ok(contains_ignore_case(&haystack, &search))
    }

    /// Store the result of [`compute_eligible`](Self::compute_eligible)
    pub fn check_eligible(&mut self) -> Result<()> {
        self.eligible = self.compute_eligible()?;
        Ok(())
    }

    /// Re-derive `selected` from the container
    pub fn sync_selected(&mut self) {
        let Some(container) = self.container.clone() else {
            return;
        };

        self.selected = match container.selection_mode() {
            SelectionMode::Multi => self
                .value
                .as_ref()
                .is_some_and(|v| container.selected_values().contains(v)),
            SelectionMode::Single => container.value().as_ref() == self.value.as_ref(),
        };
    }

    /// Recompute eligibility and request a render
    pub fn force_render(&mut self) -> Result<()> {
        self.check_eligible()?;
        self.request_render();
        Ok(())
    }

    /// Recompute `selected`, then request a render at the next render boundary
    pub async fn force_update(&mut self) {
        self.sync_selected();
        tokio::task::yield_now().await;
        self.request_render();
    }

    /// Toggle this item through the container, hand focus back, notify
    ///
    /// The toggle is awaited before focus is requested so the container has
    /// settled its selection first.
    pub async fn handle_click(&mut self) {
        if let Some(container) = self.container.clone() {
            let target = !self.selected;
            tracing::trace!(item = %self.id, selected = target, "Requesting toggle");
            container.toggle_option(self.item_ref(), target).await;
            self.request_render();
            container.focus().await;
        }

        if let Some(on_click) = &mut self.on_click {
            on_click(self.value.as_ref());
        }
    }
}

impl<T, C> ItemLifecycle for ComboboxItem<T, C>
where
    T: Display + PartialEq,
    C: ComboboxContainer<T>,
{
    fn on_create(&mut self) -> Result<()> {
        if let Some(container) = self.container.clone() {
            container.add(self.item_ref());
            tracing::debug!(item = %self.id, functional = self.functional, "Item registered");
        }
        self.check_eligible()
    }

    fn on_state_refresh(&mut self) -> Result<bool> {
        // Nothing changes when eligibility can't be computed
        let eligible = self.compute_eligible()?;
        let before = (self.selected, self.eligible);
        self.sync_selected();
        self.eligible = eligible;

        let changed = before != (self.selected, self.eligible);
        if changed {
            self.request_render();
        }
        Ok(changed)
    }

    fn on_render_committed(&mut self, _first_render: bool) {
        self.needs_render = false;
    }
}

impl<T, C: ComboboxContainer<T>> Drop for ComboboxItem<T, C> {
    fn drop(&mut self) {
        let Some(container) = self.container.take() else {
            return;
        };
        // Deregistration is best-effort.
        if let Err(err) = container.remove(self.id) {
            tracing::debug!(item = %self.id, error = %err, "Ignoring deregistration failure");
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
