//! Lifecycle hooks a host binding calls on an item

use crate::error::Result;

/// Points in a host's render cycle where an item needs to run
///
/// A host binding (a ratatui loop, a test, another framework) calls these at
/// the matching moment. The item logic itself never depends on the host's
/// hook names.
pub trait ItemLifecycle {
    /// The item was created and linked to its container
    fn on_create(&mut self) -> Result<()>;

    /// Container state may have changed
    ///
    /// Recomputes derived state and returns `true` if anything changed and a
    /// render is needed.
    fn on_state_refresh(&mut self) -> Result<bool>;

    /// A render containing this item was committed to the screen
    fn on_render_committed(&mut self, first_render: bool);
}
