//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to a store
///
/// Actions represent intents to change container state. They should be:
/// - Clone: Actions may be logged or replayed
/// - Debug: For debugging and logging
///
/// Unlike a multi-threaded runtime, combobox containers live on the UI thread,
/// so actions are not required to be `Send`.
pub trait Action: Clone + Debug + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}
