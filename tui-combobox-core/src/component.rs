//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI component that renders from props and emits actions
///
/// Components follow these rules:
/// 1. Props contain all read-only data needed for rendering
/// 2. `handle_event` returns actions, never mutates container state
/// 3. `render` is a pure function of props plus internal UI state such as the
///    scroll offset or the last rendered area
///
/// For combobox items the container owns selection and search. A component
/// only turns input into actions, and the host forwards them to the item or
/// the container.
///
/// # Example
///
/// ```ignore
/// use tui_combobox::{Component, EventKind, Frame, Rect};
///
/// struct Hint;
///
/// struct HintProps<'a> {
///     text: &'a str,
/// }
///
/// impl Component<()> for Hint {
///     type Props<'a> = HintProps<'a>;
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         frame.render_widget(Paragraph::new(props.text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any `IntoIterator<Item = A>`: `None`, `Some(action)`, or a
    /// `Vec`. The default handles nothing.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
