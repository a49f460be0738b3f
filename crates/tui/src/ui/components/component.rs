//! Component system for the MenuDock TUI.
//!
//! This module defines the Component trait that the dock, the overlay menu and
//! the host page implement. Components keep their state on [`App`] and hold
//! only rendering concerns themselves, reporting side effects back to the
//! runtime as [`Effect`]s.

use crossterm::event::{KeyEvent, MouseEvent};
use menudock_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A trait representing a UI component with its own behavior.
///
/// Components handle localized events, update state on the `App`, and render
/// themselves into a provided `Rect`.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: input reaches components through
///    `handle_key_events()` and `handle_mouse_events()`
/// 2. **Messages**: `handle_message()` processes runtime messages such as ticks
///    and resizes
/// 3. **Rendering**: `render()` draws the component and records the hit areas
///    used by the next round of mouse events
pub(crate) trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events.
    ///
    /// Returns `None` when the event falls outside the component so the caller
    /// may offer it to whatever is drawn underneath. `Some` means the
    /// component consumed the event, even if it produced no effects.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Option<Vec<Effect>> {
        None
    }

    /// Render the component into `rect`.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while the component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Sub-areas the component draws into, in a component-specific order.
    fn get_preferred_layout(&self, _app: &App, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}
