//! Shared types for the menudock workspace.
//!
//! The dock's whole data model lives here: menu items, the open/closed state
//! machine and the messages/effects exchanged between the runtime and the UI
//! components.

mod menu;

pub use menu::{DockTrigger, MenuItem, MenuState, Presentation, Viewport, default_menu_items, index_label, split_menu_items};

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (animations)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects produced by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Follow a link; the href is used verbatim.
    Navigate(String),
    /// Leave the application.
    Quit,
}
