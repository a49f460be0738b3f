//! Dock bar component.
//!
//! A pill-shaped bar pinned to the top of the screen. Clicking the toggle (or
//! pressing Space) flips the menu between closed and open; the bar animates
//! between its collapsed and expanded widths and, on wide viewports, reveals
//! the menu links on both sides of the centered brand.
//!
//! - `layout`: pure geometry for the bar and its link groups
//! - `state`: open/closed state, width tween, focus flags, hit areas
//! - `dock_component`: input routing and rendering

mod dock_component;
pub mod layout;
mod state;

pub use dock_component::DockComponent;
pub use layout::DockSizing;
pub use state::DockState;
