//! Full-screen overlay menu for narrow viewports.
//!
//! Shown while the dock is open and the viewport is narrower than the
//! breakpoint: a dimmed backdrop with a centered, numbered list of links.
//! Clicking the bare backdrop closes the menu; clicks inside the list never
//! reach it.

pub mod layout;
mod overlay_component;
mod state;

pub use overlay_component::OverlayComponent;
pub use state::OverlayState;
