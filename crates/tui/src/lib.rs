//! # MenuDock TUI
//!
//! An animated navigation dock for the terminal. A pill-shaped bar sits at the
//! top of the screen; its toggle expands the bar to reveal the menu links on
//! wide terminals, or opens a full-screen overlay menu on narrow ones.
//!
//! ## Architecture
//!
//! The TUI follows a component-based architecture: the dock, the overlay and
//! the host page each implement the `Component` trait, keep their state on
//! `App`, and report side effects (navigation, quit) back to the runtime.

mod app;
mod ui;

use anyhow::Result;
use menudock_util::DockConfig;

/// Runs the dock until the user quits.
///
/// Sets up the terminal, runs the event loop and restores the terminal on the
/// way out, including when the loop fails.
///
/// # Errors
///
/// Terminal setup or teardown failures, and draw failures inside the loop.
pub async fn run(config: DockConfig) -> Result<()> {
    ui::runtime::run_app(config).await
}
