//! Theme styling module for the TUI UI layer.
//!
//! Defines the color palettes (Dracula, Nord and an ANSI 256-color fallback),
//! semantic theme roles, and helper builders for the dock's widgets. Prefer
//! these helpers over hard-coding colors.

pub mod ansi256;
pub mod catalog;
pub mod dracula;
pub mod loader;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use dracula::DraculaTheme;
pub use loader::{LoadedTheme, load};
pub use nord::NordTheme;
pub use roles::Theme;
