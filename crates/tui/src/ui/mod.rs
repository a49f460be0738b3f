//! UI rendering module for the TUI application.
//!
//! This module provides the components, the runtime loop, theming, the
//! animation wrappers and small layout utilities.

pub mod animation;
pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
