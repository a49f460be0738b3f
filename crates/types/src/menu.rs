//! Menu data model shared by the dock, the overlay and the host page.

use serde::{Deserialize, Serialize};

/// A single navigation entry.
///
/// `href` is used verbatim as the navigation target: it may be an in-page
/// fragment (`#about`) or a path (`/work`). No validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Navigation target.
    pub href: String,
    /// Display text.
    pub label: String,
}

impl MenuItem {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Items used when the caller does not supply a list.
pub fn default_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("#about", "About"),
        MenuItem::new("#work", "Work"),
        MenuItem::new("#contact", "Contact"),
    ]
}

/// Splits `items` around the brand mark.
///
/// The left group receives `ceil(n / 2)` entries so it is never shorter than
/// the right group.
pub fn split_menu_items(items: &[MenuItem]) -> (&[MenuItem], &[MenuItem]) {
    let mid_point = items.len().div_ceil(2);
    items.split_at(mid_point)
}

/// Two-digit, zero-padded, 1-based label shown before overlay entries.
pub fn index_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Open/closed presentation of the dock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User intents that are allowed to change [`MenuState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockTrigger {
    /// The hamburger/close control was activated.
    Toggle,
    /// A link (inline or overlay) was selected.
    LinkSelected,
    /// The mobile backdrop was clicked.
    BackdropClicked,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Returns the state reached from `self` after `trigger`.
    pub fn apply(self, trigger: DockTrigger) -> MenuState {
        match (self, trigger) {
            (MenuState::Closed, DockTrigger::Toggle) => MenuState::Open,
            (MenuState::Open, _) => MenuState::Closed,
            (MenuState::Closed, DockTrigger::LinkSelected | DockTrigger::BackdropClicked) => MenuState::Closed,
        }
    }
}

/// Which responsive layout applies to the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Inline links inside the dock, no overlay.
    Desktop,
    /// Full-screen overlay, inline links hidden.
    Mobile,
}

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Viewports narrower than `breakpoint` use the mobile presentation.
    pub fn presentation(&self, breakpoint: u16) -> Presentation {
        if self.width < breakpoint {
            Presentation::Mobile
        } else {
            Presentation::Desktop
        }
    }
}
