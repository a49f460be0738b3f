use std::time::{Duration, Instant};

use menudock_types::{DockTrigger, MenuItem, MenuState, default_menu_items, split_menu_items};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::debug;

use super::layout::{DockSizing, collapsed_width, expanded_width};
use crate::ui::animation::{Pulse, WidthTransition};

/// State for the dock bar.
///
/// Owns the single open/closed flag of the menu, the width tween driven by it,
/// and rat-focus flags for the toggle, the brand and each link. Link flags and
/// hit areas are keyed by the item's index in `items`.
#[derive(Debug)]
pub struct DockState {
    menu: MenuState,
    pub items: Vec<MenuItem>,
    pub brand: String,
    pub sizing: DockSizing,
    width: WidthTransition,
    pulse: Pulse,
    /// Width transitions requested so far; logged on every state change.
    transition_requests: usize,
    /// Focus flag for the dock container in the global focus tree.
    pub container_focus: FocusFlag,
    pub toggle_focus: FocusFlag,
    pub brand_focus: FocusFlag,
    /// One flag per item; kept in sync with `items` length.
    pub link_focus_flags: Vec<FocusFlag>,
    /// Link currently under the mouse pointer.
    pub hovered_link: Option<usize>,
    /// Last rendered bar; used for mouse containment and focus.
    pub last_area: Rect,
    pub toggle_area: Rect,
    pub brand_area: Rect,
    /// Links drawn in the last frame, keyed by item index.
    pub link_areas: Vec<(usize, Rect)>,
}

impl DockState {
    /// Creates a closed dock. `None` falls back to [`default_menu_items`];
    /// an empty list is valid and leaves the link groups empty.
    pub fn new(
        items: Option<Vec<MenuItem>>,
        brand: impl Into<String>,
        sizing: DockSizing,
        transition: Duration,
        now: Instant,
    ) -> Self {
        let items = items.unwrap_or_else(default_menu_items);
        let link_focus_flags = (0..items.len()).map(|index| FocusFlag::named(&format!("dock.link.{index}"))).collect();
        Self {
            menu: MenuState::Closed,
            items,
            brand: brand.into(),
            sizing,
            width: WidthTransition::new(transition),
            pulse: Pulse::start(now),
            transition_requests: 0,
            container_focus: FocusFlag::named("dock"),
            toggle_focus: FocusFlag::named("dock.toggle"),
            brand_focus: FocusFlag::named("dock.brand"),
            link_focus_flags,
            hovered_link: None,
            last_area: Rect::default(),
            toggle_area: Rect::default(),
            brand_area: Rect::default(),
            link_areas: Vec::new(),
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Feeds a trigger through the menu state machine.
    ///
    /// Returns `true` when the state changed. Each change issues exactly one
    /// width transition request; triggers that leave the state untouched do
    /// not restart the tween.
    pub fn apply(&mut self, trigger: DockTrigger, now: Instant) -> bool {
        let next = self.menu.apply(trigger);
        if next == self.menu {
            debug!(?trigger, state = ?self.menu, "dock trigger ignored");
            return false;
        }
        self.menu = next;
        self.width.retarget(next.is_open(), now);
        self.transition_requests += 1;
        if !next.is_open() {
            self.link_areas.clear();
            self.hovered_link = None;
        }
        debug!(?trigger, state = ?next, transitions = self.transition_requests, "dock state changed");
        true
    }

    /// Number of width transitions requested so far. Equals the number of
    /// state changes, which makes stray tween restarts visible in the logs.
    pub fn transition_requests(&self) -> usize {
        self.transition_requests
    }

    pub fn toggle_glyph(&self) -> &'static str {
        if self.is_open() { "✕" } else { "☰" }
    }

    /// Accessible name of the toggle for the current state.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_open() { "Close menu" } else { "Open menu" }
    }

    /// Width of the bar at `now` for a viewport `viewport_width` columns wide.
    pub fn current_width(&self, viewport_width: u16, now: Instant) -> u16 {
        let collapsed = collapsed_width(&self.brand, viewport_width);
        let expanded = expanded_width(&self.brand, viewport_width, self.sizing);
        self.width.width(collapsed, expanded, now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.width.in_progress(now)
    }

    pub fn pulse_level(&self, now: Instant) -> f32 {
        self.pulse.level(now)
    }

    pub fn split_items(&self) -> (&[MenuItem], &[MenuItem]) {
        split_menu_items(&self.items)
    }

    pub fn focused_link(&self) -> Option<usize> {
        self.link_focus_flags.iter().position(|flag| flag.get())
    }

    fn is_link_drawn(&self, index: usize) -> bool {
        self.link_areas.iter().any(|(drawn, _)| *drawn == index)
    }
}

impl HasFocus for DockState {
    /// Tab order follows the bar: toggle, left links, brand, right links.
    /// Only links drawn in the last frame take part.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.toggle_focus);
        let (left, _) = self.split_items();
        for (index, flag) in self.link_focus_flags.iter().enumerate().take(left.len()) {
            if self.is_link_drawn(index) {
                builder.leaf_widget(flag);
            }
        }
        builder.leaf_widget(&self.brand_focus);
        for (index, flag) in self.link_focus_flags.iter().enumerate().skip(left.len()) {
            if self.is_link_drawn(index) {
                builder.leaf_widget(flag);
            }
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZING: DockSizing = DockSizing {
        expanded_percent: 85,
        max_width: 100,
    };
    const TRANSITION: Duration = Duration::from_millis(600);

    fn dock(now: Instant) -> DockState {
        DockState::new(None, "DEMO", SIZING, TRANSITION, now)
    }

    #[test]
    fn starts_closed_with_hamburger() {
        let now = Instant::now();
        let state = dock(now);
        assert!(!state.is_open());
        assert_eq!(state.toggle_glyph(), "☰");
        assert_eq!(state.toggle_label(), "Open menu");
        assert_eq!(state.link_focus_flags.len(), 3);
    }

    #[test]
    fn empty_list_is_not_a_fault() {
        let state = DockState::new(Some(Vec::new()), "DEMO", SIZING, TRANSITION, Instant::now());
        assert!(state.items.is_empty());
        assert!(state.link_focus_flags.is_empty());
    }

    #[test]
    fn toggle_flips_glyph_immediately() {
        let now = Instant::now();
        let mut state = dock(now);
        assert!(state.apply(DockTrigger::Toggle, now));
        assert_eq!(state.toggle_glyph(), "✕");
        assert_eq!(state.toggle_label(), "Close menu");
        // glyph does not wait for the tween
        assert!(state.is_animating(now + Duration::from_millis(10)));
    }

    #[test]
    fn one_transition_per_state_change() {
        let now = Instant::now();
        let mut state = dock(now);
        assert!(!state.apply(DockTrigger::LinkSelected, now));
        assert!(!state.apply(DockTrigger::BackdropClicked, now));
        assert_eq!(state.transition_requests(), 0);

        state.apply(DockTrigger::Toggle, now);
        state.apply(DockTrigger::LinkSelected, now);
        assert!(!state.apply(DockTrigger::BackdropClicked, now));
        assert_eq!(state.transition_requests(), 2);
        assert!(!state.is_open());
    }

    #[test]
    fn width_settles_on_both_bounds() {
        let start = Instant::now();
        let mut state = dock(start);
        assert_eq!(state.current_width(80, start), 25);

        state.apply(DockTrigger::Toggle, start);
        let opened = start + TRANSITION + Duration::from_millis(50);
        assert_eq!(state.current_width(80, opened), 68);
        assert_eq!(state.current_width(200, opened), 100);

        state.apply(DockTrigger::Toggle, opened);
        let closed = opened + TRANSITION + Duration::from_millis(50);
        assert_eq!(state.current_width(80, closed), 25);
    }

    #[test]
    fn rapid_double_toggle_ends_closed_without_jump() {
        let start = Instant::now();
        let mut state = dock(start);
        state.apply(DockTrigger::Toggle, start);
        let second = start + Duration::from_millis(150);
        state.apply(DockTrigger::Toggle, second);

        assert!(!state.is_open());
        let width = state.current_width(80, second);
        assert!(width > 25 && width < 68, "width jumped to {width}");
        let settled = second + TRANSITION + Duration::from_millis(50);
        assert_eq!(state.current_width(80, settled), 25);
    }

    #[test]
    fn closing_forgets_drawn_links() {
        let now = Instant::now();
        let mut state = dock(now);
        state.apply(DockTrigger::Toggle, now);
        state.link_areas = vec![(0, Rect::new(5, 2, 5, 1))];
        state.hovered_link = Some(0);
        state.apply(DockTrigger::Toggle, now);
        assert!(state.link_areas.is_empty());
        assert_eq!(state.hovered_link, None);
    }
}
