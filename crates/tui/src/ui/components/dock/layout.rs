//! Geometry of the dock.
//!
//! The dock is a three-row pill anchored one row below the top edge and
//! centered horizontally. On its content row, from left to right: the toggle,
//! the left link group, the brand (centered over the whole bar), the right
//! link group and the status dot.

use menudock_types::MenuItem;
use ratatui::layout::Rect;

use crate::ui::utils::{display_width, letter_spaced};

pub const DOCK_TOP: u16 = 1;
pub const DOCK_HEIGHT: u16 = 3;
pub const TOGGLE_WIDTH: u16 = 3;
pub const DOT_WIDTH: u16 = 3;
/// Gap between the side controls and the brand.
pub const SECTION_GAP: u16 = 4;
/// Gap between adjacent links.
pub const LINK_GAP: u16 = 2;
/// Border plus inner padding on each side.
const EDGE: u16 = 2;
/// Below this width the bar cannot hold its two side controls.
pub const MIN_DOCK_WIDTH: u16 = EDGE * 2 + TOGGLE_WIDTH + DOT_WIDTH;

/// Sizing knobs for the expanded dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockSizing {
    pub expanded_percent: u16,
    pub max_width: u16,
}

/// Brand text as rendered (letter-spaced).
pub fn brand_text(brand: &str) -> String {
    letter_spaced(brand, 1)
}

/// Link text as rendered inside the dock.
pub fn inline_label(label: &str) -> String {
    label.to_uppercase()
}

/// Intrinsic ("auto") width of the collapsed dock, clamped to the viewport.
pub fn collapsed_width(brand: &str, viewport_width: u16) -> u16 {
    let intrinsic = (MIN_DOCK_WIDTH + SECTION_GAP * 2).saturating_add(display_width(&brand_text(brand)));
    intrinsic.min(viewport_width)
}

/// Expanded width: a share of the viewport, capped at `max_width`, never
/// narrower than the collapsed dock.
pub fn expanded_width(brand: &str, viewport_width: u16, sizing: DockSizing) -> u16 {
    let share = (u32::from(viewport_width) * u32::from(sizing.expanded_percent) / 100) as u16;
    let collapsed = collapsed_width(brand, viewport_width);
    share.min(sizing.max_width).max(collapsed).min(viewport_width)
}

/// Computed rects for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockLayout {
    pub area: Rect,
    pub toggle: Rect,
    pub brand: Rect,
    pub dot: Rect,
    /// Drawn links keyed by their index in the full item list.
    pub links: Vec<(usize, Rect)>,
}

impl DockLayout {
    /// Lays the dock out inside `screen` at `width` columns.
    ///
    /// Links are only placed when `show_links` is set. Links that do not fit
    /// their group are clipped rather than wrapped. Returns `None` when the
    /// screen cannot hold the bar at all.
    pub fn compute(screen: Rect, width: u16, brand: &str, items: (&[MenuItem], &[MenuItem]), show_links: bool) -> Option<Self> {
        if screen.height < DOCK_HEIGHT {
            return None;
        }
        let width = width.min(screen.width);
        if width < MIN_DOCK_WIDTH {
            return None;
        }

        let top = if screen.height >= DOCK_TOP + DOCK_HEIGHT { DOCK_TOP } else { 0 };
        let area = Rect::new(screen.x + (screen.width - width) / 2, screen.y + top, width, DOCK_HEIGHT);
        let row = area.y + 1;

        let toggle = Rect::new(area.x + EDGE, row, TOGGLE_WIDTH, 1);
        let dot = Rect::new(area.right() - EDGE - DOT_WIDTH, row, DOT_WIDTH, 1);

        let brand_width = display_width(&brand_text(brand)).min(width - MIN_DOCK_WIDTH);
        let brand = Rect::new(area.x + (width - brand_width) / 2, row, brand_width, 1);

        let mut links = Vec::new();
        if show_links {
            let (left, right) = items;
            let left_start = toggle.right() + LINK_GAP;
            let left_end = brand.x.saturating_sub(LINK_GAP);
            place_left(&mut links, left, 0, left_start, left_end, row);

            let right_start = brand.right() + LINK_GAP;
            let right_end = dot.x.saturating_sub(LINK_GAP);
            place_right(&mut links, right, left.len(), right_start, right_end, row);
        }

        Some(Self {
            area,
            toggle,
            brand,
            dot,
            links,
        })
    }
}

fn label_widths(items: &[MenuItem]) -> Vec<u16> {
    items.iter().map(|item| display_width(&inline_label(&item.label))).collect()
}

fn place_sequence(links: &mut Vec<(usize, Rect)>, widths: &[u16], first_index: usize, mut cursor: u16, end: u16, row: u16) {
    for (offset, width) in widths.iter().copied().enumerate() {
        if cursor.saturating_add(width) > end {
            break;
        }
        links.push((first_index + offset, Rect::new(cursor, row, width, 1)));
        cursor = cursor.saturating_add(width).saturating_add(LINK_GAP);
    }
}

fn place_left(links: &mut Vec<(usize, Rect)>, items: &[MenuItem], first_index: usize, start: u16, end: u16, row: u16) {
    if start >= end {
        return;
    }
    place_sequence(links, &label_widths(items), first_index, start, end, row);
}

/// Right group hugs the dot; when it overflows it starts at the group's left
/// edge and clips at the end instead.
fn place_right(links: &mut Vec<(usize, Rect)>, items: &[MenuItem], first_index: usize, start: u16, end: u16, row: u16) {
    if start >= end || items.is_empty() {
        return;
    }
    let widths = label_widths(items);
    let gaps = u16::try_from(widths.len() - 1).unwrap_or(u16::MAX).saturating_mul(LINK_GAP);
    let total = widths.iter().copied().fold(gaps, u16::saturating_add);
    let cursor = end.saturating_sub(total).max(start);
    place_sequence(links, &widths, first_index, cursor, end, row);
}
