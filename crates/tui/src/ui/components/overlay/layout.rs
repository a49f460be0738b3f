//! Geometry of the overlay link list.
//!
//! Entries that do not fit between the dock and the footer are clipped: they
//! get no rect, so they are neither drawn, clickable nor focusable.

use menudock_types::{MenuItem, index_label};
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::components::dock::layout::{DOCK_HEIGHT, DOCK_TOP};
use crate::ui::utils::{centered_row, display_width, letter_spaced};

/// Cells between the index and the label.
pub const INDEX_GAP: u16 = 3;
/// Horizontal padding of the list's bounding box.
const LIST_PADDING: u16 = 2;
/// Rows kept free for the location line and the hint bar.
const FOOTER_ROWS: u16 = 2;

/// Label text for an entry; hovered entries are letter-spaced.
pub fn entry_label(item: &MenuItem, hovered: bool) -> String {
    let label = item.label.to_uppercase();
    if hovered { letter_spaced(&label, 1) } else { label }
}

fn entry_width(index: usize, item: &MenuItem, hovered: bool) -> u16 {
    display_width(&index_label(index))
        .saturating_add(INDEX_GAP)
        .saturating_add(display_width(&entry_label(item, hovered)))
}

/// Computed rects for the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayLayout {
    /// Bounding box of the list; clicks inside it never reach the backdrop.
    pub nav: Rect,
    /// Entry rects keyed by item index; each covers index and label.
    pub entries: Vec<(usize, Rect)>,
}

impl OverlayLayout {
    /// Centers the entries below the dock, one blank row apart. Entries that
    /// do not fit vertically are left out.
    pub fn compute(screen: Rect, items: &[MenuItem], hovered: Option<usize>) -> Self {
        let top = screen.y + DOCK_TOP + DOCK_HEIGHT + 1;
        let bottom = screen.bottom().saturating_sub(FOOTER_ROWS);
        if items.is_empty() || top >= bottom {
            return Self::default();
        }
        let available = bottom - top;
        let fitting = usize::from(available.div_ceil(2)).min(items.len());
        if fitting < items.len() {
            debug!(fitting, total = items.len(), rows = available, "overlay entries clipped");
        }
        let height = (fitting as u16) * 2 - 1;
        let first_row = top + (available - height) / 2;

        let entries: Vec<(usize, Rect)> = items
            .iter()
            .take(fitting)
            .enumerate()
            .map(|(index, item)| {
                let width = entry_width(index, item, hovered == Some(index));
                (index, centered_row(screen, first_row + (index as u16) * 2, width))
            })
            .collect();

        let left = entries.iter().map(|(_, rect)| rect.x).min().unwrap_or(screen.x);
        let right = entries.iter().map(|(_, rect)| rect.right()).max().unwrap_or(screen.x);
        let nav_left = left.saturating_sub(LIST_PADDING).max(screen.x);
        let nav_right = right.saturating_add(LIST_PADDING).min(screen.right());
        let nav = Rect::new(nav_left, first_row, nav_right - nav_left, height);

        Self { nav, entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("#about", "About"),
            MenuItem::new("#work", "Work"),
            MenuItem::new("#contact", "Contact"),
        ]
    }

    #[test]
    fn entries_are_one_blank_row_apart() {
        let layout = OverlayLayout::compute(Rect::new(0, 0, 60, 24), &items(), None);
        let rows: Vec<u16> = layout.entries.iter().map(|(_, rect)| rect.y).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1] - rows[0], 2);
        assert_eq!(rows[2] - rows[1], 2);
        assert!(rows[0] > DOCK_TOP + DOCK_HEIGHT);
    }

    #[test]
    fn entry_covers_index_and_label() {
        let layout = OverlayLayout::compute(Rect::new(0, 0, 60, 24), &items(), None);
        let (_, about) = layout.entries[0];
        // "01" + 3 + "ABOUT"
        assert_eq!(about.width, 10);
        assert_eq!(about.x, 25);
    }

    #[test]
    fn hovered_entry_widens() {
        let plain = OverlayLayout::compute(Rect::new(0, 0, 60, 24), &items(), None);
        let hovered = OverlayLayout::compute(Rect::new(0, 0, 60, 24), &items(), Some(0));
        assert_eq!(hovered.entries[0].1.width, plain.entries[0].1.width + 4);
        assert_eq!(hovered.entries[1], plain.entries[1]);
    }

    #[test]
    fn nav_box_contains_every_entry() {
        let layout = OverlayLayout::compute(Rect::new(0, 0, 60, 24), &items(), None);
        for (_, rect) in &layout.entries {
            assert!(layout.nav.contains(rect.as_position()));
            assert!(rect.right() <= layout.nav.right());
        }
    }

    #[test]
    fn short_screens_drop_entries_that_do_not_fit() {
        let layout = OverlayLayout::compute(Rect::new(0, 0, 60, 10), &items(), None);
        // rows 5..8 hold two entries
        assert_eq!(layout.entries.len(), 2);
        assert!(OverlayLayout::compute(Rect::new(0, 0, 60, 6), &items(), None).entries.is_empty());
        assert_eq!(OverlayLayout::compute(Rect::new(0, 0, 60, 24), &[], None), OverlayLayout::default());
    }

    #[test]
    fn oversized_label_stays_inside_the_screen() {
        let items = vec![MenuItem::new("#long", "x".repeat(33_000)), MenuItem::new("#b", "B")];
        let screen = Rect::new(0, 0, 60, 24);
        let layout = OverlayLayout::compute(screen, &items, Some(0));
        assert_eq!(layout.entries.len(), 2);
        assert_eq!(layout.entries[0].1.width, 60);
        assert!(layout.nav.right() <= screen.right());
    }

    #[test]
    fn entry_labels_are_uppercase() {
        let item = MenuItem::new("#work", "Work");
        assert_eq!(entry_label(&item, false), "WORK");
        assert_eq!(entry_label(&item, true), "W O R K");
    }
}
