//! UI utilities shared by the dock, overlay and page components.

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in terminal cells, saturated to `u16`.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Inserts `gap` spaces between characters to imitate letter tracking.
pub fn letter_spaced(text: &str, gap: usize) -> String {
    let separator = " ".repeat(gap);
    let mut spaced = String::with_capacity(text.len() * (gap + 1));
    for (index, ch) in text.chars().enumerate() {
        if index > 0 {
            spaced.push_str(&separator);
        }
        spaced.push(ch);
    }
    spaced
}

/// Rect of `width` cells centered horizontally in `area` on row `y`.
pub fn centered_row(area: Rect, y: u16, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, y, width, 1)
}

/// Finds which of `item_areas` contains the mouse position, if the position
/// falls inside `container` at all.
///
/// Areas are paired with the item index they belong to, so callers can skip
/// items that were clipped during layout.
pub fn find_target_index_by_mouse_position(container: &Rect, item_areas: &[(usize, Rect)], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    item_areas
        .iter()
        .find(|(_, area)| area.contains(position))
        .map(|(index, _)| *index)
}
