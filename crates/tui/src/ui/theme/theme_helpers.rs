use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::Theme;
use crate::ui::theme::roles::ThemeRoles;

/// Pill-shaped container for the dock: rounded borders on the dock surface.
pub fn pill_block<T: Theme + ?Sized>(theme: &T, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme))
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let dr = (r as f32 * f).round().clamp(0.0, 255.0) as u8;
            let dg = (g as f32 * f).round().clamp(0.0, 255.0) as u8;
            let db = (b as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(dr, dg, db)
        }
        other => other,
    }
}

/// Linear blend between two colors; `t = 0.0` yields `from`, `t = 1.0` yields `to`.
///
/// Non-RGB colors cannot be blended and snap to whichever end is closer.
pub fn mix_rgb(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(channel(r0, r1), channel(g0, g1), channel(b0, b1))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Style for the status dot at the given pulse level (1.0 = fully lit).
pub fn status_dot_style<T: Theme + ?Sized>(theme: &T, level: f32) -> Style {
    let ThemeRoles { surface, success, .. } = *theme.roles();
    let style = Style::default().fg(mix_rgb(surface, success, level));
    if level < 0.75 && !matches!(success, Color::Rgb(..)) {
        return style.add_modifier(Modifier::DIM);
    }
    style
}

/// Style for inline and overlay links.
pub fn link_style<T: Theme + ?Sized>(theme: &T, focused: bool, hovered: bool) -> Style {
    if focused {
        return theme.selection_style().add_modifier(Modifier::BOLD);
    }
    if hovered {
        return theme.text_primary_style().add_modifier(Modifier::BOLD);
    }
    theme.text_secondary_style()
}

/// Builds `key description` hint pairs for the hint bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
