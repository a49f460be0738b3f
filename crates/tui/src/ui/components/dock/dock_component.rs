use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use menudock_types::{DockTrigger, Effect, Presentation};
use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::Modifier,
    text::Span,
    widgets::{Clear, Paragraph},
};

use super::layout::{DockLayout, brand_text, inline_label};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th};
use crate::ui::utils::find_target_index_by_mouse_position;

/// The dock bar: toggle, brand, link groups and status dot.
///
/// All state lives in [`DockState`](super::DockState) on the `App`; the
/// component only routes input and draws. It consumes every mouse event that
/// lands inside the bar so nothing underneath sees clicks on the dock.
#[derive(Debug, Default)]
pub struct DockComponent;

impl DockComponent {
    /// Activates whichever dock control holds focus.
    ///
    /// With nothing focused, `Space` falls back to the toggle.
    fn activate_focused(app: &mut App, key: KeyCode) -> Vec<Effect> {
        if app.dock.toggle_focus.get() {
            app.dispatch(DockTrigger::Toggle);
            return Vec::new();
        }
        if app.dock.brand_focus.get() {
            return vec![Effect::Navigate("/".to_string())];
        }
        if let Some(index) = app.dock.focused_link() {
            let effects = app.select_link(index);
            app.focus.focus(&app.dock.toggle_focus);
            return effects;
        }
        if key == KeyCode::Char(' ') && app.focus.focused().is_none() {
            app.dispatch(DockTrigger::Toggle);
        }
        Vec::new()
    }
}

impl Component for DockComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Self::activate_focused(app, key.code),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Option<Vec<Effect>> {
        let position = Position::new(mouse.column, mouse.row);
        if !app.dock.last_area.contains(position) {
            app.dock.hovered_link = None;
            return None;
        }

        let link = find_target_index_by_mouse_position(&app.dock.last_area, &app.dock.link_areas, mouse.column, mouse.row);
        let mut effects = Vec::new();
        match mouse.kind {
            MouseEventKind::Moved => {
                app.dock.hovered_link = link;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if app.dock.toggle_area.contains(position) {
                    app.focus.focus(&app.dock.toggle_focus);
                    app.dispatch(DockTrigger::Toggle);
                } else if app.dock.brand_area.contains(position) {
                    app.focus.focus(&app.dock.brand_focus);
                    effects.push(Effect::Navigate("/".to_string()));
                } else if let Some(index) = link {
                    effects.extend(app.select_link(index));
                }
            }
            _ => {}
        }
        Some(effects)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let now = app.frame_time;
        let width = app.dock.current_width(area.width, now);
        let show_links = app.dock.is_open() && app.presentation() == Presentation::Desktop;

        let Some(layout) = DockLayout::compute(area, width, &app.dock.brand, app.dock.split_items(), show_links) else {
            app.dock.last_area = Rect::default();
            app.dock.toggle_area = Rect::default();
            app.dock.brand_area = Rect::default();
            app.dock.link_areas.clear();
            return;
        };

        let theme = &*app.ctx.theme;
        frame.render_widget(Clear, layout.area);
        frame.render_widget(th::pill_block(theme, app.dock.container_focus.get()), layout.area);

        let toggle_style = if app.dock.toggle_focus.get() {
            theme.selection_style()
        } else {
            theme.accent_primary_style()
        };
        frame.render_widget(
            Paragraph::new(app.dock.toggle_glyph()).alignment(Alignment::Center).style(toggle_style),
            layout.toggle,
        );

        let brand_style = if app.dock.brand_focus.get() {
            theme.selection_style()
        } else {
            theme.text_primary_style().add_modifier(Modifier::BOLD)
        };
        frame.render_widget(Span::styled(brand_text(&app.dock.brand), brand_style), layout.brand);

        for (index, rect) in &layout.links {
            let Some(item) = app.dock.items.get(*index) else {
                continue;
            };
            let focused = app.dock.link_focus_flags.get(*index).is_some_and(|flag| flag.get());
            let hovered = app.dock.hovered_link == Some(*index);
            frame.render_widget(Span::styled(inline_label(&item.label), th::link_style(theme, focused, hovered)), *rect);
        }

        let dot_style = th::status_dot_style(theme, app.dock.pulse_level(now));
        frame.render_widget(Paragraph::new("●").alignment(Alignment::Center).style(dot_style), layout.dot);

        app.dock.last_area = layout.area;
        app.dock.toggle_area = layout.toggle;
        app.dock.brand_area = layout.brand;
        app.dock.link_areas = layout.links;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[
                (" Space", if app.dock.is_open() { " Close menu " } else { " Open menu " }),
                (" Tab", " Focus "),
                (" Enter", " Activate "),
            ],
        )
    }
}
