use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use menudock_types::{DockTrigger, Effect, index_label};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
};

use super::layout::{INDEX_GAP, OverlayLayout, entry_label};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::find_target_index_by_mouse_position;

/// Dimmed backdrop plus the vertical link list.
///
/// Only rendered while [`App::overlay_visible`] holds. The backdrop covers the
/// whole viewport, so the overlay consumes every mouse event that reaches it.
#[derive(Debug, Default)]
pub struct OverlayComponent;

impl Component for OverlayComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if !matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            return Vec::new();
        }
        match app.overlay.focused_entry() {
            Some(index) => {
                let effects = app.select_link(index);
                app.focus.focus(&app.dock.toggle_focus);
                effects
            }
            None => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Option<Vec<Effect>> {
        let position = Position::new(mouse.column, mouse.row);
        let entry = find_target_index_by_mouse_position(&app.overlay.nav_area, &app.overlay.entry_areas, mouse.column, mouse.row);
        let mut effects = Vec::new();
        match mouse.kind {
            MouseEventKind::Moved => {
                app.overlay.hovered = entry;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = entry {
                    effects.extend(app.select_link(index));
                } else if !app.overlay.nav_area.contains(position) {
                    app.dispatch(DockTrigger::BackdropClicked);
                }
            }
            _ => {}
        }
        Some(effects)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        frame.buffer_mut().set_style(area, theme.modal_background_style());

        let layout = OverlayLayout::compute(area, &app.dock.items, app.overlay.hovered);
        for (index, rect) in &layout.entries {
            let Some(item) = app.dock.items.get(*index) else {
                continue;
            };
            let hovered = app.overlay.hovered == Some(*index);
            let focused = app.overlay.entry_focus_flags.get(*index).is_some_and(|flag| flag.get());
            let label_style = if focused {
                theme.selection_style()
            } else if hovered {
                theme.accent_emphasis_style()
            } else {
                theme.text_primary_style()
            };
            let number = index_label(*index);
            let gap = " ".repeat(usize::from(INDEX_GAP));
            let line = Line::from(vec![
                Span::styled(number, theme.text_muted_style()),
                Span::raw(gap),
                Span::styled(entry_label(item, hovered), label_style),
            ]);
            frame.render_widget(line, *rect);
        }

        app.overlay.nav_area = layout.nav;
        app.overlay.entry_areas = layout.entries;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Click outside", " Close menu "), (" Enter", " Open link ")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme;
    use crossterm::event::KeyModifiers;
    use menudock_types::{MenuItem, Viewport};
    use menudock_util::DockConfig;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn open_mobile_app() -> App {
        let mut app = App::new(&DockConfig::default(), theme::load(None), Viewport::new(60, 24), Instant::now());
        app.dispatch(DockTrigger::Toggle);
        app
    }

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(app.viewport.width, app.viewport.height)).unwrap();
        terminal.draw(|frame| OverlayComponent.render(frame, frame.area(), app)).unwrap();
        terminal
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click(x: u16, y: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    #[test]
    fn lists_every_item_with_index() {
        let mut app = open_mobile_app();
        let terminal = draw(&mut app);
        let buffer = terminal.backend().buffer();
        let lines: Vec<String> = app
            .overlay
            .entry_areas
            .iter()
            .map(|(_, rect)| (rect.x..rect.right()).map(|x| buffer[(x, rect.y)].symbol()).collect())
            .collect();
        assert_eq!(lines, ["01   ABOUT", "02   WORK", "03   SERVICES", "04   CONTACT"]);
    }

    #[test]
    fn backdrop_click_closes() {
        let mut app = open_mobile_app();
        draw(&mut app);
        let effects = OverlayComponent.handle_mouse_events(&mut app, click(0, 20));
        assert_eq!(effects, Some(vec![]));
        assert!(!app.dock.is_open());
    }

    #[test]
    fn click_inside_list_gap_is_contained() {
        let mut app = open_mobile_app();
        draw(&mut app);
        let (_, first) = app.overlay.entry_areas[0];
        // blank row between the first two entries
        let effects = OverlayComponent.handle_mouse_events(&mut app, click(first.x, first.y + 1));
        assert_eq!(effects, Some(vec![]));
        assert!(app.dock.is_open());
    }

    #[test]
    fn entry_click_navigates_and_closes() {
        let mut app = open_mobile_app();
        draw(&mut app);
        let (_, contact) = app.overlay.entry_areas[3];
        let effects = OverlayComponent.handle_mouse_events(&mut app, click(contact.x, contact.y));
        assert_eq!(effects, Some(vec![Effect::Navigate("#contact".into())]));
        assert!(!app.dock.is_open());
        assert!(app.overlay.entry_areas.is_empty());
    }

    #[test]
    fn index_digits_are_part_of_the_hit_area() {
        let mut app = open_mobile_app();
        draw(&mut app);
        let (_, work) = app.overlay.entry_areas[1];
        let effects = OverlayComponent.handle_mouse_events(&mut app, click(work.x, work.y));
        assert_eq!(effects, Some(vec![Effect::Navigate("#work".into())]));
    }

    #[test]
    fn hover_spaces_out_the_label() {
        let mut app = open_mobile_app();
        draw(&mut app);
        let (_, about) = app.overlay.entry_areas[0];
        OverlayComponent.handle_mouse_events(&mut app, mouse(MouseEventKind::Moved, about.x + 6, about.y));
        assert_eq!(app.overlay.hovered, Some(0));
        draw(&mut app);
        let (_, widened) = app.overlay.entry_areas[0];
        assert_eq!(widened.width, about.width + 4);
    }

    #[test]
    fn empty_list_renders_only_backdrop() {
        let config = DockConfig {
            items: Some(Vec::new()),
            ..DockConfig::default()
        };
        let mut app = App::new(&config, theme::load(None), Viewport::new(60, 24), Instant::now());
        app.dispatch(DockTrigger::Toggle);
        draw(&mut app);
        assert!(app.overlay.entry_areas.is_empty());
        OverlayComponent.handle_mouse_events(&mut app, click(30, 12));
        assert!(!app.dock.is_open());
    }

    #[test]
    fn duplicate_labels_stay_distinct_entries() {
        let config = DockConfig {
            items: Some(vec![MenuItem::new("#a", "Same"), MenuItem::new("#b", "Same")]),
            ..DockConfig::default()
        };
        let mut app = App::new(&config, theme::load(None), Viewport::new(60, 24), Instant::now());
        app.dispatch(DockTrigger::Toggle);
        let terminal = draw(&mut app);
        let buffer = terminal.backend().buffer();
        let lines: Vec<String> = app
            .overlay
            .entry_areas
            .iter()
            .map(|(_, rect)| (rect.x..rect.right()).map(|x| buffer[(x, rect.y)].symbol()).collect())
            .collect();
        assert_eq!(lines, ["01   SAME", "02   SAME"]);

        let areas = app.overlay.entry_areas.clone();
        for ((_, rect), href) in areas.iter().zip(["#a", "#b"]) {
            if !app.dock.is_open() {
                app.dispatch(DockTrigger::Toggle);
                draw(&mut app);
            }
            let effects = OverlayComponent.handle_mouse_events(&mut app, click(rect.x, rect.y));
            assert_eq!(effects, Some(vec![Effect::Navigate(href.into())]));
        }
    }
}
