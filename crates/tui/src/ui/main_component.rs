use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use menudock_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::components::{Component, DockComponent, OverlayComponent, PageComponent};
use crate::app::App;
use crate::ui::theme::theme_helpers as th;

/// Root view: stacks the page, the overlay and the dock.
///
/// Drawing goes bottom-up (page, hint bar, overlay, dock) and mouse events
/// go top-down (dock, overlay, page), so a click on the dock is never
/// mistaken for a backdrop click.
#[derive(Debug, Default)]
pub struct MainView {
    page_view: PageComponent,
    overlay_view: OverlayComponent,
    dock_view: DockComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') => return vec![Effect::Quit],
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        if app.overlay_visible() && app.overlay.container_focus.get() {
            return self.overlay_view.handle_key_events(app, key);
        }
        self.dock_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Option<Vec<Effect>> {
        if let Some(effects) = self.dock_view.handle_mouse_events(app, mouse) {
            return Some(effects);
        }
        if app.overlay_visible() {
            return self.overlay_view.handle_mouse_events(app, mouse);
        }
        self.page_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.page_view.render(frame, area, app);

        let layout = self.get_preferred_layout(app, area);
        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints, layout[0]);

        if app.overlay_visible() {
            self.overlay_view.render(frame, area, app);
        }
        self.dock_view.render(frame, area, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];
        hint_spans.extend(self.dock_view.get_hint_spans(app));
        if app.overlay_visible() {
            hint_spans.extend(self.overlay_view.get_hint_spans(app));
        }
        hint_spans.extend(th::build_hint_spans(&*app.ctx.theme, &[(" q", " Quit ")]));
        hint_spans
    }

    /// The hint bar occupies the bottom row.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        let row = area.bottom().saturating_sub(1).max(area.y);
        vec![Rect::new(area.x, row, area.width, area.height.min(1))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use menudock_types::{DockTrigger, Viewport};
    use menudock_util::DockConfig;
    use rat_focus::FocusBuilder;
    use ratatui::{Terminal, backend::TestBackend};
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    fn app(width: u16) -> App {
        App::new(&DockConfig::default(), theme::load(None), Viewport::new(width, 24), Instant::now())
    }

    fn draw(app: &mut App, view: &mut MainView) -> Terminal<TestBackend> {
        app.focus = Rc::new(FocusBuilder::rebuild_for(app, None));
        let mut terminal = Terminal::new(TestBackend::new(app.viewport.width, app.viewport.height)).unwrap();
        terminal.draw(|frame| view.render(frame, frame.area(), app)).unwrap();
        terminal
    }

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn hint_row(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let y = buffer.area.height - 1;
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    #[test]
    fn toggle_click_with_overlay_visible_closes_instead_of_backdrop() {
        let mut app = app(60);
        let mut view = MainView::new();
        app.dispatch(DockTrigger::Toggle);
        draw(&mut app, &mut view);
        let requests = app.dock.transition_requests();

        let toggle = app.dock.toggle_area;
        let effects = view.handle_mouse_events(&mut app, click(toggle.x + 1, toggle.y));
        assert_eq!(effects, Some(vec![]));
        assert!(!app.dock.is_open());
        assert_eq!(app.dock.transition_requests(), requests + 1);
    }

    #[test]
    fn overlay_only_on_narrow_viewports() {
        let mut desktop = app(100);
        let mut view = MainView::new();
        desktop.dispatch(DockTrigger::Toggle);
        draw(&mut desktop, &mut view);
        assert!(desktop.overlay.entry_areas.is_empty());
        assert!(!desktop.dock.link_areas.is_empty() || desktop.dock.is_animating(desktop.frame_time));

        let mut mobile = app(60);
        mobile.dispatch(DockTrigger::Toggle);
        draw(&mut mobile, &mut view);
        assert_eq!(mobile.overlay.entry_areas.len(), 4);
        assert!(mobile.dock.link_areas.is_empty());
    }

    #[test]
    fn backdrop_click_then_page_clicks_do_nothing() {
        let mut app = app(60);
        let mut view = MainView::new();
        app.dispatch(DockTrigger::Toggle);
        draw(&mut app, &mut view);

        view.handle_mouse_events(&mut app, click(1, 20));
        assert!(!app.dock.is_open());
        draw(&mut app, &mut view);
        assert_eq!(view.handle_mouse_events(&mut app, click(1, 20)), None);
        assert!(!app.dock.is_open());
    }

    #[test]
    fn quit_key_and_hint_label() {
        let mut app = app(100);
        let mut view = MainView::new();
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(view.handle_key_events(&mut app, q), vec![Effect::Quit]);

        let terminal = draw(&mut app, &mut view);
        assert!(hint_row(&terminal).contains("Open menu"));
        app.dispatch(DockTrigger::Toggle);
        let terminal = draw(&mut app, &mut view);
        assert!(hint_row(&terminal).contains("Close menu"));
    }

    #[test]
    fn keyboard_reaches_links_after_opening() {
        let mut app = app(100);
        let mut view = MainView::new();
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        app.focus.focus(&app.dock.toggle_focus);
        view.handle_key_events(&mut app, space);
        assert!(app.dock.is_open());

        app.frame_time += Duration::from_millis(700);
        draw(&mut app, &mut view);
        draw(&mut app, &mut view);
        app.focus.focus(&app.dock.toggle_focus);
        view.handle_key_events(&mut app, tab);
        assert_eq!(app.dock.focused_link(), Some(0));

        let effects = view.handle_key_events(&mut app, enter);
        assert_eq!(effects, vec![Effect::Navigate("#about".into())]);
        assert!(!app.dock.is_open());
    }
}
