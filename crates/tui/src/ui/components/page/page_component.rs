use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::dock::layout::{DOCK_HEIGHT, DOCK_TOP};
use crate::ui::theme::roles::ThemeRoles;
use crate::ui::theme::theme_helpers::mix_rgb;

/// Full-bleed page behind the dock.
#[derive(Debug, Default)]
pub struct PageComponent;

impl PageComponent {
    fn paint_gradient(frame: &mut Frame, area: Rect, roles: &ThemeRoles) {
        let last_row = area.height.saturating_sub(1).max(1);
        let buffer = frame.buffer_mut();
        for offset in 0..area.height {
            let color = mix_rgb(roles.background, roles.surface_muted, f32::from(offset) / f32::from(last_row));
            buffer.set_style(Rect::new(area.x, area.y + offset, area.width, 1), Style::default().bg(color));
        }
    }
}

impl Component for PageComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let roles = app.ctx.theme.roles().clone();
        Self::paint_gradient(frame, area, &roles);

        let layout = self.get_preferred_layout(app, area);
        let title_area = layout[0];
        if title_area.height > 0 {
            let title_row = title_area.y + title_area.height / 2;
            let fg = mix_rgb(roles.background, roles.text, app.page.title_opacity(app.frame_time));
            let title = Paragraph::new(Span::styled(
                app.page.title.clone(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(title, Rect::new(title_area.x, title_row, title_area.width, 1));
        }

        let location = Line::from(vec![
            Span::styled("location ", app.ctx.theme.text_muted_style()),
            Span::styled(app.page.location.clone(), app.ctx.theme.text_secondary_style()),
        ]);
        frame.render_widget(Paragraph::new(location).alignment(Alignment::Center), layout[1]);
    }

    /// Title region below the dock, then the location row. The bottom row is
    /// left for the hint bar.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(DOCK_TOP + DOCK_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area)
        .iter()
        .skip(1)
        .take(2)
        .copied()
        .collect()
    }
}
