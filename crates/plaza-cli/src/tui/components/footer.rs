use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::Component;
use crate::tui::app::{AppState, Focus};

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let hints = match state.focus {
            Focus::Feed => " j/k posts · tab write · q quit",
            Focus::Draft => " type to write · enter publish · tab comments · esc back",
            Focus::Comments => " j/k select · l like · d delete · tab back · q quit",
        };

        let footer_widget =
            Paragraph::new(Line::styled(hints, Style::default().fg(Color::DarkGray)));

        f.render_widget(footer_widget, area);
    }
}
