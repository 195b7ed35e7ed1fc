use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use super::avatar::avatar_span;
use crate::tui::app::AppState;

const PROFILE_NAME: &str = "Laís Batista";
const PROFILE_ROLE: &str = "Web Developer";

/// Static profile card: cover strip, avatar, name, role, edit hint
pub(crate) struct SidebarComponent;

impl Component for SidebarComponent {
    fn render(&self, f: &mut Frame, area: Rect, _state: &mut AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let cover_width = inner.width as usize;
        let lines = vec![
            Line::styled("▒".repeat(cover_width), Style::default().fg(Color::Green)),
            Line::default(),
            Line::from(avatar_span(PROFILE_NAME, true)),
            Line::styled(
                PROFILE_NAME,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(PROFILE_ROLE, Style::default().fg(Color::DarkGray)),
            Line::default(),
            Line::styled("✎ Edit your profile", Style::default().fg(Color::DarkGray)),
        ];

        f.render_widget(Paragraph::new(lines), inner);
    }
}
