use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::{AppState, Focus};

/// Draft text field plus the submit hint or validation message.
///
/// The hint renders dimmed while the draft is empty, mirroring the disabled
/// submit button; a failed submit swaps it for the validation message.
pub(crate) struct CommentFormComponent;

impl Component for CommentFormComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let thread = state.thread();
        let focused = state.focus == Focus::Draft;

        let border_style = if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" leave your feedback ")
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let draft_line = if thread.draft().is_empty() && !focused {
            Line::styled("Write a comment...", Style::default().fg(Color::DarkGray))
        } else {
            let mut spans = vec![Span::raw(thread.draft().to_string())];
            if focused {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            }
            Line::from(spans)
        };

        let status_line = match thread.validation() {
            Some(message) => Line::styled(message, Style::default().fg(Color::Red)),
            None if thread.can_submit() => Line::styled(
                "[enter] publish",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Line::styled(
                "[enter] publish",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ),
        };

        f.render_widget(Paragraph::new(vec![draft_line, status_line]), inner);
    }
}
