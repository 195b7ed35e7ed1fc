use chrono::Utc;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem},
};

use super::Component;
use super::avatar::avatar_span;
use crate::tui::app::{AppState, Focus};
use plaza_types::time_ago;

// Commenters are anonymous in the data model; every entry gets the same
// placeholder identity, as on the original page.
const COMMENTER: &str = "Visitor";

pub(crate) struct CommentListComponent;

impl Component for CommentListComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let now = Utc::now();
        let focused = state.focus == Focus::Comments;

        let items: Vec<ListItem> = state
            .thread()
            .comments()
            .iter()
            .map(|comment| {
                let header = Line::from(vec![
                    avatar_span(COMMENTER, false),
                    Span::raw(" "),
                    Span::styled(COMMENTER, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {}", time_ago(comment.posted_at, now)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                let body = Line::from(comment.text.clone());
                let actions = Line::styled(
                    format!("♥ {}  [l] like  [d] delete", comment.likes),
                    Style::default().fg(Color::DarkGray),
                );
                ListItem::new(Text::from(vec![header, body, actions, Line::default()]))
            })
            .collect();

        let highlight_style = if focused {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .highlight_style(highlight_style)
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut state.comment_list_state);
    }
}
