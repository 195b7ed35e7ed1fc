use plaza_types::{ContentLine, Post, format_published_at};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{CommentFormComponent, CommentListComponent, Component};
use super::avatar::avatar_span;
use crate::tui::app::AppState;

/// The selected post: author block, localized publish date, content lines
/// in order, then the comment form and comment list.
pub(crate) struct PostComponent;

impl Component for PostComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let (form_area, list_area) = {
            let post = &state.posts[state.selected_post];
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4),
                    Constraint::Length(content_height(post, area.width) + 1),
                    Constraint::Length(4),
                    Constraint::Min(0),
                ])
                .split(area);

            render_author(f, chunks[0], post, state.selected_post, state.posts.len());
            render_content(f, chunks[1], post);
            (chunks[2], chunks[3])
        };

        CommentFormComponent.render(f, form_area, state);
        CommentListComponent.render(f, list_area, state);
    }
}

fn render_author(f: &mut Frame, area: Rect, post: &Post, position: usize, total: usize) {
    let block = Block::default()
        .borders(Borders::TOP)
        .title(format!(" post {}/{} ", position + 1, total))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            avatar_span(&post.author.name, true),
            Span::raw(" "),
            Span::styled(
                post.author.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(post.author.role.clone(), Style::default().fg(Color::DarkGray)),
        Line::styled(
            format_published_at(post.published_at),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_content(f: &mut Frame, area: Rect, post: &Post) {
    let lines: Vec<Line> = post
        .content
        .iter()
        .filter_map(|line| match line {
            ContentLine::Paragraph(text) => Some(Line::from(text.as_str())),
            ContentLine::Link(target) => Some(Line::styled(
                target.as_str(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            // Unrecognized tags render as nothing
            ContentLine::Unknown => None,
        })
        .collect();

    let content_widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(content_widget, area);
}

/// Rows the content needs at this width once wrapped
fn content_height(post: &Post, width: u16) -> u16 {
    let width = width.max(1) as usize;
    post.content
        .iter()
        .map(|line| match line {
            ContentLine::Paragraph(text) | ContentLine::Link(text) => {
                text.chars().count().max(1).div_ceil(width) as u16
            }
            ContentLine::Unknown => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_types::Author;

    fn post_with(content: Vec<ContentLine>) -> Post {
        Post {
            id: None,
            author: Author {
                name: "a".to_string(),
                avatar_url: "b".to_string(),
                role: "c".to_string(),
            },
            content,
            published_at: "2022-05-03T23:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn content_height_counts_wrapped_rows() {
        let post = post_with(vec![
            ContentLine::Paragraph("x".repeat(25)),
            ContentLine::Link("short".to_string()),
        ]);
        assert_eq!(content_height(&post, 10), 4);
    }

    #[test]
    fn unknown_lines_take_no_rows() {
        let post = post_with(vec![ContentLine::Unknown, ContentLine::Unknown]);
        assert_eq!(content_height(&post, 80), 0);
    }
}
