use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::AppState;
use super::components::{Component, FooterComponent, HeaderComponent, PostComponent, SidebarComponent};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    HeaderComponent.render(f, main_chunks[0], state);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(main_chunks[1]);

    SidebarComponent.render(f, body_chunks[0], state);
    PostComponent.render(f, body_chunks[1], state);

    FooterComponent.render(f, main_chunks[2], state);
}
