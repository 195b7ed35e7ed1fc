use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod avatar;
pub(crate) mod comment_form;
pub(crate) mod comment_list;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod post;
pub(crate) mod sidebar;

pub(crate) use comment_form::CommentFormComponent;
pub(crate) use comment_list::CommentListComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use post::PostComponent;
pub(crate) use sidebar::SidebarComponent;
