use crossterm::event::{KeyCode, KeyEvent};
use plaza_types::{CommentThread, Post};
use ratatui::widgets::ListState;
use uuid::Uuid;

/// Every post starts with the same seeded comment, like the original feed
pub(crate) const SEED_COMMENT: &str = "Post muito bacana, hein?!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Feed,
    Draft,
    Comments,
}

/// Owned UI state: the immutable post list plus one comment thread per post.
///
/// Mutated only from `handle_key`, one event at a time, then redrawn.
pub(crate) struct AppState {
    pub posts: Vec<Post>,
    pub threads: Vec<CommentThread>,
    pub selected_post: usize,
    pub comment_list_state: ListState,
    pub focus: Focus,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(posts: Vec<Post>) -> Self {
        let threads = posts
            .iter()
            .map(|_| CommentThread::seeded(SEED_COMMENT))
            .collect();

        Self {
            posts,
            threads,
            selected_post: 0,
            comment_list_state: ListState::default(),
            focus: Focus::Feed,
            should_quit: false,
        }
    }

    pub fn thread(&self) -> &CommentThread {
        &self.threads[self.selected_post]
    }

    fn thread_mut(&mut self) -> &mut CommentThread {
        &mut self.threads[self.selected_post]
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Feed => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Down | KeyCode::Char('j') => self.select_next_post(),
                KeyCode::Up | KeyCode::Char('k') => self.select_previous_post(),
                KeyCode::Tab | KeyCode::Enter => self.focus = Focus::Draft,
                _ => {}
            },
            Focus::Draft => match key.code {
                // A failed submit leaves the validation message on the
                // thread; the form renders it until the next keystroke
                KeyCode::Enter => {
                    let _ = self.thread_mut().submit();
                }
                KeyCode::Backspace => self.thread_mut().pop_draft_char(),
                KeyCode::Tab => self.focus_comments(),
                KeyCode::Esc => self.focus = Focus::Feed,
                KeyCode::Char(c) => self.thread_mut().push_draft_char(c),
                _ => {}
            },
            Focus::Comments => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Feed,
                KeyCode::Down | KeyCode::Char('j') => self.select_next_comment(),
                KeyCode::Up | KeyCode::Char('k') => self.select_previous_comment(),
                KeyCode::Char('d') | KeyCode::Delete => self.delete_selected_comment(),
                KeyCode::Char('l') | KeyCode::Char(' ') => self.like_selected_comment(),
                _ => {}
            },
        }
    }

    fn select_next_post(&mut self) {
        if self.selected_post + 1 < self.posts.len() {
            self.selected_post += 1;
            self.comment_list_state.select(None);
        }
    }

    fn select_previous_post(&mut self) {
        if self.selected_post > 0 {
            self.selected_post -= 1;
            self.comment_list_state.select(None);
        }
    }

    fn focus_comments(&mut self) {
        self.focus = Focus::Comments;
        if self.comment_list_state.selected().is_none() && !self.thread().comments().is_empty() {
            self.comment_list_state.select(Some(0));
        }
    }

    fn select_next_comment(&mut self) {
        let len = self.thread().comments().len();
        if len == 0 {
            self.comment_list_state.select(None);
            return;
        }
        let next = match self.comment_list_state.selected() {
            Some(index) => (index + 1).min(len - 1),
            None => 0,
        };
        self.comment_list_state.select(Some(next));
    }

    fn select_previous_comment(&mut self) {
        if self.thread().comments().is_empty() {
            self.comment_list_state.select(None);
            return;
        }
        let previous = match self.comment_list_state.selected() {
            Some(index) => index.saturating_sub(1),
            None => 0,
        };
        self.comment_list_state.select(Some(previous));
    }

    fn selected_comment_id(&self) -> Option<Uuid> {
        let index = self.comment_list_state.selected()?;
        self.thread().comments().get(index).map(|c| c.id)
    }

    fn delete_selected_comment(&mut self) {
        let Some(id) = self.selected_comment_id() else {
            return;
        };
        self.thread_mut().delete(id);

        let len = self.thread().comments().len();
        if len == 0 {
            self.comment_list_state.select(None);
        } else if let Some(index) = self.comment_list_state.selected() {
            self.comment_list_state.select(Some(index.min(len - 1)));
        }
    }

    fn like_selected_comment(&mut self) {
        if let Some(id) = self.selected_comment_id() {
            self.thread_mut().like(id);
        }
    }
}
