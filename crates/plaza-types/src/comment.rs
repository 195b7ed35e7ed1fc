use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Validation message shown when an empty draft is submitted
pub const EMPTY_DRAFT_MESSAGE: &str = "Please fill in the comment.";

/// A single submitted comment
///
/// The id is synthetic, assigned at creation, and is the only deletion key.
/// Equal texts keep distinct ids, so deleting one of two duplicates leaves
/// the other in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub likes: u32,
    pub posted_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            likes: 0,
            posted_at: Utc::now(),
        }
    }
}

/// Per-post comment state: the submitted list, the in-progress draft, and
/// the field-level validation message.
///
/// Owned exclusively by one post view. Mutated only by discrete UI events,
/// one at a time. Dropped with the view; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    comments: Vec<Comment>,
    draft: String,
    validation: Option<&'static str>,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thread initialized with one seed comment, backdated one hour so the
    /// relative label reads "about 1h ago" rather than "just now".
    pub fn seeded(text: impl Into<String>) -> Self {
        let mut seed = Comment::new(text);
        seed.posted_at = Utc::now() - chrono::Duration::hours(1);
        Self {
            comments: vec![seed],
            draft: String::new(),
            validation: None,
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn validation(&self) -> Option<&'static str> {
        self.validation
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Replace the draft wholesale. Any edit clears the validation message.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.validation = None;
    }

    /// Append one character to the draft (keystroke path)
    pub fn push_draft_char(&mut self, c: char) {
        self.draft.push(c);
        self.validation = None;
    }

    /// Remove the last character of the draft (backspace path)
    pub fn pop_draft_char(&mut self) {
        self.draft.pop();
        self.validation = None;
    }

    /// Submit the current draft as a new comment.
    ///
    /// An empty draft sets the validation message and returns
    /// [`Error::EmptyDraft`] without touching the list. On success the new
    /// comment is appended (submission order preserved, no trimming, no
    /// dedup, no length cap) and the draft resets to empty.
    pub fn submit(&mut self) -> Result<Uuid> {
        if self.draft.is_empty() {
            self.validation = Some(EMPTY_DRAFT_MESSAGE);
            return Err(Error::EmptyDraft);
        }

        let comment = Comment::new(std::mem::take(&mut self.draft));
        let id = comment.id;
        self.validation = None;
        self.comments.push(comment);
        Ok(id)
    }

    /// Remove the comment with the given id. Returns false if absent.
    pub fn delete(&mut self, id: Uuid) -> bool {
        match self.comments.iter().position(|c| c.id == id) {
            Some(index) => {
                self.comments.remove(index);
                true
            }
            None => false,
        }
    }

    /// Increment the like counter of the comment with the given id.
    pub fn like(&mut self, id: Uuid) -> bool {
        match self.comments.iter_mut().find(|c| c.id == id) {
            Some(comment) => {
                comment.likes += 1;
                true
            }
            None => false,
        }
    }
}

/// Coarse relative-time label for comment headers
pub fn time_ago(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(posted_at).num_seconds().max(0);
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("about {}m ago", seconds / 60)
    } else if seconds < 86400 {
        format!("about {}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_appends_and_resets_draft() {
        let mut thread = CommentThread::seeded("Nice post!");
        thread.edit_draft("Thanks!");

        thread.submit().unwrap();

        let texts: Vec<&str> = thread.comments().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["Nice post!", "Thanks!"]);
        assert_eq!(thread.draft(), "");
        assert!(thread.validation().is_none());
    }

    #[test]
    fn empty_submit_sets_validation_and_leaves_list_alone() {
        let mut thread = CommentThread::seeded("Nice post!");

        let err = thread.submit().unwrap_err();

        assert!(matches!(err, Error::EmptyDraft));
        assert_eq!(thread.comments().len(), 1);
        assert_eq!(thread.validation(), Some(EMPTY_DRAFT_MESSAGE));
    }

    #[test]
    fn typing_clears_validation() {
        let mut thread = CommentThread::new();
        let _ = thread.submit();
        assert!(thread.validation().is_some());

        thread.push_draft_char('a');
        assert!(thread.validation().is_none());
        assert!(thread.can_submit());
    }

    #[test]
    fn backspace_edits_draft_and_clears_validation() {
        let mut thread = CommentThread::new();
        thread.edit_draft("ab");
        let _ = thread.submit();

        thread.edit_draft("");
        let _ = thread.submit();
        assert!(thread.validation().is_some());

        thread.pop_draft_char();
        assert!(thread.validation().is_none());
    }

    #[test]
    fn delete_removes_exactly_one_duplicate() {
        let mut thread = CommentThread::new();
        for text in ["A", "A", "B"] {
            thread.edit_draft(text);
            thread.submit().unwrap();
        }

        let first_a = thread.comments()[0].id;
        assert!(thread.delete(first_a));

        let texts: Vec<&str> = thread.comments().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["A", "B"]);
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let mut thread = CommentThread::seeded("hello");
        assert!(!thread.delete(Uuid::new_v4()));
        assert_eq!(thread.comments().len(), 1);
    }

    #[test]
    fn like_increments_one_comment() {
        let mut thread = CommentThread::seeded("hello");
        let id = thread.comments()[0].id;

        assert!(thread.like(id));
        assert!(thread.like(id));
        assert_eq!(thread.comments()[0].likes, 2);
        assert!(!thread.like(Uuid::new_v4()));
    }

    #[test]
    fn time_ago_buckets() {
        let now: DateTime<Utc> = "2022-05-03T23:00:00Z".parse().unwrap();
        let at = |s: &str| s.parse::<DateTime<Utc>>().unwrap();

        assert_eq!(time_ago(at("2022-05-03T22:59:30Z"), now), "just now");
        assert_eq!(time_ago(at("2022-05-03T22:45:00Z"), now), "about 15m ago");
        assert_eq!(time_ago(at("2022-05-03T20:00:00Z"), now), "about 3h ago");
        assert_eq!(time_ago(at("2022-05-01T23:00:00Z"), now), "2d ago");
        // Clock skew clamps to "just now" rather than a negative bucket
        assert_eq!(time_ago(at("2022-05-03T23:05:00Z"), now), "just now");
    }
}
