use plaza_types::*;

#[test]
fn test_submit_preserves_order() {
    let mut thread = CommentThread::seeded("Nice post!");

    for text in ["Thanks!", "Great write-up", "Thanks!"] {
        thread.edit_draft(text);
        thread.submit().unwrap();
        assert_eq!(thread.draft(), "");
    }

    let texts: Vec<&str> = thread.comments().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["Nice post!", "Thanks!", "Great write-up", "Thanks!"]);
}

#[test]
fn test_empty_submit_never_changes_length() {
    let mut thread = CommentThread::seeded("Nice post!");

    for _ in 0..5 {
        assert!(thread.submit().is_err());
        assert_eq!(thread.comments().len(), 1);
    }
    assert_eq!(thread.validation(), Some(EMPTY_DRAFT_MESSAGE));
}

#[test]
fn test_duplicate_texts_keep_distinct_ids() {
    let mut thread = CommentThread::new();
    thread.edit_draft("same");
    let first = thread.submit().unwrap();
    thread.edit_draft("same");
    let second = thread.submit().unwrap();

    assert_ne!(first, second);

    // Deleting one duplicate leaves the other
    assert!(thread.delete(first));
    assert_eq!(thread.comments().len(), 1);
    assert_eq!(thread.comments()[0].text, "same");
    assert_eq!(thread.comments()[0].id, second);
}

#[test]
fn test_no_trimming_or_dedup_on_submit() {
    let mut thread = CommentThread::new();
    thread.edit_draft("  padded  ");
    thread.submit().unwrap();
    assert_eq!(thread.comments()[0].text, "  padded  ");
}

#[test]
fn test_seed_posts_survive_json_roundtrip() {
    let posts = seed_posts();
    let json = serde_json::to_string(&posts).unwrap();
    let back: Vec<Post> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, posts);
}
