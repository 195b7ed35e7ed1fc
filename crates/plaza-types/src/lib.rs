// NOTE: plaza Data Model Rationale
//
// Why Per-Thread Ownership (not a shared comment store)?
// - Each post's comment thread is private to that post's view
// - Events are handled one at a time on the UI thread, so no locking is needed
// - Dropping a thread drops its comments; nothing is persisted
//
// Why Synthetic Comment Ids (not delete-by-text)?
// - Comments are user-entered strings and duplicates are legal
// - Deleting by value would remove every structurally equal entry
// - A v4 UUID assigned at creation makes deletion target exactly one comment
//
// Why a Tagged Content Enum (not a string pair)?
// - The wire shape is { "type": ..., "content": ... }
// - Unknown tags must deserialize without error and render as nothing
// - serde's adjacently tagged enum with an `other` variant gives both for free

pub mod comment;
pub mod error;
pub mod feed;
pub mod post;
mod time;

pub use comment::*;
pub use error::{Error, Result};
pub use feed::seed_posts;
pub use post::*;
pub use time::format_published_at;
