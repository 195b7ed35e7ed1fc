use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post author metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar_url: String,
    pub role: String,
}

/// One unit of post body, tagged by kind
///
/// Wire shape is `{ "type": "paragraph" | "link", "content": "..." }`.
/// Tags outside that set deserialize to [`ContentLine::Unknown`] and are
/// skipped by every renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "lowercase")]
pub enum ContentLine {
    /// Plain text line
    Paragraph(String),
    /// Hyperlink whose target and display text are the same string
    Link(String),
    /// Unrecognized tag, renders as nothing
    #[serde(other, deserialize_with = "ignore_content")]
    Unknown,
}

/// Discards the `content` payload of an unrecognized tag so `#[serde(other)]`
/// accepts it whether or not a payload is present.
fn ignore_content<'de, D: serde::Deserializer<'de>>(d: D) -> Result<(), D::Error> {
    serde::de::IgnoredAny::deserialize(d).map(|_| ())
}

/// A single feed entry
///
/// Immutable after construction. Content order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub author: Author,
    pub content: Vec<ContentLine>,
    pub published_at: DateTime<Utc>,
}
