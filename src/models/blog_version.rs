use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Blog, Language};

/// Snapshot of a post taken on every update.
///
/// A pending version is a draft that has not been applied to the live post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogVersion {
    pub id: String,
    pub blog_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub images: String,
    #[serde(default)]
    pub is_pending: bool,
    pub created_at: DateTime<Utc>,
}

impl BlogVersion {
    /// Whether this snapshot is what the post currently shows.
    pub fn matches(&self, blog: &Blog) -> bool {
        self.title == blog.title && self.content == blog.content && self.language == blog.language
    }
}
