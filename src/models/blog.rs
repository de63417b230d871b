use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Comment, Language, Like};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub images: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub views_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<Like>>,
}

impl Blog {
    /// Date readers see: publication date, or creation date for drafts.
    pub fn display_date(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_published { "Published" } else { "Draft" }
    }

    /// Image paths attached to the post.
    ///
    /// The API has stored these both as a JSON array and as a comma
    /// separated list, so both are accepted.
    pub fn image_paths(&self) -> Vec<String> {
        parse_image_list(&self.images)
    }

    /// First image, resolved against `asset_base`.
    pub fn cover_image(&self, asset_base: &str) -> Option<String> {
        self.image_paths()
            .into_iter()
            .next()
            .map(|path| resolve_asset_url(asset_base, &path))
    }
}

pub(crate) fn parse_image_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    if raw.starts_with('[') {
        if let Ok(list) = serde_json::from_str::<Vec<String>>(raw) {
            return list
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Absolute URLs pass through; API-relative paths get the asset host.
pub fn resolve_asset_url(asset_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }

    let base = asset_base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_list_comma_separated() {
        assert_eq!(
            parse_image_list("/uploads/a.png, /uploads/b.png,"),
            vec!["/uploads/a.png", "/uploads/b.png"]
        );
    }

    #[test]
    fn test_parse_image_list_json_array() {
        assert_eq!(
            parse_image_list(r#"["/uploads/a.png", ""]"#),
            vec!["/uploads/a.png"]
        );
    }

    #[test]
    fn test_parse_image_list_empty() {
        assert!(parse_image_list("   ").is_empty());
    }

    #[test]
    fn test_resolve_asset_url() {
        assert_eq!(
            resolve_asset_url("http://localhost:8080/", "/uploads/a.png"),
            "http://localhost:8080/uploads/a.png"
        );
        assert_eq!(
            resolve_asset_url("http://localhost:8080", "uploads/a.png"),
            "http://localhost:8080/uploads/a.png"
        );
        assert_eq!(
            resolve_asset_url("http://localhost:8080", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
