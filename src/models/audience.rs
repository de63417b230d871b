use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One liker or viewer of a post, as listed on the admin side.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AudienceEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AudienceKind {
    Likers,
    Viewers,
}

impl AudienceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Likers => "likers",
            Self::Viewers => "viewers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Likers => "Liked by",
            Self::Viewers => "Viewed by",
        }
    }
}
