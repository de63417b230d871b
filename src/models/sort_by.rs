use serde::{Deserialize, Serialize};

/// Listing order understood by the blog list endpoints.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Recent,
    MostCommented,
    MostLiked,
    MostViewed,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::Recent,
        SortBy::MostLiked,
        SortBy::MostCommented,
        SortBy::MostViewed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::MostCommented => "most_commented",
            Self::MostLiked => "most_liked",
            Self::MostViewed => "most_viewed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Recent => "Most Recent",
            Self::MostCommented => "Most Commented",
            Self::MostLiked => "Most Liked",
            Self::MostViewed => "Most Viewed",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(Self::Recent),
            "most_commented" => Ok(Self::MostCommented),
            "most_liked" => Ok(Self::MostLiked),
            "most_viewed" => Ok(Self::MostViewed),
            _ => Err(format!("invalid sort order: {}", s)),
        }
    }
}
