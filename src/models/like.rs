use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub blog_id: String,
    pub created_at: DateTime<Utc>,
}
