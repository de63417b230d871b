use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account as returned by the auth endpoints. Never carries a password.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
