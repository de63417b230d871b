use serde::{Deserialize, Serialize};

use crate::models::*;

/// Login request payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: String,
}

/// Signup request payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

/// Successful signup response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
}

/// Claims echoed back by the token validation endpoint
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenValidation {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Query string for both blog listings
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlogListQuery {
    pub page: u32,
    pub limit: u32,
    pub published_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    pub sort_by: SortBy,
}

impl Default for BlogListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            published_only: true,
            language: None,
            sort_by: SortBy::Recent,
        }
    }
}

/// One page of posts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPage {
    #[serde(default)]
    pub blogs: Vec<Blog>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// A post together with its version history, newest first
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogWithVersions {
    pub blog: Blog,
    #[serde(default)]
    pub versions: Vec<BlogVersion>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_date: Option<String>,
}

/// Every field is optional; the API snapshots the result as a pending version.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_date: Option<String>,
}

/// Response of the create/update/publish/apply endpoints
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogMutation {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub blog: Option<Blog>,
    #[serde(default)]
    pub version: Option<BlogVersion>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub blog_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub content: String,
    pub is_anonymous: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentList {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LikeStatus {
    #[serde(default)]
    pub liked: bool,
}

/// Generic `{ "message": ... }` acknowledgement
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
    pub filename: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AudiencePage {
    #[serde(default)]
    pub items: Vec<AudienceEntry>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Error body the API sends with non-2xx statuses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
