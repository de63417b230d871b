#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use mindkanvas::api::ApiClient;
use mindkanvas::models::*;
use mindkanvas::services::{MemoryStore, Session, SessionStore};

pub const TOKEN: &str = "test-token";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn get_seed_admin() -> User {
    User {
        id: "1".to_string(),
        username: "admin".to_string(),
        is_admin: true,
        created_at: parse_time("2026-01-04T22:15:06Z"),
        updated_at: parse_time("2026-01-04T22:15:06Z"),
    }
}

pub fn get_seed_reader() -> User {
    User {
        id: "2".to_string(),
        username: "reader".to_string(),
        is_admin: false,
        created_at: parse_time("2026-01-05T13:22:56Z"),
        updated_at: parse_time("2026-01-05T13:22:56Z"),
    }
}

pub fn user_json(user: &User) -> Value {
    serde_json::to_value(user).expect("user serializes")
}

pub fn blog_json(id: &str, title: &str, published: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": format!("<p>{title}</p>"),
        "preview": title,
        "language": "english",
        "images": "[\"/uploads/cover.png\"]",
        "is_published": published,
        "published_at": if published { json!("2026-02-01T10:00:00Z") } else { Value::Null },
        "likes_count": 3,
        "comments_count": 2,
        "views_count": 40,
        "created_at": "2026-01-30T09:00:00Z",
        "updated_at": "2026-02-01T10:00:00Z"
    })
}

pub fn version_json(id: &str, blog_id: &str, title: &str, pending: bool) -> Value {
    json!({
        "id": id,
        "blog_id": blog_id,
        "title": title,
        "content": format!("<p>{title}</p>"),
        "language": "english",
        "images": "",
        "is_pending": pending,
        "created_at": "2026-02-02T08:00:00Z"
    })
}

pub fn pagination_json(page: u32, limit: u32, total: u64) -> Value {
    let total_pages = total.div_ceil(limit as u64);
    json!({ "page": page, "limit": limit, "total": total, "total_pages": total_pages })
}

/// Client pointed at `base_url` with an empty in-memory session.
pub fn anonymous_client(base_url: &str) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let client = ApiClient::new(base_url, store.clone() as Arc<dyn SessionStore>);
    (client, store)
}

/// Client with an admin session already persisted.
pub fn admin_client(base_url: &str) -> ApiClient {
    let (client, store) = anonymous_client(base_url);
    Session::login(store.as_ref(), TOKEN.to_string(), get_seed_admin());
    client
}
