//! Thin wrapper over the blog REST API.
//!
//! Every call attaches the stored bearer token (if any) and turns non-2xx
//! responses into [`ApiError::Status`] carrying the API's `error` text.

mod admin;
mod auth;
mod public;

use std::sync::Arc;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::common::ApiError;
use crate::services::{Session, SessionStore};
use crate::types::ErrorBody;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store the client reads its bearer token from.
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match Session::stored_token(self.store()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        tracing::debug!(path, "API request");
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            let message = body.error.or(body.message).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
            tracing::warn!(path, status = status.as_u16(), %message, "API request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(ApiError::Decode)
    }
}
