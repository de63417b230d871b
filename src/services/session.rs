use crate::common::ApiError;
use crate::models::User;
use crate::types::TokenValidation;

use super::SessionStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Who is using the app right now.
///
/// The token is opaque to the client; the backend issues and checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Rebuilds the session from `store`.
    ///
    /// A cached user that no longer parses, or a user without a token, is
    /// treated as logged out and the stale entries are dropped.
    pub fn restore(store: &dyn SessionStore) -> Self {
        let token = store.load(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let raw_user = store.load(USER_KEY);

        let user = match raw_user.as_deref().map(serde_json::from_str::<User>) {
            Some(Ok(user)) => Some(user),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "discarding unreadable cached user");
                None
            }
            None => None,
        };

        match (token, user) {
            (Some(token), Some(user)) => Self {
                token: Some(token),
                user: Some(user),
            },
            (None, None) => Self::anonymous(),
            _ => {
                Self::logout(store);
                Self::anonymous()
            }
        }
    }

    /// Persists a freshly issued token and its user.
    pub fn login(store: &dyn SessionStore, token: String, user: User) -> Self {
        store.save(TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(json) => store.save(USER_KEY, &json),
            Err(e) => tracing::warn!(error = %e, "failed to cache user"),
        }

        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn logout(store: &dyn SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
    }

    /// Token currently persisted in `store`, if any.
    pub fn stored_token(store: &dyn SessionStore) -> Option<String> {
        store.load(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

/// Whether a background token check means the stored session is dead.
///
/// Only an explicit rejection counts; transport failures and server errors
/// keep the session.
pub fn should_logout(check: &Result<TokenValidation, ApiError>) -> bool {
    match check {
        Ok(claims) => !claims.valid,
        Err(e) => e.is_unauthorized(),
    }
}
