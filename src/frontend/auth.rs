//! Reactive session shared by every page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::models::User;
use crate::services::{Session, should_logout};

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Session>,
    /// Set once the stored session has been read in the browser. Guards
    /// wait for it so a reload does not bounce an admin to the login page.
    pub restored: RwSignal<bool>,
    api: StoredValue<ApiClient>,
}

impl AuthContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            session: RwSignal::new(Session::anonymous()),
            restored: RwSignal::new(false),
            api: StoredValue::new(api),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Loads the persisted session, then checks the token in the background.
    pub fn restore(&self) {
        let session = self.api.with_value(|api| Session::restore(api.store()));
        let authenticated = session.is_authenticated();
        self.session.set(session);
        self.restored.set(true);

        if authenticated {
            let auth = *self;
            spawn_local(async move { auth.revalidate().await });
        }
    }

    async fn revalidate(self) {
        let check = self.api().validate_token().await;
        if should_logout(&check) {
            tracing::info!("stored token rejected, logging out");
            self.logout();
        } else if let Err(e) = check {
            tracing::warn!(error = %e, "could not validate stored token");
        }
    }

    pub fn login(&self, token: String, user: User) {
        let session = self
            .api
            .with_value(|api| Session::login(api.store(), token, user));
        self.session.set(session);
    }

    pub fn logout(&self) {
        self.api.with_value(|api| Session::logout(api.store()));
        self.session.set(Session::anonymous());
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.session.with(Session::is_admin)
    }
}

/// Provides the auth context and schedules the session restore, which only
/// runs once the app is live in the browser.
pub fn provide_auth(api: ApiClient) -> AuthContext {
    let auth = AuthContext::new(api);
    provide_context(auth);
    Effect::new(move |_| auth.restore());
    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
