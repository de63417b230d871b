use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::{Loading, LoadingSize};
use crate::frontend::auth::use_auth;

#[derive(Clone, Copy, PartialEq)]
enum Access {
    Pending,
    Granted,
    Denied,
}

/// Renders `children` for admins only; everyone else is sent to the login
/// page with the current path as `next`.
#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;

    let access = Memo::new(move |_| {
        if !auth.restored.get() {
            Access::Pending
        } else if auth.is_admin() {
            Access::Granted
        } else {
            Access::Denied
        }
    });

    move || match access.get() {
        Access::Pending => view! { <Loading size=LoadingSize::Lg text="Checking session..." /> }.into_any(),
        Access::Granted => children().into_any(),
        Access::Denied => {
            let next = pathname.get_untracked();
            view! { <Redirect path=format!("/admin/login?next={}", next) /> }.into_any()
        }
    }
}
