//! Login page for MindKanvas

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::frontend::auth::use_auth;
use crate::frontend::components::{Button, Card, ErrorAlert, PasswordInput, TextInput};
use crate::frontend::toast::use_toasts;
use crate::log_err;
use crate::state::{LoginForm, login_destination};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let query = use_query_map();
    let next = move || query.with(|q| q.get("next"));

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let replace = NavigateOptions {
        replace: true,
        ..Default::default()
    };

    // already signed in: skip the form
    Effect::new({
        let navigate = navigate.clone();
        let replace = replace.clone();
        move |_| {
            if auth.restored.get() && auth.is_authenticated() {
                let target = login_destination(next().as_deref(), auth.is_admin());
                navigate(&target, replace.clone());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        let api = auth.api();
        let navigate = navigate.clone();
        let replace = replace.clone();
        let next = next();
        pending.set(true);
        error.set(None);

        spawn_local(async move {
            match api.login(&request.username, &request.password).await {
                Ok(response) => {
                    let target = login_destination(next.as_deref(), response.user.is_admin);
                    tracing::info!(username = %response.user.username, "logged in");
                    auth.login(response.token, response.user);
                    toasts.success("Welcome back!");
                    navigate(&target, replace);
                }
                Err(e) => {
                    log_err!(e, "Login failed");
                    error.set(Some(e.user_message("Login failed")));
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 via-white to-purple-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full">
                <Card class="bg-white/90 shadow-2xl">
                    <div class="text-center mb-8">
                        <div class="mx-auto h-16 w-16 flex items-center justify-center rounded-full bg-gradient-to-br from-blue-500 to-purple-600 shadow-lg text-3xl">
                            "🔒"
                        </div>
                        <h2 class="mt-6 text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Sign In"
                        </h2>
                        <p class="mt-2 text-gray-600">"Sign in to manage your blog"</p>
                    </div>

                    {move || error.get().map(|message| view! { <ErrorAlert message=message /> })}

                    <form class="space-y-5" on:submit=on_submit>
                        <TextInput
                            label="Username"
                            name="username"
                            placeholder="Enter your username"
                            input_type="text"
                            required=true
                            value=username
                            set_value=set_username
                        />
                        <PasswordInput
                            label="Password"
                            name="password"
                            value=password
                            set_value=set_password
                        />
                        <Button class="w-full" loading=pending loading_text="Signing in...">
                            "Sign In"
                        </Button>
                    </form>

                    <p class="text-center text-gray-600 mt-6 text-sm">
                        "Don't have an account? "
                        <a href="/signup" class="text-blue-600 hover:text-blue-700 font-medium">"Sign up"</a>
                    </p>
                </Card>

                <a href="/" class="block text-center text-gray-500 hover:text-gray-700 mt-6 text-sm transition-colors">
                    "← Back to home"
                </a>
            </div>
        </div>
    }
}
