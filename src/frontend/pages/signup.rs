use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::frontend::auth::use_auth;
use crate::frontend::components::{Button, Card, ErrorAlert, PasswordInput, TextInput};
use crate::frontend::toast::use_toasts;
use crate::log_err;
use crate::state::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
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
        pending.set(true);
        error.set(None);

        spawn_local(async move {
            match api.signup(&request.username, &request.password).await {
                Ok(_) => {
                    toasts.success("Account created. Please sign in.");
                    navigate("/admin/login", Default::default());
                }
                Err(e) => {
                    log_err!(e, "Signup failed");
                    error.set(Some(e.user_message("Signup failed")));
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
                        <h2 class="mt-6 text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Create your account"
                        </h2>
                    </div>

                    {move || error.get().map(|message| view! { <ErrorAlert message=message /> })}

                    <form class="space-y-5" on:submit=on_submit>
                        <TextInput
                            label="Username"
                            name="username"
                            placeholder="Choose a username"
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
                        <PasswordInput
                            label="Confirm password"
                            name="confirm_password"
                            value=confirm_password
                            set_value=set_confirm_password
                        />
                        <Button class="w-full" loading=pending loading_text="Creating account...">
                            "Create Account"
                        </Button>
                    </form>

                    <p class="text-center text-gray-600 mt-6 text-sm">
                        "Already have an account? "
                        <a href="/admin/login" class="text-blue-600 hover:text-blue-700 font-medium">"Sign in"</a>
                    </p>
                </Card>
            </div>
        </div>
    }
}
