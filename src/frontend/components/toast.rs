use leptos::prelude::*;

use crate::frontend::toast::use_toasts;

/// Renders the current success/error notifications.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-20 right-4 z-50 space-y-2">
            {move || {
                toasts.success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}
            {move || {
                toasts.error.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

#[component]
fn ToastMessage(#[prop(into)] message: String, variant: ToastVariant) -> impl IntoView {
    let toasts = use_toasts();
    let (icon, bg_class) = match variant {
        ToastVariant::Success => ("✓", "bg-green-600"),
        ToastVariant::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div
            class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg cursor-pointer",
                bg_class
            )
            on:click=move |_| toasts.dismiss()
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
