use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Info,
    Error,
}

/// Inline notice. Anything passed as children (usually buttons) is laid out
/// under the message.
#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (role, classes) = match variant {
        AlertVariant::Info => ("status", "bg-blue-50 border-blue-200 text-blue-800"),
        AlertVariant::Error => ("alert", "bg-red-50 border-red-200 text-red-700"),
    };

    view! {
        <div role=role class=format!("p-4 rounded-lg border text-sm {} {}", classes, class)>
            <p class="text-center">{message}</p>
            {children.map(|c| view! {
                <div class="mt-3 flex items-center justify-center gap-3">{c()}</div>
            })}
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Error class="mb-6" /> }
}
