use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional, into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] title: String,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center font-medium rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-blue-600 to-purple-600 text-white hover:from-blue-700 hover:to-purple-700 shadow-md focus:ring-blue-500",
        ButtonVariant::Outline => "border border-blue-600 text-blue-600 bg-white hover:bg-blue-50 focus:ring-blue-500",
        ButtonVariant::Ghost => "text-gray-600 hover:text-gray-900 hover:bg-gray-100 focus:ring-gray-400",
        ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500",
    };

    let size_classes = match size {
        ButtonSize::Sm => "px-3 py-1.5 text-sm",
        ButtonSize::Md => "px-4 py-2 text-sm",
        ButtonSize::Lg => "px-6 py-3 text-base",
    };

    let classes = format!(
        "{} {} {} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes, size_classes, class
    );

    if !href.is_empty() {
        return view! {
            <a href=href class=classes title=title>
                {children()}
            </a>
        }
        .into_any();
    }

    let loading_text_display = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type_val = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button
            type=button_type_val
            class=classes
            title=title
            disabled=move || disabled.get() || loading.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(ev);
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="flex items-center justify-center gap-2">
                    <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                    {loading_text_display.clone()}
                </span>
            </Show>
            <span class="inline-flex items-center" class:hidden=move || loading.get()>
                {children()}
            </span>
        </button>
    }
    .into_any()
}
