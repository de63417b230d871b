use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum LoadingSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

/// Spinner with an optional caption, inline or as a full-screen overlay.
#[component]
pub fn Loading(
    #[prop(optional)] size: LoadingSize,
    #[prop(optional, into)] text: Option<String>,
    #[prop(optional)] full_screen: bool,
) -> impl IntoView {
    let size_classes = match size {
        LoadingSize::Sm => "h-4 w-4",
        LoadingSize::Md => "h-8 w-8",
        LoadingSize::Lg => "h-12 w-12",
        LoadingSize::Xl => "h-16 w-16",
    };

    let content = view! {
        <div class="flex flex-col items-center justify-center space-y-4 py-12">
            <div class=format!(
                "{} border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin",
                size_classes
            )></div>
            {text.map(|text| view! { <p class="text-gray-600 text-sm font-medium">{text}</p> })}
        </div>
    };

    if full_screen {
        view! {
            <div class="fixed inset-0 bg-white/80 backdrop-blur-sm flex items-center justify-center z-50">
                {content}
            </div>
        }
        .into_any()
    } else {
        content.into_any()
    }
}
