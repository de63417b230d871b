use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: BadgeSize,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let variant_classes = match variant {
        BadgeVariant::Default => "bg-gray-100 text-gray-800 border border-gray-200",
        BadgeVariant::Primary => "bg-blue-100 text-blue-800 border border-blue-200",
        BadgeVariant::Secondary => "bg-purple-100 text-purple-800 border border-purple-200",
        BadgeVariant::Success => "bg-green-100 text-green-800 border border-green-200",
        BadgeVariant::Warning => "bg-yellow-100 text-yellow-800 border border-yellow-200",
        BadgeVariant::Danger => "bg-red-100 text-red-800 border border-red-200",
    };

    let size_classes = match size {
        BadgeSize::Sm => "px-2 py-1 text-xs",
        BadgeSize::Md => "px-3 py-1 text-sm",
        BadgeSize::Lg => "px-4 py-2 text-base",
    };

    view! {
        <span class=format!(
            "inline-flex items-center font-medium rounded-full {} {} {}",
            variant_classes, size_classes, class
        )>
            {icon.map(|icon| view! { <span class="mr-1">{icon}</span> })}
            {children()}
        </span>
    }
}
