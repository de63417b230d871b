use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum CardShadow {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

#[component]
pub fn Card(
    children: Children,
    #[prop(optional)] hover: bool,
    #[prop(optional)] padding: CardPadding,
    #[prop(optional)] shadow: CardShadow,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let padding_classes = match padding {
        CardPadding::None => "",
        CardPadding::Sm => "p-4",
        CardPadding::Md => "p-6",
        CardPadding::Lg => "p-8",
    };

    let shadow_classes = match shadow {
        CardShadow::None => "",
        CardShadow::Sm => "shadow-sm",
        CardShadow::Md => "shadow-md",
        CardShadow::Lg => "shadow-lg",
        CardShadow::Xl => "shadow-xl",
    };

    let hover_classes = if hover {
        "hover:shadow-xl hover:-translate-y-1 cursor-pointer"
    } else {
        ""
    };

    view! {
        <div class=format!(
            "bg-white rounded-xl border border-gray-200 transition-all duration-200 {} {} {} {}",
            padding_classes, shadow_classes, hover_classes, class
        )>
            {children()}
        </div>
    }
}
