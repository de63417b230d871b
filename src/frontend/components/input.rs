use leptos::prelude::*;

const INPUT_CLASSES: &str = "w-full px-4 py-3 rounded-lg bg-white border border-gray-300
                             text-gray-900 placeholder-gray-400
                             focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent
                             transition-all";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let has_hint = !hint.is_empty();

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-gray-700 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=INPUT_CLASSES
            />
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-gray-500">{hint.clone()}</p> })}
        </div>
    }
}

/// Password field with a show/hide toggle.
#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] hint: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let has_hint = !hint.is_empty();

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-gray-700 mb-2">
                {label}
            </label>
            <div class="relative">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    id=name.clone()
                    name=name
                    placeholder="••••••••"
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                    class=INPUT_CLASSES
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-3 text-xs font-medium text-gray-500 hover:text-gray-800"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-gray-500">{hint.clone()}</p> })}
        </div>
    }
}
