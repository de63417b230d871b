use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-auto border-t border-gray-200 bg-white/70">
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8 text-center">
                <p class="text-gray-600 text-sm">
                    "© 2025 MindKanvas. Made with "
                    <span class="text-red-500">"❤️"</span>
                    " By Kunal G."
                </p>
            </div>
        </footer>
    }
}
