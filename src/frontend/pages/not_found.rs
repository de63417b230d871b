//! 404 page.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center px-6">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent mb-4">
                    "404"
                </h1>
                <p class="text-2xl font-semibold text-gray-900 mb-2">"Page not found"</p>
                <p class="text-gray-600 mb-8 max-w-md">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a
                    href="/"
                    class="inline-flex items-center px-4 py-2 rounded-lg text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700"
                >
                    "Back to all posts"
                </a>
            </div>
        </div>
    }
}
