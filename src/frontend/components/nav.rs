use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{Badge, BadgeSize, BadgeVariant, Footer, ToastHost};
use crate::frontend::auth::use_auth;
use crate::frontend::toast::use_toasts;

/// Page chrome shared by every route.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-gray-50 to-blue-50">
            <Nav/>
            <main class="flex-1 relative">{children()}</main>
            <Footer/>
            <ToastHost/>
        </div>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let on_admin_route = move || pathname.with(|p| p.starts_with("/admin"));
    let username = move || auth.session.with(|s| s.username().map(str::to_string));
    let logout = move || {
        auth.logout();
        menu_open.set(false);
        toasts.success("Logged out");
    };

    let dashboard_class = move || {
        if on_admin_route() {
            "flex items-center space-x-2 px-4 py-2 rounded-xl text-sm font-medium bg-gradient-to-r from-blue-500 to-blue-600 text-white shadow-lg"
        } else {
            "flex items-center space-x-2 px-4 py-2 rounded-xl text-sm font-medium text-gray-600 hover:text-gray-900 hover:bg-white/50"
        }
    };

    view! {
        <nav class="bg-white/80 backdrop-blur-md shadow-lg border-b border-white/20 sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <a href="/" class="flex items-center space-x-3 text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        <span class="text-2xl">"📖"</span>
                        <span>"MindKanvas"</span>
                    </a>

                    <div class="hidden md:flex items-center space-x-4">
                        <Show when=move || auth.is_admin()>
                            <a href="/admin" class=dashboard_class>
                                <span>"⚙"</span>
                                <span>"Dashboard"</span>
                            </a>
                        </Show>
                        <Show
                            when=move || auth.is_authenticated()
                            fallback=|| view! {
                                <div class="flex items-center space-x-2">
                                    <a href="/signup" class="px-3 py-1.5 rounded-lg text-sm font-medium border border-blue-600 text-blue-600 bg-white hover:bg-blue-50">
                                        "Start Writing"
                                    </a>
                                    <a href="/admin/login" class="px-3 py-1.5 rounded-lg text-sm font-medium text-white bg-gradient-to-r from-blue-600 to-purple-600">
                                        "Login"
                                    </a>
                                </div>
                            }
                        >
                            <div class="flex items-center space-x-4">
                                <div class="flex items-center space-x-3 bg-white/50 rounded-xl px-4 py-2 border border-white/20">
                                    <span class="text-sm font-medium text-gray-900">{username}</span>
                                    <Show when=move || auth.is_admin()>
                                        <Badge variant=BadgeVariant::Primary size=BadgeSize::Sm>"Admin"</Badge>
                                    </Show>
                                </div>
                                <button
                                    type="button"
                                    title="Logout"
                                    class="px-3 py-1.5 rounded-lg text-sm text-gray-600 hover:text-red-600 hover:bg-gray-100"
                                    on:click=move |_| logout()
                                >
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            type="button"
                            class="text-gray-600 hover:text-gray-900 p-2 rounded-lg hover:bg-white/50"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white/95 border-t border-white/20 px-4 py-4 space-y-3">
                    <Show when=move || auth.is_admin()>
                        <a href="/admin" class="block px-4 py-2 rounded-xl text-sm font-medium text-gray-600 hover:bg-gray-100"
                            on:click=move |_| menu_open.set(false)>
                            "Dashboard"
                        </a>
                    </Show>
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=move || view! {
                            <div class="space-y-2">
                                <a href="/signup" class="block px-4 py-2 text-blue-600 hover:bg-blue-50 rounded-xl text-sm font-medium"
                                    on:click=move |_| menu_open.set(false)>
                                    "Start writing"
                                </a>
                                <a href="/admin/login" class="block px-4 py-2 text-blue-600 hover:bg-blue-50 rounded-xl text-sm font-medium"
                                    on:click=move |_| menu_open.set(false)>
                                    "Login"
                                </a>
                            </div>
                        }
                    >
                        <div class="space-y-3">
                            <div class="flex items-center space-x-2 px-4 py-2 bg-gray-100 rounded-xl">
                                <span class="text-sm font-medium">{username}</span>
                                <Show when=move || auth.is_admin()>
                                    <Badge variant=BadgeVariant::Primary size=BadgeSize::Sm>"Admin"</Badge>
                                </Show>
                            </div>
                            <button
                                type="button"
                                class="flex items-center px-4 py-2 text-red-600 hover:bg-red-50 rounded-xl text-sm font-medium w-full"
                                on:click=move |_| logout()
                            >
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
