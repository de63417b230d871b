use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::{ClientConfig, HOME_PAGE_SIZE};
use crate::frontend::auth::use_auth;
use crate::frontend::components::{Badge, BadgeVariant, Card, Loading, LoadingSize, PaginationBar};
use crate::frontend::toast::use_toasts;
use crate::log_err;
use crate::models::{Blog, Language};
use crate::state::ListingState;
use crate::utils::{format_date, strip_html, time_ago, truncate_text};

const PREVIEW_CHARS: usize = 120;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let listing = RwSignal::new(ListingState::new(HOME_PAGE_SIZE));
    let blogs = RwSignal::new(Vec::<Blog>::new());
    let loading = RwSignal::new(true);
    let query = Memo::new(move |_| listing.with(|l| l.query(true)));

    Effect::new(move |_| {
        let query = query.get();
        let api = auth.api();
        loading.set(true);
        spawn_local(async move {
            match api.list_blogs(&query).await {
                Ok(page) => {
                    listing.update(|l| l.apply(&page.pagination));
                    blogs.set(page.blogs);
                }
                Err(e) => {
                    log_err!(e, "Failed to fetch blogs");
                    toasts.error(e.user_message("Failed to load blogs"));
                }
            }
            loading.set(false);
        });
    });

    let filter_class = move |language: Option<Language>| {
        if listing.with(|l| l.language == language) {
            "px-4 py-2 rounded-lg text-sm font-medium text-white bg-gradient-to-r from-blue-600 to-purple-600 shadow-md"
        } else {
            "px-4 py-2 rounded-lg text-sm font-medium border border-blue-600 text-blue-600 bg-white hover:bg-blue-50"
        }
    };

    view! {
        <div class="min-h-screen">
            <section class="relative bg-gradient-to-br from-blue-50 via-white to-purple-50 py-20">
                <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-5xl sm:text-7xl font-bold bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 bg-clip-text text-transparent mb-6">
                        "Welcome to Kunal's Blog"
                    </h1>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
                        "Sharing thoughts, experiences, and insights about technology, life, and everything in between. "
                        "Available in English and देवनागरी."
                    </p>
                </div>
            </section>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="mb-12 flex flex-wrap justify-center gap-3">
                    <button
                        type="button"
                        class=move || filter_class(None)
                        on:click=move |_| listing.update(|l| l.set_language(None))
                    >
                        "All Languages"
                    </button>
                    {Language::ALL
                        .into_iter()
                        .map(|language| view! {
                            <button
                                type="button"
                                class=move || filter_class(Some(language))
                                on:click=move |_| listing.update(|l| l.set_language(Some(language)))
                            >
                                {language.label()}
                            </button>
                        })
                        .collect_view()}
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <Loading size=LoadingSize::Xl text="Loading amazing content..." /> }
                >
                    <Show when=move || blogs.with(|b| !b.is_empty()) fallback=EmptyState>
                        <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                            <For
                                each=move || blogs.get()
                                key=|blog| blog.id.clone()
                                children=|blog| view! { <BlogCard blog=blog /> }
                            />
                        </div>
                    </Show>
                </Show>

                <PaginationBar listing=listing />
            </div>
        </div>
    }
}

#[component]
fn BlogCard(blog: Blog) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let cover = blog.cover_image(&config.asset_base_url);
    let date = blog.display_date();
    let href = format!("/blog/{}", blog.id);
    let preview = if blog.preview.trim().is_empty() {
        strip_html(&blog.content)
    } else {
        blog.preview.clone()
    };

    view! {
        <Card hover=true class="h-full overflow-hidden group">
            {cover.map(|src| view! {
                <div class="aspect-video bg-gradient-to-br from-gray-100 to-gray-200 overflow-hidden -m-6 mb-6">
                    <img src=src alt=blog.title.clone() class="w-full h-full object-cover" />
                </div>
            })}
            <div class="flex items-center justify-between mb-4">
                <Badge variant=BadgeVariant::Primary icon="🌐">{blog.language.label()}</Badge>
                <time class="text-sm text-gray-500" title=format_date(date)>{time_ago(date)}</time>
            </div>
            <a href=href>
                <h2 class="text-xl font-bold text-gray-900 mb-3 group-hover:text-blue-600 transition-colors line-clamp-2">
                    {blog.title.clone()}
                </h2>
            </a>
            <p class="text-gray-600 mb-6 leading-relaxed line-clamp-3">
                {truncate_text(&preview, PREVIEW_CHARS)}
            </p>
            <div class="flex items-center justify-between pt-4 border-t border-gray-100">
                <div class="flex items-center space-x-4 text-sm text-gray-500">
                    <span class="flex items-center">"♥ "{blog.likes_count}</span>
                    <span class="flex items-center">"💬 "{blog.comments_count}</span>
                </div>
                <span class="text-sm text-gray-400">{format_date(date)}</span>
            </div>
        </Card>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="text-center py-20">
            <div class="max-w-md mx-auto">
                <div class="w-24 h-24 bg-gradient-to-br from-blue-100 to-purple-100 rounded-full flex items-center justify-center mx-auto mb-6 text-4xl">
                    "🌐"
                </div>
                <h3 class="text-2xl font-bold text-gray-900 mb-2">"No blogs found"</h3>
                <p class="text-gray-600">"Check back later for amazing content!"</p>
            </div>
        </div>
    }
}
