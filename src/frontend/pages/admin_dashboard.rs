//! Admin dashboard: every post, drafts included.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ADMIN_PAGE_SIZE;
use crate::frontend::auth::use_auth;
use crate::frontend::components::{Badge, BadgeSize, BadgeVariant, Loading, LoadingSize, PaginationBar};
use crate::frontend::toast::use_toasts;
use crate::log_err;
use crate::models::{Blog, Language, SortBy};
use crate::state::{DashboardStats, ListingState};
use crate::utils::{format_date_time, strip_html, truncate_text};

const PREVIEW_CHARS: usize = 160;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let listing = RwSignal::new(ListingState::new(ADMIN_PAGE_SIZE));
    let blogs = RwSignal::new(Vec::<Blog>::new());
    let loading = RwSignal::new(true);
    let refetching = RwSignal::new(false);
    let reload = RwSignal::new(0u32);
    let query = Memo::new(move |_| listing.with(|l| l.query(false)));
    let stats = Memo::new(move |_| blogs.with(|b| DashboardStats::from_blogs(b)));

    Effect::new(move |_| {
        let query = query.get();
        reload.track();
        let api = auth.api();
        if !loading.get_untracked() {
            refetching.set(true);
        }

        spawn_local(async move {
            match api.admin_list_blogs(&query).await {
                Ok(page) => {
                    listing.update(|l| l.apply(&page.pagination));
                    blogs.set(page.blogs);
                }
                Err(e) => {
                    log_err!(e, "Failed to fetch blogs");
                    toasts.error("Failed to fetch blogs");
                }
            }
            loading.set(false);
            refetching.set(false);
        });
    });

    let toggle_publish = move |id: String, published: bool| {
        let api = auth.api();
        spawn_local(async move {
            let result = if published {
                api.unpublish_blog(&id).await
            } else {
                api.publish_blog(&id).await
            };
            match result {
                Ok(_) => {
                    toasts.success(if published { "Blog unpublished" } else { "Blog published" });
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log_err!(e, "Failed to update blog status");
                    toasts.error(e.user_message("Failed to update blog status"));
                }
            }
        });
    };

    let delete = move |id: String, title: String| {
        let confirmed = window()
            .confirm_with_message(&format!("Are you sure you want to delete \"{}\"?", title))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let api = auth.api();
        spawn_local(async move {
            match api.delete_blog(&id).await {
                Ok(_) => {
                    toasts.success("Blog deleted successfully");
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log_err!(e, "Failed to delete blog");
                    toasts.error(e.user_message("Failed to delete blog"));
                }
            }
        });
    };

    let on_language = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        listing.update(|l| l.set_language(value.parse::<Language>().ok()));
    };
    let on_sort = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if let Ok(sort_by) = value.parse::<SortBy>() {
            listing.update(|l| l.set_sort(sort_by));
        }
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <Loading size=LoadingSize::Xl text="Loading dashboard..." /> }
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="mb-8 flex justify-between items-center">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900">"Admin Dashboard"</h1>
                        <p class="text-gray-600 mt-2">"Manage your blog posts"</p>
                    </div>
                    <a
                        href="/admin/blog/new"
                        class="inline-flex items-center px-4 py-2 rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                    >
                        "+ New Blog Post"
                    </a>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                    <StatCard icon="📊" label="Lifetime Views" value=Signal::derive(move || stats.get().views.to_string()) />
                    <StatCard icon="📝" label="Draft Blogs" value=Signal::derive(move || stats.get().drafts.to_string()) />
                    <StatCard icon="🌐" label="Total Blogs" value=Signal::derive(move || stats.get().total.to_string()) />
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-6">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Language"</label>
                        <select
                            class="w-full rounded-md border border-gray-300 px-3 py-2"
                            prop:value=move || listing.with(|l| l.language.map(|lang| lang.as_str()).unwrap_or(""))
                            on:change=on_language
                        >
                            <option value="">"All"</option>
                            {Language::ALL
                                .into_iter()
                                .map(|lang| view! { <option value=lang.as_str()>{lang.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Sort By"</label>
                        <select
                            class="w-full rounded-md border border-gray-300 px-3 py-2"
                            prop:value=move || listing.with(|l| l.sort_by.as_str())
                            on:change=on_sort
                        >
                            {SortBy::ALL
                                .into_iter()
                                .map(|sort| view! { <option value=sort.as_str()>{sort.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="hidden sm:block"></div>
                </div>

                <div class="flex items-center justify-between mb-3 text-sm text-gray-600">
                    <div>
                        {move || listing.with(ListingState::showing_range).map(|(first, last, total)| {
                            format!("Showing {}–{} of {}", first, last, total)
                        })}
                    </div>
                    <PaginationBar listing=listing />
                </div>

                <Show
                    when=move || blogs.with(|b| !b.is_empty())
                    fallback=|| view! {
                        <div class="text-center py-12">
                            <p class="text-gray-500 text-lg mb-4">"No blogs found."</p>
                            <a
                                href="/admin/blog/new"
                                class="inline-flex items-center px-4 py-2 rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                            >
                                "+ Create your first blog post"
                            </a>
                        </div>
                    }
                >
                    <div
                        class="bg-white shadow overflow-hidden sm:rounded-md transition-opacity"
                        class:opacity-60=move || refetching.get()
                    >
                        <ul class="divide-y divide-gray-200">
                            <For
                                each=move || blogs.get()
                                key=|blog| (blog.id.clone(), blog.updated_at, blog.is_published)
                                children=move |blog| {
                                    let id = blog.id.clone();
                                    let title = blog.title.clone();
                                    let published = blog.is_published;
                                    view! {
                                        <BlogRow
                                            blog=blog
                                            on_toggle=Callback::new({
                                                let id = id.clone();
                                                move |_| toggle_publish(id.clone(), published)
                                            })
                                            on_delete=Callback::new(move |_| delete(id.clone(), title.clone()))
                                        />
                                    }
                                }
                            />
                        </ul>
                    </div>
                </Show>

                <PaginationBar listing=listing />
            </div>
        </Show>
    }
}

#[component]
fn StatCard(icon: &'static str, label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-white overflow-hidden shadow rounded-lg p-5 flex items-center">
            <div class="h-8 w-8 bg-blue-100 rounded-md flex items-center justify-center">{icon}</div>
            <dl class="ml-5 flex-1">
                <dt class="text-sm font-medium text-gray-500 truncate">{label}</dt>
                <dd class="text-lg font-medium text-gray-900">{move || value.get()}</dd>
            </dl>
        </div>
    }
}

#[component]
fn BlogRow(blog: Blog, on_toggle: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    let edit_href = format!("/admin/blog/edit/{}", blog.id);
    let view_href = format!("/blog/{}", blog.id);
    let published = blog.is_published;
    let status_variant = if published { BadgeVariant::Success } else { BadgeVariant::Warning };
    let preview = truncate_text(&strip_html(&blog.preview), PREVIEW_CHARS);
    let title = strip_html(&blog.title);
    let status_label = blog.status_label();
    let language_label = blog.language.label();
    let date = format_date_time(blog.display_date());
    let (likes, comments, views) = (blog.likes_count, blog.comments_count, blog.views_count);

    view! {
        <li class="px-6 py-4">
            <div class="flex items-center justify-between">
                <a href=edit_href.clone() class="flex-1 min-w-0 block group">
                    <div class="flex items-center space-x-3">
                        <h3 class="text-lg font-medium text-gray-900 truncate">{title}</h3>
                        <Badge variant=status_variant size=BadgeSize::Sm>{status_label}</Badge>
                        <Badge variant=BadgeVariant::Primary size=BadgeSize::Sm icon="🌐">{language_label}</Badge>
                    </div>
                    <p class="text-sm text-gray-600 mt-1">{preview}</p>
                    <div class="flex items-center space-x-4 mt-2 text-xs text-gray-500">
                        <span>{date}</span>
                        <span>{likes}" likes"</span>
                        <span>{comments}" comments"</span>
                        <span>{views}" views"</span>
                    </div>
                </a>
                <div class="flex items-center space-x-3 ml-4 text-sm">
                    {published.then(|| view! {
                        <a href=view_href class="text-blue-600 hover:text-blue-800" title="View blog">"View"</a>
                    })}
                    <a href=edit_href class="text-gray-600 hover:text-gray-800" title="Edit blog">"Edit"</a>
                    <button
                        type="button"
                        class=if published { "text-yellow-600 hover:text-yellow-800" } else { "text-green-600 hover:text-green-800" }
                        title=if published { "Unpublish" } else { "Publish" }
                        on:click=move |_| on_toggle.run(())
                    >
                        {if published { "Unpublish" } else { "Publish" }}
                    </button>
                    <button
                        type="button"
                        class="text-red-600 hover:text-red-800"
                        title="Delete blog"
                        on:click=move |_| on_delete.run(())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(published: bool) -> Blog {
        serde_json::from_value(serde_json::json!({
            "id": "42",
            "title": "<b>Monsoon</b> notes",
            "preview": "Rain on the roof",
            "language": "devanagari",
            "is_published": published,
            "likes_count": 3,
            "comments_count": 1,
            "views_count": 9,
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": "2024-03-02T10:00:00Z"
        }))
        .unwrap()
    }

    fn render_row(blog: Blog) -> String {
        let owner = Owner::new();
        owner.set();
        view! {
            <BlogRow blog=blog on_toggle=Callback::new(|_| {}) on_delete=Callback::new(|_| {}) />
        }
        .to_html()
    }

    #[test]
    fn test_blog_row_renders_draft() {
        let html = render_row(blog(false));
        assert!(html.contains("Draft"));
        assert!(html.contains(Language::Devanagari.label()));
        assert!(html.contains("Monsoon notes"));
        assert!(html.contains("/admin/blog/edit/42"));
        assert!(!html.contains("href=\"/blog/42\""));
    }

    #[test]
    fn test_blog_row_links_published_post() {
        let html = render_row(blog(true));
        assert!(html.contains("Published"));
        assert!(html.contains("href=\"/blog/42\""));
        assert!(html.contains("Unpublish"));
    }
}
