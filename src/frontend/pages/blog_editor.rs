//! Post editor: create, edit, preview versions, publish.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::config::{AUDIENCE_PAGE_SIZE, ClientConfig};
use crate::frontend::auth::use_auth;
use crate::frontend::components::{
    Alert, Button, ButtonSize, ButtonVariant, Card, CardPadding, Loading, LoadingSize,
};
use crate::frontend::toast::use_toasts;
use crate::frontend::upload::{read_file, selected_file};
use crate::log_err;
use crate::models::{AudienceKind, BlogVersion, Language, resolve_asset_url};
use crate::state::{EditorState, PublishPlan, validate_image_upload};
use crate::types::AudiencePage;
use crate::utils::{format_date, format_date_time, time_ago};

#[component]
pub fn BlogEditorPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let config = expect_context::<ClientConfig>();
    let asset_base = StoredValue::new(config.asset_base_url);
    let params = use_params_map();
    let blog_id = Memo::new(move |_| params.with(|p| p.get("id")).filter(|id| !id.is_empty()));
    let is_editing = move || blog_id.with(Option::is_some);

    let editor = RwSignal::new(EditorState::default());
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let reload = RwSignal::new(0u32);
    let redirect = RwSignal::new(None::<String>);

    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(path) = redirect.get() {
            navigate(&path, Default::default());
        }
    });

    Effect::new(move |_| {
        let reloads = reload.get();
        let Some(id) = blog_id.get() else {
            editor.set(EditorState::default());
            return;
        };
        let api = auth.api();
        if reloads == 0 {
            loading.set(true);
        }

        spawn_local(async move {
            match api.get_blog(&id).await {
                Ok(post) => editor.update(|e| e.load(post.blog, post.versions)),
                Err(e) => {
                    log_err!(e, "Failed to load blog");
                    toasts.error(e.user_message("Failed to load blog"));
                    redirect.set(Some("/admin".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let create = move |publish: bool| {
        let request = match editor.with_untracked(EditorState::create_request) {
            Ok(request) => request,
            Err(e) => {
                toasts.error(e.to_string());
                return;
            }
        };
        let api = auth.api();
        saving.set(true);

        spawn_local(async move {
            match api.create_blog_with_status(&request, publish).await {
                Ok(_) => {
                    toasts.success(format!(
                        "Blog {} successfully",
                        if publish { "published" } else { "saved as draft" }
                    ));
                    redirect.set(Some("/admin".to_string()));
                }
                Err(e) => {
                    log_err!(e, "Failed to save blog");
                    toasts.error(e.user_message("Failed to save blog"));
                }
            }
            saving.set(false);
        });
    };

    let save_draft = move || {
        let Some(id) = blog_id.get_untracked() else {
            create(false);
            return;
        };
        let request = match editor.with_untracked(EditorState::draft_request) {
            Ok(request) => request,
            Err(e) => {
                toasts.error(e.to_string());
                return;
            }
        };
        let api = auth.api();
        saving.set(true);

        spawn_local(async move {
            match api.update_blog(&id, &request).await {
                Ok(_) => {
                    editor.update(EditorState::mark_unpublished);
                    toasts.success("Draft version created");
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log_err!(e, "Failed to save blog");
                    toasts.error(e.user_message("Failed to save blog"));
                }
            }
            saving.set(false);
        });
    };

    let toggle_publish = move || {
        let Some(id) = blog_id.get_untracked() else {
            create(true);
            return;
        };
        let plan = match editor.with_untracked(EditorState::publish_plan) {
            None => return,
            Some(Err(e)) => {
                toasts.error(e.to_string());
                return;
            }
            Some(Ok(plan)) => plan,
        };
        let api = auth.api();
        saving.set(true);

        spawn_local(async move {
            match api.run_publish_plan(&id, &plan).await {
                Ok(()) => {
                    if plan == PublishPlan::Unpublish {
                        toasts.success("Blog unpublished");
                    } else {
                        editor.update(EditorState::published);
                        toasts.success("Blog published");
                    }
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log_err!(e, "Failed to update blog status");
                    toasts.error(e.user_message("Failed to update blog status"));
                }
            }
            saving.set(false);
        });
    };

    let revert = move || {
        let reverted = editor.try_update(EditorState::revert_to_preview).unwrap_or(false);
        if reverted {
            toasts.success("Loaded into editor. Publish to update live, or Save as Draft to store as a new version.");
        }
    };

    let on_image = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = selected_file(&input) else {
            return;
        };
        input.set_value("");
        if let Err(e) = validate_image_upload(&file.name(), file.size() as u64) {
            toasts.error(e.to_string());
            return;
        }
        let api = auth.api();
        uploading.set(true);

        spawn_local(async move {
            let uploaded = match read_file(file).await {
                Ok(picked) => api.upload_image(&picked.name, picked.bytes, &picked.mime).await,
                Err(e) => Err(e),
            };
            match uploaded {
                Ok(image) => {
                    let url = asset_base.with_value(|base| resolve_asset_url(base, &image.url));
                    editor.update(|e| e.insert_image(&url));
                    toasts.success("Image uploaded");
                }
                Err(e) => {
                    log_err!(e, "Failed to upload image");
                    toasts.error(e.user_message("Failed to upload image"));
                }
            }
            uploading.set(false);
        });
    };

    let previewing_version = move || editor.with(EditorState::is_previewing_version);
    let blog_published = move || editor.with(|e| e.blog.as_ref().is_some_and(|b| b.is_published));
    let has_blog = move || editor.with(|e| e.blog.is_some());

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <Loading size=LoadingSize::Xl text="Loading blog..." /> }
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <StatsStrip editor=editor />

                <div class="mb-8">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-4">
                            <a href="/admin" class="text-gray-600 hover:text-gray-900 text-2xl" title="Back to Dashboard">"←"</a>
                            <div>
                                <h1 class="text-3xl font-bold text-gray-900">
                                    {move || if is_editing() { "Edit Blog Post" } else { "Create New Blog Post" }}
                                </h1>
                                {move || editor.with(|e| e.blog.as_ref().map(|b| format!(
                                    "{} • Last updated: {}",
                                    b.status_label(),
                                    format_date_time(b.updated_at)
                                ))).map(|line| view! { <p class="text-gray-600 mt-1">{line}</p> })}
                            </div>
                        </div>

                        <div class="flex items-center space-x-3">
                            <button
                                type="button"
                                class=move || if editor.with(|e| e.show_preview) {
                                    "inline-flex items-center px-3 py-2 border border-transparent rounded-md shadow-sm text-sm font-medium bg-blue-600 text-white hover:bg-blue-700"
                                } else {
                                    "inline-flex items-center px-3 py-2 border border-blue-200 rounded-md shadow-sm text-sm font-medium bg-blue-50 text-blue-700 hover:bg-blue-100"
                                }
                                on:click=move |_| editor.update(EditorState::toggle_preview)
                            >
                                {move || if editor.with(|e| e.show_preview) { "Exit Preview" } else { "Preview" }}
                            </button>

                            <Show when=move || !previewing_version()>
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    button_type="button"
                                    loading=saving
                                    loading_text="Saving..."
                                    on_click=Callback::new(move |_| save_draft())
                                >
                                    "Save as Draft"
                                </Button>
                            </Show>

                            <Show when=move || !previewing_version() && (!is_editing() || has_blog())>
                                <button
                                    type="button"
                                    disabled=move || saving.get()
                                    class=move || if blog_published() {
                                        "inline-flex items-center px-3 py-2 rounded-md shadow-sm text-sm font-medium text-white bg-yellow-600 hover:bg-yellow-700 disabled:opacity-50"
                                    } else {
                                        "inline-flex items-center px-3 py-2 rounded-md shadow-sm text-sm font-medium text-white bg-green-600 hover:bg-green-700 disabled:opacity-50"
                                    }
                                    on:click=move |_| toggle_publish()
                                >
                                    {move || if blog_published() { "Unpublish" } else { "Publish" }}
                                </button>
                            </Show>
                        </div>
                    </div>

                    <Show when=previewing_version>
                        <Alert
                            class="mt-3"
                            message="Previewing an earlier version. Revert to load it into the editor."
                        >
                            <button
                                type="button"
                                class="inline-flex items-center px-3 py-2 rounded-md bg-blue-600 text-white hover:bg-blue-700"
                                on:click=move |_| revert()
                            >
                                "Revert to this version"
                            </button>
                            <button
                                type="button"
                                class="inline-flex items-center px-3 py-2 rounded-md border border-blue-300 text-blue-700 hover:bg-blue-100"
                                on:click=move |_| editor.update(EditorState::exit_version_preview)
                            >
                                "Exit preview"
                            </button>
                        </Alert>
                    </Show>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
                    <div class="lg:col-span-3">
                        <Show when=move || editor.with(|e| e.show_preview) fallback=move || view! { <EditorForm editor=editor /> }>
                            <div class="bg-white border border-gray-300 rounded-lg p-6">
                                <h2 class="text-2xl font-bold text-gray-900 mb-4">
                                    {move || editor.with(|e| e.preview_title().to_string())}
                                </h2>
                                <div
                                    class="prose prose-lg max-w-none"
                                    inner_html=move || editor.with(|e| e.preview_content().to_string())
                                ></div>
                            </div>
                        </Show>
                    </div>

                    <div class="lg:col-span-1 space-y-6">
                        <LanguagePicker editor=editor />

                        <Card padding=CardPadding::Sm>
                            <h3 class="text-sm font-medium text-gray-700 mb-3">"Custom Publish Date"</h3>
                            <input
                                type="datetime-local"
                                class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm text-sm"
                                prop:value=move || editor.with(|e| e.custom_date.clone())
                                on:input=move |ev| editor.update(|e| e.custom_date = event_target_value(&ev))
                            />
                            <p class="text-xs text-gray-500 mt-1">"Leave empty to use current date when publishing"</p>
                        </Card>

                        <Card padding=CardPadding::Sm>
                            <h3 class="text-sm font-medium text-gray-700 mb-3">"Images"</h3>
                            <input
                                type="file"
                                accept="image/jpeg,image/png,image/gif,image/webp"
                                class="w-full text-sm"
                                disabled=move || uploading.get()
                                on:change=on_image
                            />
                            <Show when=move || uploading.get()>
                                <p class="text-xs text-gray-500 mt-2">"Uploading..."</p>
                            </Show>
                        </Card>

                        <StatisticsCard editor=editor />
                        <VersionList editor=editor />

                        {move || blog_id.get().map(|id| view! { <AudiencePanel blog_id=id /> })}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn EditorForm(editor: RwSignal<EditorState>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <label for="title" class="block text-sm font-medium text-gray-700 mb-2">"Blog Title"</label>
                <input
                    type="text"
                    id="title"
                    placeholder="Enter your blog title..."
                    class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500 text-lg"
                    prop:value=move || editor.with(|e| e.title.clone())
                    on:input=move |ev| editor.update(|e| e.title = event_target_value(&ev))
                />
            </div>
            <div>
                <label for="content" class="block text-sm font-medium text-gray-700 mb-2">"Content (HTML)"</label>
                <textarea
                    id="content"
                    rows="20"
                    placeholder="Start writing your blog post..."
                    class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm font-mono text-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                    prop:value=move || editor.with(|e| e.content.clone())
                    on:input=move |ev| editor.update(|e| e.content = event_target_value(&ev))
                ></textarea>
            </div>
        </div>
    }
}

#[component]
fn LanguagePicker(editor: RwSignal<EditorState>) -> impl IntoView {
    view! {
        <Card padding=CardPadding::Sm>
            <h3 class="text-sm font-medium text-gray-700 mb-3">"Language"</h3>
            <div class="space-y-2">
                {Language::ALL
                    .into_iter()
                    .map(|language| view! {
                        <label class="flex items-center">
                            <input
                                type="radio"
                                name="language"
                                value=language.as_str()
                                class="mr-2"
                                prop:checked=move || editor.with(|e| e.language == language)
                                on:change=move |_| editor.update(|e| e.language = language)
                            />
                            {match language {
                                Language::English => "English",
                                Language::Devanagari => "देवनागरी (Devanagari)",
                            }}
                        </label>
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn StatsStrip(editor: RwSignal<EditorState>) -> impl IntoView {
    move || {
        editor.with(|e| e.blog.clone()).map(|blog| view! {
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-6 text-sm">
                <div class="bg-white border border-gray-200 rounded-lg p-3 flex items-center justify-between">
                    <span class="text-gray-600">"Status"</span>
                    <span class=if blog.is_published { "text-green-600" } else { "text-yellow-600" }>
                        {blog.status_label()}
                    </span>
                </div>
                <div class="bg-white border border-gray-200 rounded-lg p-3 flex items-center justify-between">
                    <span class="text-gray-600">"Likes"</span>
                    <span class="text-gray-900">{blog.likes_count}</span>
                </div>
                <div class="bg-white border border-gray-200 rounded-lg p-3 flex items-center justify-between">
                    <span class="text-gray-600">"Comments"</span>
                    <span class="text-gray-900">{blog.comments_count}</span>
                </div>
            </div>
        })
    }
}

#[component]
fn StatisticsCard(editor: RwSignal<EditorState>) -> impl IntoView {
    move || {
        editor.with(|e| e.blog.clone()).map(|blog| view! {
            <Card padding=CardPadding::Sm>
                <h3 class="text-sm font-medium text-gray-700 mb-3">"Statistics"</h3>
                <div class="space-y-2 text-sm text-gray-600">
                    <div class="flex justify-between">
                        <span>"Status:"</span>
                        <span class=if blog.is_published { "text-green-600" } else { "text-yellow-600" }>
                            {blog.status_label()}
                        </span>
                    </div>
                    <div class="flex justify-between"><span>"Likes:"</span><span>{blog.likes_count}</span></div>
                    <div class="flex justify-between"><span>"Comments:"</span><span>{blog.comments_count}</span></div>
                    <div class="flex justify-between"><span>"Views:"</span><span>{blog.views_count}</span></div>
                    <div class="flex justify-between"><span>"Created:"</span><span>{format_date(blog.created_at)}</span></div>
                </div>
            </Card>
        })
    }
}

#[component]
fn VersionList(editor: RwSignal<EditorState>) -> impl IntoView {
    view! {
        <Show when=move || editor.with(|e| e.blog.is_some() && !e.versions.is_empty())>
            <Card padding=CardPadding::Sm>
                <h3 class="text-sm font-medium text-gray-700 mb-3">"Previous Versions"</h3>
                <ul class="space-y-2 max-h-64 overflow-auto text-sm">
                    <For
                        each=move || editor.with(|e| e.visible_versions().to_vec())
                        key=|version| version.id.clone()
                        children=move |version| view! { <VersionItem editor=editor version=version /> }
                    />
                </ul>
                <Show when=move || editor.with(EditorState::has_version_pages)>
                    <div class="flex items-center justify-between pt-2">
                        <button
                            type="button"
                            class="text-xs px-2 py-1 border rounded disabled:opacity-50"
                            disabled=move || editor.with(|e| e.versions_page <= 1)
                            on:click=move |_| editor.update(EditorState::prev_versions_page)
                        >
                            "Prev"
                        </button>
                        <span class="text-xs text-gray-500">
                            {move || editor.with(|e| format!("Page {} of {}", e.versions_page, e.version_pages()))}
                        </span>
                        <button
                            type="button"
                            class="text-xs px-2 py-1 border rounded disabled:opacity-50"
                            disabled=move || editor.with(|e| e.versions_page >= e.version_pages())
                            on:click=move |_| editor.update(EditorState::next_versions_page)
                        >
                            "Next"
                        </button>
                    </div>
                </Show>
            </Card>
        </Show>
    }
}

#[component]
fn VersionItem(editor: RwSignal<EditorState>, version: BlogVersion) -> impl IntoView {
    let viewing = {
        let version = version.clone();
        move || editor.with(|e| e.is_viewing(&version))
    };
    let live = {
        let version = version.clone();
        move || editor.with(|e| e.is_live(&version))
    };
    let created = format_date_time(version.created_at);
    let title = if version.title.is_empty() {
        "Untitled".to_string()
    } else {
        version.title.clone()
    };

    view! {
        <li class={
            let viewing = viewing.clone();
            move || if viewing() {
                "flex items-center justify-between gap-2 bg-blue-50 rounded-md"
            } else {
                "flex items-center justify-between gap-2"
            }
        }>
            <button
                type="button"
                class="flex-1 min-w-0 text-left hover:underline"
                on:click=move |_| {
                    let version = version.clone();
                    editor.update(|e| e.preview_version(version));
                }
            >
                <div class="truncate font-medium text-gray-900 flex items-center gap-2">
                    {created}
                    <Show when=viewing.clone()>
                        <span class="text-xs text-blue-700">"(Viewing)"</span>
                    </Show>
                </div>
                <div class="text-xs text-gray-500 truncate">{title}</div>
                <Show when=live.clone()>
                    <div class="text-xs text-green-600">"(Published)"</div>
                </Show>
            </button>
        </li>
    }
}

#[component]
fn AudiencePanel(blog_id: String) -> impl IntoView {
    let auth = use_auth();
    let kind = RwSignal::new(AudienceKind::Likers);
    let page = RwSignal::new(1u32);
    let audience = RwSignal::new(AudiencePage::default());
    let loading = RwSignal::new(false);

    Effect::new(move |_| {
        let kind = kind.get();
        let page = page.get();
        let api = auth.api();
        let blog_id = blog_id.clone();
        loading.set(true);

        spawn_local(async move {
            match api.audience(kind, &blog_id, page, AUDIENCE_PAGE_SIZE).await {
                Ok(result) => audience.set(result),
                Err(e) => {
                    log_err!(e, "Failed to load audience");
                    audience.set(AudiencePage::default());
                }
            }
            loading.set(false);
        });
    });

    let tab_class = move |tab: AudienceKind| {
        if kind.get() == tab {
            "text-xs px-2 py-1 rounded bg-blue-600 text-white"
        } else {
            "text-xs px-2 py-1 rounded border border-gray-300 text-gray-600"
        }
    };
    let total_pages = move || audience.with(|a| a.pagination.total_pages.max(1));

    view! {
        <Card padding=CardPadding::Sm>
            <div class="flex items-center justify-between mb-3">
                <h3 class="text-sm font-medium text-gray-700">{move || kind.get().label()}</h3>
                <div class="flex gap-1">
                    {[AudienceKind::Likers, AudienceKind::Viewers]
                        .into_iter()
                        .map(|tab| view! {
                            <button
                                type="button"
                                class=move || tab_class(tab)
                                on:click=move |_| {
                                    kind.set(tab);
                                    page.set(1);
                                }
                            >
                                {match tab {
                                    AudienceKind::Likers => "Likes",
                                    AudienceKind::Viewers => "Views",
                                }}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>

            <Show
                when=move || audience.with(|a| !a.items.is_empty())
                fallback=move || view! {
                    <p class="text-xs text-gray-500">
                        {move || if loading.get() { "Loading..." } else { "Nobody yet." }}
                    </p>
                }
            >
                <ul class="space-y-2 text-sm">
                    <For
                        each=move || audience.with(|a| a.items.clone())
                        key=|entry| entry.id.clone()
                        children=|entry| view! {
                            <li class="flex items-center justify-between gap-2">
                                <span class="truncate text-gray-900">{entry.display.clone()}</span>
                                <span class="text-xs text-gray-500 whitespace-nowrap">{time_ago(entry.created_at)}</span>
                            </li>
                        }
                    />
                </ul>
            </Show>

            <Show when=move || audience.with(|a| a.pagination.total_pages > 1)>
                <div class="flex items-center justify-between pt-2">
                    <button
                        type="button"
                        class="text-xs px-2 py-1 border rounded disabled:opacity-50"
                        disabled=move || page.get() <= 1
                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "Prev"
                    </button>
                    <span class="text-xs text-gray-500">
                        {move || format!("Page {} of {}", page.get(), total_pages())}
                    </span>
                    <button
                        type="button"
                        class="text-xs px-2 py-1 border rounded disabled:opacity-50"
                        disabled=move || page.get() >= total_pages()
                        on:click=move |_| page.update(|p| *p = (*p + 1).min(total_pages()))
                    >
                        "Next"
                    </button>
                </div>
            </Show>
        </Card>
    }
}
