use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::config::ClientConfig;
use crate::frontend::auth::use_auth;
use crate::frontend::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, Loading, LoadingSize,
};
use crate::frontend::toast::use_toasts;
use crate::log_err;
use crate::models::{Blog, Comment};
use crate::state::{CommentDraft, EngagementState, LikeAction};
use crate::utils::{format_date, strip_html, time_ago};

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let asset_base = StoredValue::new(expect_context::<ClientConfig>().asset_base_url);
    let params = use_params_map();
    let navigate = use_navigate();
    let blog_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let blog = RwSignal::new(None::<Blog>);
    let comments = RwSignal::new(Vec::<Comment>::new());
    let engagement = RwSignal::new(EngagementState::default());
    let loading = RwSignal::new(true);

    let show_form = RwSignal::new(false);
    let draft = RwSignal::new(CommentDraft::for_user(false));
    let submitting = RwSignal::new(false);

    // logged-in readers comment under their name by default
    Effect::new(move |_| {
        let logged_in = auth.is_authenticated();
        draft.update(|d| d.anonymous = !logged_in);
    });

    Effect::new(move |_| {
        let id = blog_id.get();
        if id.is_empty() {
            return;
        }
        let api = auth.api();
        let navigate = navigate.clone();
        loading.set(true);

        spawn_local(async move {
            let (post, list, status) = futures::join!(
                api.get_blog(&id),
                api.comments(&id),
                api.like_status(&id),
            );

            match post {
                Ok(post) => {
                    // like status needs a session; treat any failure as "not liked"
                    let liked = status.map(|s| s.liked).unwrap_or(false);
                    engagement.set(EngagementState::from_blog(&post.blog, liked));
                    blog.set(Some(post.blog));
                    match list {
                        Ok(list) => comments.set(list.comments),
                        Err(e) => log_err!(e, "Error fetching comments"),
                    }
                }
                Err(e) => {
                    log_err!(e, "Error fetching blog");
                    toasts.error("Failed to load blog post");
                    navigate("/", Default::default());
                }
            }
            loading.set(false);
        });
    });

    let toggle_like = move || {
        let Some(id) = blog.with_untracked(|b| b.as_ref().map(|b| b.id.clone())) else {
            return;
        };
        let action = engagement.with_untracked(EngagementState::toggle_like);
        let api = auth.api();

        spawn_local(async move {
            let result = match action {
                LikeAction::Like => api.like(&id).await,
                LikeAction::Unlike => api.unlike(&id).await,
            };
            match result {
                Ok(_) => {
                    let liked = action == LikeAction::Like;
                    engagement.update(|e| e.confirm_like(liked));
                    toasts.success(if liked { "💖 Liked!" } else { "❤️ Removed like" });
                }
                Err(e) => {
                    log_err!(e, "Error toggling like");
                    toasts.error("Failed to update like status");
                }
            }
        });
    };

    let submit_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = blog_id.get_untracked();
        let user = auth.session.with_untracked(|s| s.user.clone());
        let request = match draft.with_untracked(|d| d.to_request(&id, user.as_ref())) {
            Ok(request) => request,
            Err(e) => {
                toasts.error(e.to_string());
                return;
            }
        };
        let api = auth.api();
        submitting.set(true);

        spawn_local(async move {
            match api.create_comment(&request).await {
                Ok(_) => {
                    match api.comments(&id).await {
                        Ok(list) => comments.set(list.comments),
                        Err(e) => log_err!(e, "Error refreshing comments"),
                    }
                    engagement.update(EngagementState::comment_added);
                    draft.update(|d| d.text.clear());
                    show_form.set(false);
                    toasts.success("💬 Comment added successfully!");
                }
                Err(e) => {
                    log_err!(e, "Error adding comment");
                    toasts.error("Failed to add comment");
                }
            }
            submitting.set(false);
        });
    };

    let toggle_form = Callback::new(move |_| show_form.update(|v| *v = !*v));

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <Loading size=LoadingSize::Xl text="Loading blog post..." full_screen=true /> }
        >
            {move || match blog.get() {
                None => view! {
                    <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8 text-center">
                        <h1 class="text-3xl font-bold text-gray-900">"Blog post not found"</h1>
                        <Button href="/" class="mt-4">"Go back home"</Button>
                    </div>
                }.into_any(),
                Some(post) => {
                    let cover = asset_base.with_value(|base| post.cover_image(base));
                    view! {
                        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                            <div class="mb-8">
                                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm href="/">
                                    "← Back to Blog List"
                                </Button>
                            </div>

                            <header class="mb-8">
                                <div class="flex flex-wrap items-center gap-4 mb-6">
                                    <Badge variant=BadgeVariant::Primary icon="🌐">{post.language.label()}</Badge>
                                    <time class="text-sm text-gray-500">{format_date(post.display_date())}</time>
                                </div>
                                <h1 class="text-4xl sm:text-5xl font-bold bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 bg-clip-text text-transparent mb-4 leading-tight">
                                    {strip_html(&post.title)}
                                </h1>
                                {cover.map(|src| view! {
                                    <div class="mb-8 rounded-2xl overflow-hidden shadow-2xl">
                                        <img src=src alt=post.title.clone() class="w-full h-64 sm:h-96 object-cover" />
                                    </div>
                                })}
                            </header>

                            <Card class="mb-8">
                                <div
                                    class=format!("prose prose-lg max-w-none lang-{}", post.language.as_str())
                                    inner_html=post.content.clone()
                                ></div>
                            </Card>

                            <Card class="mb-12">
                                <div class="flex items-center justify-between">
                                    <div class="flex items-center space-x-6">
                                        <div class="flex items-center space-x-2 text-gray-600" title="Views">
                                            <span>"👁"</span>
                                            <span class="font-medium">{post.views_count}</span>
                                        </div>
                                        <Show when=move || auth.is_authenticated()>
                                            <button
                                                type="button"
                                                class=move || if engagement.with(|e| e.liked) {
                                                    "flex items-center space-x-2 px-4 py-2 rounded-full bg-red-50 text-red-600 hover:bg-red-100"
                                                } else {
                                                    "flex items-center space-x-2 px-4 py-2 rounded-full bg-gray-50 text-gray-600 hover:bg-gray-100 hover:text-red-600"
                                                }
                                                on:click=move |_| toggle_like()
                                            >
                                                <span>{move || if engagement.with(|e| e.liked) { "♥" } else { "♡" }}</span>
                                                <span class="font-medium">{move || engagement.with(|e| e.likes_count)}</span>
                                            </button>
                                        </Show>
                                        <button
                                            type="button"
                                            class="flex items-center space-x-2 px-4 py-2 rounded-full bg-blue-50 text-blue-600 hover:bg-blue-100"
                                            on:click=move |ev| toggle_form.run(ev)
                                        >
                                            <span>"💬"</span>
                                            <span class="font-medium">{move || engagement.with(|e| e.comments_count)}</span>
                                        </button>
                                    </div>
                                    <Button size=ButtonSize::Sm button_type="button" on_click=toggle_form>
                                        "Add Comment"
                                    </Button>
                                </div>
                            </Card>

                            <Show when=move || show_form.get()>
                                <Card class="mb-8">
                                    <h3 class="text-xl font-bold text-gray-900 mb-4">"Add a Comment"</h3>
                                    <form class="space-y-4" on:submit=submit_comment>
                                        <div class="flex items-center space-x-3">
                                            <button
                                                type="button"
                                                class=move || if draft.with(|d| !d.anonymous) {
                                                    "px-3 py-2 rounded-lg text-sm bg-blue-600 text-white"
                                                } else {
                                                    "px-3 py-2 rounded-lg text-sm bg-gray-50 text-gray-600"
                                                }
                                                on:click=move |_| draft.update(|d| d.anonymous = false)
                                            >
                                                "Comment as username"
                                            </button>
                                            <button
                                                type="button"
                                                class=move || if draft.with(|d| d.anonymous) {
                                                    "px-3 py-2 rounded-lg text-sm bg-blue-50 text-blue-600"
                                                } else {
                                                    "px-3 py-2 rounded-lg text-sm bg-gray-50 text-gray-600"
                                                }
                                                on:click=move |_| draft.update(|d| d.anonymous = true)
                                            >
                                                "Comment anonymously"
                                            </button>
                                        </div>
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700 mb-1">"Your Comment *"</label>
                                            <textarea
                                                rows="4"
                                                required=true
                                                placeholder="Share your thoughts..."
                                                class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent resize-none"
                                                prop:value=move || draft.with(|d| d.text.clone())
                                                on:input=move |ev| draft.update(|d| d.text = event_target_value(&ev))
                                            ></textarea>
                                        </div>
                                        <div class="flex items-center space-x-3">
                                            <Button
                                                loading=submitting
                                                loading_text="Posting..."
                                                disabled=Signal::derive(move || !draft.with(CommentDraft::can_submit))
                                            >
                                                "Post Comment"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Ghost
                                                button_type="button"
                                                on_click=Callback::new(move |_| show_form.set(false))
                                            >
                                                "Cancel"
                                            </Button>
                                        </div>
                                    </form>
                                </Card>
                            </Show>

                            <CommentList comments=comments />
                        </div>
                    }.into_any()
                }
            }}
        </Show>
    }
}

#[component]
fn CommentList(comments: RwSignal<Vec<Comment>>) -> impl IntoView {
    view! {
        <Show
            when=move || comments.with(|c| !c.is_empty())
            fallback=|| view! {
                <div class="text-center py-12">
                    <div class="text-5xl mb-4">"💬"</div>
                    <h3 class="text-xl font-medium text-gray-900 mb-2">"No comments yet"</h3>
                    <p class="text-gray-600">"Be the first to share your thoughts!"</p>
                </div>
            }
        >
            <h3 class="text-2xl font-bold text-gray-900 mb-6">
                "Comments (" {move || comments.with(Vec::len)} ")"
            </h3>
            <div class="space-y-4">
                <For
                    each=move || comments.get()
                    key=|comment| comment.id.clone()
                    children=|comment| view! {
                        <Card>
                            <div class="flex items-start space-x-4">
                                <div class="w-10 h-10 bg-gradient-to-br from-blue-100 to-purple-100 rounded-full flex items-center justify-center">
                                    {if comment.is_anonymous { "🕶" } else { "👤" }}
                                </div>
                                <div class="flex-1">
                                    <div class="flex items-center space-x-2 mb-2">
                                        <h4 class="font-medium text-gray-900">{comment.display_name().to_string()}</h4>
                                        <span class="text-sm text-gray-500">{time_ago(comment.created_at)}</span>
                                    </div>
                                    <p class="text-gray-700 leading-relaxed whitespace-pre-wrap">{comment.content.clone()}</p>
                                </div>
                            </div>
                        </Card>
                    }
                />
            </div>
        </Show>
    }
}
