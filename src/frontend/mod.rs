pub mod auth;
pub mod components;
pub mod pages;
pub mod toast;
pub mod upload;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::services::SessionStore;
use auth::provide_auth;
use components::{AdminGuard, Layout};
use pages::*;
use toast::provide_toasts;

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn session_store() -> Arc<dyn SessionStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(crate::services::BrowserStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(crate::services::MemoryStore::new())
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = ApiClient::new(config.api_base_url.clone(), session_store());
    provide_context(config);
    provide_auth(api);
    provide_toasts();

    view! {
        <Stylesheet id="leptos" href="/pkg/mindkanvas.css"/>
        <Title text="MindKanvas"/>
        <Meta name="description" content="Thoughts, essays and poems in English and देवनागरी"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/blog/:id") view=BlogDetailPage/>
                    <Route path=path!("/admin/login") view=LoginPage/>
                    <Route path=path!("/signup") view=SignupPage/>
                    <Route
                        path=path!("/admin")
                        view=|| view! { <AdminGuard><AdminDashboardPage/></AdminGuard> }
                    />
                    <Route
                        path=path!("/admin/blog/new")
                        view=|| view! { <AdminGuard><BlogEditorPage/></AdminGuard> }
                    />
                    <Route
                        path=path!("/admin/blog/edit/:id")
                        view=|| view! { <AdminGuard><BlogEditorPage/></AdminGuard> }
                    />
                </Routes>
            </Layout>
        </Router>
    }
}
