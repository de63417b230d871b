#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{App, HttpServer, web};
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_actix::{LeptosRoutes, generate_route_list};
    use tracing_subscriber::EnvFilter;

    use mindkanvas::config::ServerConfig;
    use mindkanvas::frontend::{App as MindKanvas, shell};

    let server = ServerConfig::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&server.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let conf = get_configuration(None).map_err(std::io::Error::other)?;
    let bind_addr = server
        .bind_addr
        .clone()
        .unwrap_or_else(|| conf.leptos_options.site_addr.to_string());

    tracing::info!(%bind_addr, "serving MindKanvas");

    HttpServer::new(move || {
        let routes = generate_route_list(MindKanvas);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();

        App::new()
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .service(Files::new("/", site_root.clone()))
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&bind_addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {}
