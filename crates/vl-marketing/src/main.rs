//! Vaultline Marketing Site server

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    use vl_marketing::app::App;
    use vl_marketing::config::{pkg_dir, SiteConfig};

    let site = SiteConfig::default();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&site.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None)
        .await
        .expect("Failed to load Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);
    let site_root = leptos_options.site_root.to_string();
    let pkg = pkg_dir(&site_root, &leptos_options.site_pkg_dir);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .nest_service("/pkg", ServeDir::new(pkg))
        .nest_service("/assets", ServeDir::new(&site.assets_dir))
        .fallback_service(ServeDir::new(site_root))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind site address");
    tracing::info!("Marketing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser entry point is `vl_marketing::hydrate`
}
