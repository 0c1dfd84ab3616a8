#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list_with_ssg, LeptosRoutes};
    use portfolio_site::{app::*, config, portfolio::Portfolio};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // duplicate slugs or keys abort before anything is prerendered
    let portfolio = Portfolio::load().expect("Should be able to load portfolio content");
    if let Err(e) = portfolio.validate() {
        tracing::error!(error = %e, "portfolio content is invalid");
        panic!("Should be able to validate portfolio content: {e}");
    }
    tracing::info!(
        projects = portfolio.projects.len(),
        base_path = config::base_path(),
        built = config::BUILD_TIME,
        "portfolio content loaded"
    );

    let conf = get_configuration(None).expect("Should be able to read Leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    let (routes, static_routes) = generate_route_list_with_ssg({
        let leptos_options = leptos_options.clone();
        move || shell(leptos_options.clone())
    });
    for route in portfolio.project_routes() {
        tracing::debug!(%route, "expected static route");
    }
    static_routes.generate(&leptos_options).await;
    tracing::info!(site_root = %leptos_options.site_root, "static route generation finished");

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Should be able to serve site");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
