mod about;
mod experience;
mod footer;
mod freelance;
mod hero;
mod homepage;
mod project;
mod projects;
mod reveal;
mod skills;
mod tilt;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path, static_routes::StaticRoute, SsrMode};

use crate::{config, portfolio::Portfolio};
use homepage::HomePage;
use project::ProjectPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet =
        config::stylesheet_href(config::base_path(), &options.site_pkg_dir, &options.output_name);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options root=config::base_path() />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href=stylesheet />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let portfolio = Arc::new(
        Portfolio::load().expect("Should be able to load embedded portfolio content"),
    );
    let name = portfolio.name.clone();
    let slugs = portfolio.project_slugs();
    provide_context(portfolio);

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content="Portfolio: experience, projects and skills" />

        <Router base=config::base_path()>
            <main class="relative overflow-hidden">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=path!("/")
                        view=HomePage
                        ssr=SsrMode::Static(StaticRoute::new())
                    />
                    <Route
                        path=path!("/projects/:slug")
                        view=ProjectPage
                        ssr=SsrMode::Static(
                            StaticRoute::new()
                                .prerender_params(move || {
                                    let slugs = slugs.clone();
                                    async move { [("slug".to_string(), slugs)].into_iter().collect() }
                                }),
                        )
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Terminal state for unknown routes and project slugs.
#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="flex min-h-screen flex-col items-center justify-center gap-6 px-4 text-center">
            <h1 class="text-6xl font-bold text-cyan">"404"</h1>
            <p class="text-lg text-muted">"This page could not be found."</p>
            <A href="/" attr:class="rounded-md bg-cyan/10 px-4 py-2 text-cyan hover:bg-cyan/20">
                "Back to Portfolio"
            </A>
        </div>
    }
}
