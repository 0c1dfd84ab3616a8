use std::sync::Arc;

use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use super::NotFound;
use crate::{
    assets::{resolve_asset, PROJECT_DETAIL_PLACEHOLDER},
    motion::stagger_delay,
    portfolio::{Portfolio, Project, ProjectLookup},
};

#[component]
pub fn ProjectPage() -> impl IntoView {
    let portfolio = expect_context::<Arc<Portfolio>>();
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    move || {
        let slug = slug();
        match portfolio.resolve_project(&slug) {
            ProjectLookup::Found(project) => {
                Either::Left(view! { <ProjectDetail project=project.clone() /> })
            }
            ProjectLookup::NotFound => {
                log::warn!("no project with slug {slug:?}");
                Either::Right(view! { <NotFound /> })
            }
        }
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let image = resolve_asset(&project.image, PROJECT_DETAIL_PLACEHOLDER);
    let title = project.title;
    let alt = title.clone();

    view! {
        <Title text=title.clone() />
        <div class="relative min-h-screen overflow-hidden">
            <div class="relative z-10 px-4 pt-8">
                <div class="mx-auto max-w-6xl">
                    <A href="/" attr:class="group mb-8 inline-flex items-center text-muted hover:text-foreground">
                        <span class="mr-2 transition-transform group-hover:-translate-x-1">"←"</span>
                        "Back to Portfolio"
                    </A>
                </div>
            </div>

            <section class="relative z-10 px-4 py-12">
                <div class="mx-auto max-w-6xl">
                    <div class="fade-up">
                        <h1 class="mb-6 text-5xl sm:text-6xl font-bold tracking-tight">
                            {title}
                        </h1>
                        <p class="mb-8 max-w-3xl text-xl leading-relaxed text-muted">
                            {project.description}
                        </p>
                        <div class="mb-12 flex flex-wrap gap-6 text-sm">
                            <MetaItem icon="📅" text=project.duration />
                            <MetaItem icon="👥" text=project.team_size />
                            <MetaItem icon="🏆" text=project.role />
                            <span class="flex items-center gap-2 font-semibold text-cyan">
                                "⚡ " {project.impact}
                            </span>
                        </div>
                    </div>

                    <div class="relative mb-16 aspect-video overflow-hidden rounded-3xl border border-muted/50 shadow-2xl fade-in delay-200">
                        <img src=image alt=alt class="h-full w-full object-cover" />
                        <div class="absolute inset-0 bg-gradient-to-t from-background/80 via-transparent to-transparent"></div>
                    </div>

                    <div class="mb-16 fade-up delay-300">
                        <h2 class="mb-6 text-3xl font-bold">"Technologies Used"</h2>
                        <div class="flex flex-wrap gap-3">
                            {project
                                .technologies
                                .into_iter()
                                .map(|tech| {
                                    view! {
                                        <span class="rounded-md border border-cyan/30 bg-cyan/10 px-4 py-2 text-base transition-all hover:scale-105 hover:border-cyan/50">
                                            {tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="mb-16 fade-up delay-400">
                        <h2 class="mb-6 text-3xl font-bold">"Overview"</h2>
                        <p class="text-lg leading-relaxed text-muted">{project.full_description}</p>
                    </div>

                    <div class="mb-16 fade-up delay-500">
                        <h2 class="mb-6 text-3xl font-bold">"🎯 Challenges & Solutions"</h2>
                        <div class="space-y-4">
                            {project
                                .challenges
                                .into_iter()
                                .map(|challenge| {
                                    view! {
                                        <div class="group rounded-2xl border border-muted/50 p-6 transition-all hover:border-cyan/30">
                                            <p class="leading-relaxed text-muted transition-colors group-hover:text-foreground">
                                                {challenge}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="mb-16 fade-up delay-600">
                        <h2 class="mb-6 text-3xl font-bold">"🏆 Key Outcomes"</h2>
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {project
                                .outcomes
                                .into_iter()
                                .enumerate()
                                .map(|(i, outcome)| {
                                    view! {
                                        <div
                                            class="group relative overflow-hidden rounded-2xl border border-muted/50 p-6 transition-all hover:border-cyan/30 fade-in"
                                            style=stagger_delay(0.7, i, 0.1)
                                        >
                                            <p class="relative leading-relaxed text-muted transition-colors group-hover:text-foreground">
                                                {outcome}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn MetaItem(icon: &'static str, text: String) -> impl IntoView {
    view! {
        <span class="flex items-center gap-2 text-muted">
            {icon} " " <span class="font-semibold text-foreground">{text}</span>
        </span>
    }
}
