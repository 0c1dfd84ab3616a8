use leptos::{html, prelude::*};
use leptos_router::components::A;

use super::{reveal::use_reveal, tilt::TiltCard};
use crate::{
    assets::{resolve_asset, PROJECT_CARD_PLACEHOLDER},
    motion::{stagger_delay, PROJECT_CARD_TILT},
    portfolio::Project,
};

#[component]
pub fn ProjectsGrid(projects: Vec<Project>) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section node_ref=section_ref class="relative px-4 py-24 sm:py-32">
            <div class="relative mx-auto max-w-7xl">
                <div class="mb-16 reveal" class:revealed=revealed>
                    <h2 class="text-4xl sm:text-5xl font-bold tracking-tight">"Featured Projects"</h2>
                    <p class="mt-4 text-lg text-muted">
                        "Showcasing innovative solutions and technical excellence"
                    </p>
                </div>
                <div class="grid gap-8 md:grid-cols-2">
                    <For
                        each=move || projects.clone().into_iter().enumerate()
                        key=|(_, project)| project.id.clone()
                        children=move |(index, project)| {
                            view! { <ProjectCard project index revealed /> }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let image = resolve_asset(&project.image, PROJECT_CARD_PLACEHOLDER);
    let href = project.route();

    view! {
        <div class="reveal" class:revealed=revealed style=stagger_delay(0.0, index, 0.15)>
            <TiltCard
                tilt=PROJECT_CARD_TILT
                class="group relative overflow-hidden rounded-3xl border border-muted/30 transition-all duration-500 hover:border-cyan/50 hover:shadow-glow"
            >
                <div class="relative aspect-video overflow-hidden">
                    <img
                        src=image
                        alt=project.title.clone()
                        class="h-full w-full object-cover transition-all duration-500 group-hover:scale-110 group-hover:brightness-75"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-background via-background/80 to-transparent opacity-90"></div>
                    <div class="absolute right-4 top-4 rounded-full bg-cyan/20 p-2 text-cyan opacity-0 transition-opacity group-hover:opacity-100">
                        "✦"
                    </div>
                </div>
                <div class="relative p-6">
                    <h3 class="mb-2 text-2xl font-bold">{project.title}</h3>
                    <p class="mb-4 leading-relaxed text-muted">{project.description}</p>
                    <div class="mb-4 flex flex-wrap gap-2">
                        {project
                            .technologies
                            .into_iter()
                            .map(|tech| {
                                view! {
                                    <span class="rounded-md border border-cyan/20 bg-cyan/10 px-2 py-1 text-xs transition-colors hover:border-cyan/40">
                                        {tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center justify-between">
                        <span class="flex items-center gap-2 text-sm font-semibold text-cyan">
                            "✦ " {project.impact}
                        </span>
                        <A
                            href=href
                            attr:class="group/btn rounded-md bg-cyan/10 px-3 py-1 text-sm text-cyan hover:bg-cyan/20"
                        >
                            "View Details "
                            <span class="inline-block transition-transform group-hover/btn:translate-x-1">
                                "→"
                            </span>
                        </A>
                    </div>
                </div>
            </TiltCard>
        </div>
    }
}
