use leptos::prelude::*;

use crate::{
    config::BUILD_YEAR,
    motion::stagger_delay,
    portfolio::{SocialKind, SocialLinks},
};

#[component]
pub fn Footer(social: SocialLinks, name: String) -> impl IntoView {
    view! {
        <footer class="relative border-t border-muted/30">
            <div class="mx-auto max-w-7xl px-4 py-12">
                <div class="flex flex-col items-center justify-between gap-6 sm:flex-row">
                    <div class="text-center sm:text-left">
                        <p class="mb-1 text-lg font-semibold">{name}</p>
                        <p class="text-sm text-muted">{format!("© {BUILD_YEAR} All rights reserved")}</p>
                    </div>
                    <div class="flex gap-4">
                        {social
                            .entries()
                            .into_iter()
                            .enumerate()
                            .map(|(i, link)| {
                                let label = link.kind.label();
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=label
                                        class="group relative rounded-full border border-muted/50 p-3 transition-all hover:-translate-y-0.5 hover:scale-110 hover:border-cyan/50 fade-up"
                                        style=stagger_delay(0.0, i, 0.1)
                                    >
                                        <i class=icon_class(link.kind)>{(link.kind == SocialKind::Email).then_some("✉")}</i>
                                        <span class="absolute -top-10 left-1/2 -translate-x-1/2 whitespace-nowrap rounded-lg bg-foreground px-2 py-1 text-xs text-background opacity-0 transition-opacity group-hover:opacity-100">
                                            {label}
                                        </span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="mt-8 text-center">
                    <p class="text-sm text-muted">
                        "Built with " <span class="text-cyan">"Rust"</span> ", "
                        <span class="text-cyan">"Leptos"</span> ", and "
                        <span class="text-cyan">"Tailwind CSS"</span>
                    </p>
                </div>
            </div>
        </footer>
    }
}

fn icon_class(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::LinkedIn => "devicon-linkedin-plain text-xl",
        SocialKind::GitHub => "devicon-github-plain text-xl",
        SocialKind::Twitter => "devicon-twitter-plain text-xl",
        SocialKind::Email => "not-italic text-xl leading-none",
    }
}
