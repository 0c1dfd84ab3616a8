use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::{motion::stagger_delay, portfolio::SkillsData};

#[component]
pub fn SkillsSection(skills: SkillsData) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section node_ref=section_ref class="px-4 py-24 sm:py-32">
            <div class="mx-auto max-w-6xl">
                <h2
                    class="mb-16 text-center text-4xl sm:text-5xl font-bold tracking-tight reveal"
                    class:revealed=revealed
                >
                    <span class="text-gradient">"Skills & Expertise"</span>
                </h2>
                <div class="relative flex flex-wrap justify-center gap-4">
                    {skills
                        .all_names()
                        .into_iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <div
                                    class="group relative cursor-default reveal reveal-pop"
                                    class:revealed=revealed
                                    style=stagger_delay(0.0, i, 0.03)
                                >
                                    <div class="absolute -inset-0.5 rounded-2xl bg-gradient-to-r from-cyan to-blue opacity-0 blur transition-opacity duration-300 group-hover:opacity-75"></div>
                                    <div class="relative overflow-hidden rounded-2xl border border-cyan/30 bg-background px-6 py-3 transition-all duration-300 group-hover:scale-110 group-hover:border-cyan/60">
                                        <span class="relative z-10 text-sm sm:text-base font-medium">
                                            {skill}
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
