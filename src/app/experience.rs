use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::{
    card::{has_toggle, ExpandableCard},
    motion::stagger_delay,
    portfolio::ExperienceEntry,
};

#[component]
pub fn ExperienceTimeline(experiences: Vec<ExperienceEntry>) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section node_ref=section_ref class="relative px-4 py-24 sm:py-32">
            <div class="relative mx-auto max-w-5xl">
                <div class="mb-16 reveal" class:revealed=revealed>
                    <h2 class="text-4xl sm:text-5xl font-bold tracking-tight">"Experience"</h2>
                    <p class="mt-4 text-lg text-muted">"Professional journey and key milestones"</p>
                </div>
                <div class="relative">
                    <div
                        class="absolute left-0 top-0 hidden md:block w-px bg-gradient-to-b from-cyan via-cyan/50 to-transparent timeline-line"
                        class:revealed=revealed
                    ></div>
                    <div class="space-y-12">
                        <For
                            each=move || experiences.clone().into_iter().enumerate()
                            key=|(_, exp)| exp.key()
                            children=move |(index, exp)| {
                                view! { <ExperienceCard exp index revealed /> }
                            }
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(exp: ExperienceEntry, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let (card, set_card) = signal(ExpandableCard::default());
    let expanded = move || card.get().is_expanded();
    let show_toggle = has_toggle(&exp.achievements);
    let technologies = StoredValue::new(exp.technologies);

    let achievements = exp
        .achievements
        .into_iter()
        .enumerate()
        .map(|(i, achievement)| {
            view! {
                <div
                    class="flex gap-2 text-sm text-muted achievement"
                    class:revealed=expanded
                    style=stagger_delay(0.0, i, 0.1)
                >
                    <span class="flex-shrink-0 text-cyan">"›"</span>
                    <span>{achievement}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="relative reveal" class:revealed=revealed style=stagger_delay(0.0, index, 0.15)>
            <div class="absolute -left-[7px] top-2 hidden md:block h-4 w-4 rounded-full border-2 border-background bg-cyan shadow-glow">
                <div class="h-full w-full rounded-full bg-cyan opacity-50 animate-ping"></div>
            </div>
            <div class="group md:ml-8">
                <div class="relative overflow-hidden rounded-3xl border border-muted/30 p-6 transition-all duration-500 hover:scale-[1.01] hover:border-cyan/50 hover:shadow-glow">
                    <div class="mb-4 flex flex-wrap items-start justify-between gap-4">
                        <div>
                            <h3 class="mb-2 text-2xl font-bold">{exp.title}</h3>
                            <div class="flex flex-wrap items-center gap-4 text-sm text-muted">
                                <span class="flex items-center gap-2">"🏢 " {exp.company}</span>
                                <span class="flex items-center gap-2">"📍 " {exp.location}</span>
                            </div>
                        </div>
                        <span class="flex items-center gap-2 rounded-md border border-cyan/30 bg-cyan/10 px-2 py-1 text-xs">
                            "📅 " {exp.period}
                        </span>
                    </div>

                    <p class="mb-4 leading-relaxed text-muted">{exp.description}</p>

                    <div class="overflow-hidden collapsible" class:expanded=expanded>
                        <div class="mb-4 space-y-2 border-l-2 border-cyan/30 pl-4">{achievements}</div>
                    </div>

                    <div class="flex flex-wrap items-center gap-2">
                        {move || {
                            let card = card.get();
                            technologies
                                .with_value(|techs| card.visible(techs).to_vec())
                                .into_iter()
                                .map(|tech| {
                                    view! {
                                        <span class="rounded-md border border-cyan/40 px-2 py-1 text-xs text-cyan hover:bg-cyan/10">
                                            {tech}
                                        </span>
                                    }
                                })
                                .collect_view()
                        }}
                        {move || {
                            let card = card.get();
                            technologies
                                .with_value(|techs| card.hidden_count(techs))
                                .map(|n| {
                                    view! {
                                        <span class="rounded-md border border-cyan/40 px-2 py-1 text-xs text-cyan">
                                            {format!("+{n} more")}
                                        </span>
                                    }
                                })
                        }}
                    </div>

                    {show_toggle
                        .then(|| {
                            view! {
                                <button
                                    class="mt-4 flex items-center gap-2 text-sm font-medium text-cyan transition-colors hover:text-cyan/80"
                                    on:click=move |_| set_card.update(ExpandableCard::toggle)
                                >
                                    {move || card.get().toggle_label()}
                                    <span class="chevron" class:expanded=expanded>"›"</span>
                                </button>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn entry(achievements: &[&str], technologies: usize) -> ExperienceEntry {
        ExperienceEntry {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            period: "2022 - Present".to_string(),
            description: String::new(),
            achievements: achievements.iter().map(|a| a.to_string()).collect(),
            technologies: (0..technologies).map(|i| format!("tech-{i}")).collect(),
        }
    }

    fn render(exp: ExperienceEntry) -> String {
        Owner::new().with(|| {
            view! { <ExperienceCard exp index=0 revealed=Signal::stored(false) /> }.to_html()
        })
    }

    #[test]
    fn test_card_without_achievements_has_no_toggle() {
        let html = render(entry(&[], 3));
        assert!(!html.contains("<button"));
        assert!(!html.contains("Show Achievements"));
        assert!(html.contains("tech-2"));
    }

    #[test]
    fn test_collapsed_card_previews_technologies() {
        let html = render(entry(&["Shipped the thing"], 7));
        assert!(html.contains("Show Achievements"));
        assert!(html.contains("tech-4"));
        assert!(!html.contains("tech-5"));
        assert!(html.contains("+2 more"));
    }
}
