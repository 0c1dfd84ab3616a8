use leptos::{html, prelude::*};
use leptos_use::{use_interval_fn, utils::Pausable};

use super::{reveal::use_reveal, tilt::TiltCard};
use crate::{
    assets::{resolve_asset, PORTRAIT_PLACEHOLDER},
    counter::{CountUp, StatValue, COUNTER_TICK_MS},
    motion::{stagger_delay, ABOUT_IMAGE_TILT},
    portfolio::AboutInfo,
};

#[component]
pub fn AboutSection(about: AboutInfo) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);
    let image = resolve_asset(&about.image, PORTRAIT_PLACEHOLDER);

    view! {
        <section node_ref=section_ref class="relative px-4 py-24 sm:py-32">
            <div class="relative mx-auto max-w-7xl">
                <h2
                    class="mb-16 text-4xl sm:text-5xl font-bold tracking-tight reveal"
                    class:revealed=revealed
                >
                    "About Me"
                </h2>
                <div class="grid gap-12 lg:grid-cols-2 lg:gap-16">
                    <div class="reveal reveal-left" class:revealed=revealed style="transition-delay: 0.2s">
                        <TiltCard
                            tilt=ABOUT_IMAGE_TILT
                            class="relative aspect-square overflow-hidden rounded-3xl border-2 border-cyan/30 shadow-glow"
                        >
                            <img
                                src=image
                                alt="Professional portrait"
                                class="h-full w-full object-cover"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-background/80 via-transparent to-transparent"></div>
                        </TiltCard>
                    </div>
                    <div
                        class="flex flex-col justify-center reveal reveal-right"
                        class:revealed=revealed
                        style="transition-delay: 0.4s"
                    >
                        <p class="mb-8 text-lg leading-relaxed text-muted">{about.description}</p>
                        <div class="grid grid-cols-3 gap-4">
                            {about
                                .stats
                                .into_iter()
                                .enumerate()
                                .map(|(i, stat)| {
                                    let raw = stat.value.clone();
                                    let value = StatValue::parse(&stat.value);
                                    view! {
                                        <div
                                            class="group relative rounded-2xl border border-muted/30 p-4 text-center transition-all duration-300 hover:-translate-y-1 hover:scale-105 hover:border-cyan/50 reveal"
                                            class:revealed=revealed
                                            style=stagger_delay(0.6, i, 0.1)
                                        >
                                            <div class="mb-1 text-2xl sm:text-3xl font-bold text-cyan">
                                                <Show when=move || revealed.get() fallback=move || raw.clone()>
                                                    <AnimatedCounter value=value.clone() />
                                                </Show>
                                            </div>
                                            <div class="text-xs sm:text-sm text-muted">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Counts up to the stat's number; values without one are shown as-is.
#[component]
fn AnimatedCounter(value: StatValue) -> impl IntoView {
    let counter = RwSignal::new(CountUp::new(value.target().unwrap_or_default()));

    if !counter.with_untracked(CountUp::is_finished) {
        let Pausable { pause, .. } = use_interval_fn(
            move || {
                counter.update(|c| {
                    c.tick();
                });
            },
            COUNTER_TICK_MS,
        );
        Effect::new(move |_| {
            if counter.with(CountUp::is_finished) {
                log::debug!("counter reached {}", counter.with_untracked(CountUp::target));
                pause();
            }
        });
    }

    view! { <span>{move || value.display(counter.with(CountUp::current))}</span> }
}
