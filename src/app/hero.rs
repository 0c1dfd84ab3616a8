use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::typewriter::{Typewriter, TYPEWRITER_TICK_MS};

#[component]
pub fn HeroSection(name: String, title: String, subtitle: String) -> impl IntoView {
    view! {
        <section class="relative flex min-h-screen items-center justify-center overflow-hidden px-4">
            <div class="absolute inset-0 hero-grid"></div>
            <div class="absolute left-[10%] top-[30%] h-2 w-2 rounded-full bg-cyan float-slow"></div>
            <div class="absolute right-[15%] top-[40%] h-3 w-3 rounded-full bg-blue float-slower"></div>

            <div class="relative z-10 text-center">
                <div class="mb-6 flex justify-center text-5xl text-cyan pop-in">"✦"</div>
                <h1 class="mb-6 text-7xl sm:text-8xl md:text-9xl font-bold tracking-tight text-gradient fade-up">
                    {name}
                </h1>
                <div class="mb-4 inline-block rounded-full border border-cyan/30 bg-cyan/10 px-6 py-2 fade-in">
                    <p class="font-mono text-lg sm:text-xl text-cyan">
                        <TypedTitle title />
                        <span class="animate-pulse">"|"</span>
                    </p>
                </div>
                <p class="mx-auto max-w-3xl text-xl sm:text-2xl leading-relaxed text-muted fade-up delay-500">
                    {subtitle}
                </p>
                <div class="mt-20 text-4xl text-cyan animate-bounce">"↓"</div>
            </div>
        </section>
    }
}

#[component]
fn TypedTitle(title: String) -> impl IntoView {
    let typed = RwSignal::new(Typewriter::new(&title));

    if !typed.with_untracked(Typewriter::is_finished) {
        let Pausable { pause, .. } = use_interval_fn(
            move || {
                typed.update(|t| {
                    t.tick();
                });
            },
            TYPEWRITER_TICK_MS,
        );
        Effect::new(move |_| {
            if typed.with(Typewriter::is_finished) {
                pause();
            }
        });
    }

    move || typed.with(Typewriter::displayed)
}
