use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::portfolio::ExtracurricularSummary;

#[component]
pub fn ExtracurricularCard(data: ExtracurricularSummary) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);
    let profile_url = data.profile_url().to_string();

    view! {
        <section node_ref=section_ref class="px-4 py-24 sm:py-32">
            <div class="mx-auto max-w-4xl">
                <h2
                    class="mb-16 text-center text-4xl sm:text-5xl font-bold tracking-tight reveal"
                    class:revealed=revealed
                >
                    "Freelance Work"
                </h2>
                <div
                    class="group relative overflow-hidden rounded-3xl border border-cyan/20 p-8 sm:p-10 shadow-2xl reveal reveal-pop"
                    class:revealed=revealed
                    style="transition-delay: 0.2s"
                >
                    <div class="mb-8 flex flex-col items-start justify-between gap-4 sm:flex-row sm:items-center">
                        <div class="flex items-center gap-4">
                            <div class="flex h-16 w-16 items-center justify-center rounded-2xl bg-cyan text-3xl transition-transform duration-500 hover:rotate-[360deg] hover:scale-110">
                                "🏅"
                            </div>
                            <div>
                                <h3 class="text-3xl sm:text-4xl font-bold">{data.platform}</h3>
                                <p class="text-sm text-muted">"Professional Freelancer"</p>
                            </div>
                        </div>
                        <div class="rounded-full bg-green px-6 py-3 transition-transform hover:scale-105">
                            <span class="font-bold text-white">{data.level}</span>
                        </div>
                    </div>

                    <p class="mb-8 text-lg leading-relaxed text-muted">{data.description}</p>

                    <div class="mb-8 grid grid-cols-3 gap-4">
                        <StatCard icon="⭐" value=data.rating label="Rating" />
                        <StatCard icon="📈" value=data.projects label="Projects" />
                        <StatCard icon="🌐" value="Global".to_string() label="Clients" />
                    </div>

                    <a
                        href=profile_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex w-full items-center justify-center gap-2 rounded-xl bg-cyan px-8 py-4 font-semibold text-background transition-all duration-300 hover:scale-[1.02] active:scale-[0.98]"
                    >
                        <span>"Visit My Profile"</span>
                        <span>"↗"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(icon: &'static str, value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden rounded-2xl border border-cyan/30 p-6 text-center transition-all duration-300 hover:-translate-y-1 hover:scale-[1.02]">
            <div class="mb-2 flex items-center justify-center gap-2">
                <span class="text-xl">{icon}</span>
                <span class="text-3xl font-bold">{value}</span>
            </div>
            <p class="text-xs font-medium uppercase tracking-wider text-muted">{label}</p>
        </div>
    }
}
