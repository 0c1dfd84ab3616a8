use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::AboutSection, experience::ExperienceTimeline, footer::Footer,
    freelance::ExtracurricularCard, hero::HeroSection, projects::ProjectsGrid,
    skills::SkillsSection,
};
use crate::portfolio::Portfolio;

/// Landing page: every section, top to bottom.
#[component]
pub fn HomePage() -> impl IntoView {
    let portfolio = expect_context::<Arc<Portfolio>>();
    let p = &*portfolio;

    view! {
        <Title text="Portfolio" />
        <div class="animated-background"></div>
        <HeroSection name=p.name.clone() title=p.title.clone() subtitle=p.subtitle.clone() />
        <AboutSection about=p.about.clone() />
        <ExperienceTimeline experiences=p.experience.clone() />
        <ProjectsGrid projects=p.projects.clone() />
        <SkillsSection skills=p.skills.clone() />
        <ExtracurricularCard data=p.extracurricular.clone() />
        <Footer social=p.social.clone() name=p.name.clone() />
    }
}
