use leptos::prelude::*;

use crate::config::Skill;

#[component]
pub fn SkillsSection(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <section id="skills" class="py-24 px-4 sm:px-6 lg:px-8 section-content">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl lg:text-5xl font-black mb-4">"Tech Stack"</h2>
                    <p class="text-lg text-muted max-w-2xl mx-auto">
                        "Technologies I use to build scalable and production-ready applications."
                    </p>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                    {skills
                        .iter()
                        .map(|skill| view! { <SkillCard skill=skill.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="group bg-brightBlack/30 border border-muted/30 rounded-2xl p-6 hover:border-cyan/50 transition-all duration-500">
            <div class="flex items-center gap-4">
                <i class=format!("{} text-3xl {}", skill.icon_class, skill.accent)></i>
                <h4 class="text-lg font-bold group-hover:text-cyan transition-colors duration-200">
                    {skill.name}
                </h4>
            </div>
        </div>
    }
}
