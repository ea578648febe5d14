use leptos::prelude::*;

use crate::config::Project;

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id="projects" class="py-24 px-4 sm:px-6 lg:px-8 section-content">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl lg:text-5xl font-black mb-4">"Featured Projects"</h2>
                    <p class="text-lg text-muted max-w-3xl mx-auto">
                        "Real-world applications demonstrating end-to-end development expertise."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-8 lg:gap-12">
                    {projects
                        .iter()
                        .map(|project| view! { <ProjectCard project=project.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="group bg-brightBlack/30 border border-muted/30 rounded-2xl p-8 hover:border-cyan/50 transition-all duration-500 overflow-hidden">
            <div class="mb-6 rounded-xl overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-48 md:h-56 object-cover group-hover:scale-105 transition-transform duration-700"
                />
            </div>
            <h3 class="text-2xl font-bold mb-4 group-hover:text-cyan transition-colors duration-200">
                {project.title}
            </h3>
            <p class="text-muted mb-6 leading-relaxed">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-8">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-3 py-1 bg-brightBlack/50 rounded-md text-sm font-medium border border-muted/30">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-col sm:flex-row gap-3">
                <a
                    href=project.live_demo
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex-1 bg-blue/20 hover:bg-blue/30 text-blue py-3 px-6 rounded-md font-bold text-center border border-blue/30 transition-all duration-200"
                >
                    "Live Demo"
                </a>
                <a
                    href=project.repo
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex-1 border border-muted/40 hover:border-cyan py-3 px-6 rounded-md font-bold text-center transition-all duration-200"
                >
                    "GitHub "
                    <i class="devicon-github-plain"></i>
                </a>
            </div>
        </div>
    }
}
