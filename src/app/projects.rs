use leptos::prelude::*;

use super::{
    context::use_page,
    reveal::{RevealSection, SectionHeading},
};
use crate::{
    content::{Project, Section, PROJECTS},
    page::{stagger_style, Reveal},
};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <RevealSection
            section=Section::Projects
            class="py-32 px-6 bg-gradient-to-b from-black/50 to-transparent"
        >
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    section=Section::Projects
                    title="Projects"
                    subtitle="Some things I've built"
                />
                <div class="grid md:grid-cols-2 gap-12">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=*project index /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let visible = use_page().is_visible(Section::Projects);
    view! {
        <div
            class=move || {
                format!(
                    "group bg-gradient-to-br from-gray-900/80 to-purple-900/20 backdrop-blur border border-gray-800 rounded-2xl p-12 hover:border-purple-500/50 transition-all duration-500 hover:shadow-2xl hover:shadow-purple-500/20 hover:-translate-y-2 {}",
                    Reveal::Slide.classes(visible.get()),
                )
            }
            style=stagger_style(400, 150, index)
        >
            <div class=format!(
                "inline-block bg-gradient-to-r {} px-4 py-2 rounded-lg text-sm font-bold mb-4",
                project.gradient,
            )>"Featured"</div>
            <h3 class="text-3xl font-bold text-purple-400 mb-6 group-hover:text-purple-300 transition">
                {project.title}
            </h3>
            <p class="text-gray-300 mb-6 leading-relaxed">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-8">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="bg-purple-500/10 border border-purple-500/30 px-3 py-1 rounded-full text-sm text-purple-300">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <button class="text-purple-400 font-semibold hover:text-purple-300 transition group-hover:translate-x-2 inline-flex items-center gap-2">
                "View Project " <span>"→"</span>
            </button>
        </div>
    }
}
