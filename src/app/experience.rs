use leptos::prelude::*;

use super::{
    context::use_page,
    reveal::{RevealSection, SectionHeading},
};
use crate::{
    content::{experiences, Experience, Section},
    page::{stagger_style, Reveal},
};

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    view! {
        <RevealSection section=Section::Experience class="py-32 px-6 bg-black/50 backdrop-blur-sm">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    section=Section::Experience
                    title="Experience"
                    subtitle="My professional journey"
                />
                <div class="grid md:grid-cols-2 gap-10">
                    {experiences()
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <ExperienceCard entry index /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ExperienceCard(entry: Experience, index: usize) -> impl IntoView {
    let visible = use_page().is_visible(Section::Experience);
    view! {
        <div
            class=move || {
                format!(
                    "group bg-gradient-to-br from-gray-900/80 to-purple-900/20 backdrop-blur border border-gray-800 rounded-2xl p-8 hover:border-purple-500/50 transition-all duration-500 hover:shadow-xl hover:shadow-purple-500/10 hover:-translate-y-1 {}",
                    Reveal::Rise.classes(visible.get()),
                )
            }
            style=stagger_style(400, 100, index)
        >
            <div class="flex items-start gap-6">
                <div class="text-3xl font-bold text-purple-400 bg-purple-500/10 px-4 py-2 rounded-lg">
                    {entry.year}
                </div>
                <div class="flex-1">
                    <h3 class="text-2xl font-bold text-purple-300 mb-2 group-hover:text-purple-200 transition">
                        {entry.company}
                    </h3>
                    <p class="text-gray-300 leading-relaxed">{entry.role}</p>
                </div>
            </div>
        </div>
    }
}
