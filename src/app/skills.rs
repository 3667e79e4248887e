use leptos::prelude::*;

use super::{
    context::use_page,
    icons::Icon,
    reveal::{RevealSection, SectionHeading},
};
use crate::{
    content::{Section, Skill, SKILLS},
    page::{stagger_style, Reveal},
};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <RevealSection section=Section::Skills class="py-32 px-6 bg-black/50 backdrop-blur-sm">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    section=Section::Skills
                    title="Skills"
                    subtitle="What I bring to the table"
                />
                <div class="grid md:grid-cols-3 gap-10">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillCard skill=*skill index /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn SkillCard(skill: Skill, index: usize) -> impl IntoView {
    let visible = use_page().is_visible(Section::Skills);
    view! {
        <div
            class=move || {
                format!(
                    "group bg-gradient-to-br from-gray-900/80 to-purple-900/20 backdrop-blur border border-gray-800 rounded-2xl p-10 hover:border-purple-500/50 transition-all duration-500 hover:shadow-2xl hover:shadow-purple-500/20 hover:-translate-y-3 {}",
                    Reveal::Rise.classes(visible.get()),
                )
            }
            style=stagger_style(400, 150, index)
        >
            <div class="flex justify-center mb-6 text-purple-400 transform group-hover:scale-110 transition-transform duration-300">
                <Icon kind=skill.icon.into() class="w-16 h-16" />
            </div>
            <h3 class="text-3xl font-bold text-center mb-4 group-hover:text-purple-300 transition">
                {skill.title}
            </h3>
            <p class="text-gray-400 text-center mb-8 leading-relaxed">{skill.description}</p>
            <div class="space-y-6 text-center">
                <p class="text-purple-400 font-semibold mb-3 text-lg">{skill.headline.text()}</p>
                <div>
                    <p class="text-purple-400 font-semibold mb-3">"My Tools:"</p>
                    <div class="flex flex-wrap justify-center gap-2">
                        {skill
                            .tools
                            .iter()
                            .map(|tool| {
                                view! {
                                    <span class="bg-purple-500/10 border border-purple-500/30 px-3 py-1 rounded-full text-sm text-gray-300 hover:bg-purple-500/20 transition">
                                        {*tool}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
