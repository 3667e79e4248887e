use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use super::context::use_page;
use crate::{
    content::Section,
    page::{PageEvent, Reveal, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD},
};

/// A page section that reports its first appearance on screen and fades in once.
#[component]
pub fn RevealSection(
    section: Section,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let page = use_page();
    let node_ref = NodeRef::<html::Section>::new();

    use_intersection_observer_with_options(
        node_ref,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                page.dispatch(PageEvent::SectionIntersected(section));
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![REVEAL_THRESHOLD])
            .root_margin(REVEAL_ROOT_MARGIN.to_string()),
    );

    let visible = page.is_visible(section);
    view! {
        <section
            id=section.id()
            node_ref=node_ref
            class=move || {
                format!("{class} transition-all duration-1000 {}", Reveal::Rise.classes(visible.get()))
            }
        >
            {children()}
        </section>
    }
}

#[component]
pub fn SectionHeading(
    section: Section,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    let visible = use_page().is_visible(section);
    view! {
        <h2 class=move || {
            format!(
                "text-5xl font-bold text-center mb-6 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent transition-all duration-1000 delay-200 {}",
                Reveal::Grow.classes(visible.get()),
            )
        }>{title}</h2>
        <p class=move || {
            format!(
                "text-center text-gray-400 mb-20 text-lg transition-all duration-1000 delay-300 {}",
                Reveal::Fade.classes(visible.get()),
            )
        }>{subtitle}</p>
    }
}
