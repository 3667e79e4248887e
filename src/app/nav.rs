use leptos::{ev::MouseEvent, prelude::*};

use super::{
    context::{use_page, PageContext},
    icons::{Icon, IconKind},
};
use crate::{
    content::{Section, PROFILE},
    page::{nav_class, PageEvent},
};

fn go_to(page: PageContext, section: Section) -> impl Fn(MouseEvent) + Copy + Send + Sync + 'static {
    move |_| page.dispatch(PageEvent::navigate(section))
}

#[component]
pub fn NavBar() -> impl IntoView {
    let page = use_page();
    let scrolled = page.scrolled();
    let menu_open = page.menu_open();

    let desktop_links = Section::ALL
        .into_iter()
        .filter(|section| *section != Section::Contact)
        .map(|section| {
            view! {
                <button
                    on:click=go_to(page, section)
                    class="hover:text-purple-400 transition-all hover:scale-110"
                >
                    {section.nav_label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            format!("fixed top-0 w-full z-50 transition-all duration-300 {}", nav_class(scrolled.get()))
        }>
            <div class="max-w-7xl mx-auto px-6 py-5 flex justify-between items-center">
                <div
                    class="text-3xl font-bold bg-gradient-to-r from-purple-400 via-pink-400 to-purple-600 bg-clip-text text-transparent cursor-pointer"
                    on:click=go_to(page, Section::About)
                >
                    {PROFILE.initials}
                </div>

                <div class="hidden md:flex items-center space-x-10">
                    {desktop_links}
                    <button
                        on:click=go_to(page, Section::Contact)
                        class="border-2 border-purple-500 text-purple-400 px-6 py-3 rounded-lg hover:bg-purple-500 hover:text-white transition-all hover:scale-105"
                    >
                        "Contact Me"
                    </button>
                </div>

                <button
                    on:click=move |_| page.dispatch(PageEvent::ToggleMenu)
                    class="md:hidden text-white"
                    aria-label="Toggle menu"
                >
                    {move || {
                        let kind = if menu_open.get() { IconKind::Close } else { IconKind::Menu };
                        view! { <Icon kind class="w-8 h-8" /> }
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-black/95 backdrop-blur-xl border-t border-purple-500/20">
                    <div class="px-6 py-8 space-y-6 text-center">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=go_to(page, section)
                                        class="block w-full text-xl hover:text-purple-400 transition"
                                    >
                                        {section.nav_label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
