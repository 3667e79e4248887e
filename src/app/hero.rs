use leptos::prelude::*;

use super::{
    context::use_page,
    icons::{Icon, IconKind},
    reveal::RevealSection,
};
use crate::{
    content::{Section, PROFILE},
    page::PageEvent,
};

#[component]
pub fn Hero() -> impl IntoView {
    let page = use_page();
    view! {
        <RevealSection
            section=Section::About
            class="min-h-screen flex items-center px-6 pt-24 relative overflow-hidden"
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute w-96 h-96 bg-purple-600/20 rounded-full blur-3xl top-20 left-10 animate-pulse"></div>
                <div class="absolute w-96 h-96 bg-pink-600/20 rounded-full blur-3xl bottom-20 right-10 animate-pulse delay-1000"></div>
            </div>

            <div class="max-w-7xl mx-auto grid md:grid-cols-2 gap-12 items-center z-10">
                <div class="space-y-8">
                    <p class="text-2xl text-gray-400 flex items-center gap-2">
                        "Hello Buds " <span class="animate-wave inline-block">"👋"</span>
                    </p>
                    <h1 class="text-5xl md:text-7xl font-bold leading-tight">
                        "I am "
                        <span class="bg-gradient-to-r from-purple-400 via-pink-400 to-purple-600 bg-clip-text text-transparent">
                            {PROFILE.name}
                        </span>
                    </h1>
                    <p class="text-xl text-purple-300 font-semibold">{PROFILE.role}</p>
                    <div class="w-32 h-1 bg-gradient-to-r from-purple-500 to-pink-500 rounded-full"></div>
                    <p class="text-gray-300 max-w-lg leading-relaxed text-lg">{PROFILE.summary}</p>
                    <div class="flex flex-wrap gap-6">
                        <a
                            href=PROFILE.resume_path
                            download=PROFILE.resume_download_name
                            class="flex items-center gap-3 bg-gradient-to-r from-purple-600 to-pink-600 px-8 py-4 rounded-lg font-semibold hover:scale-105 transition-all shadow-lg shadow-purple-500/50"
                        >
                            <Icon kind=IconKind::Download class="w-5 h-5" />
                            "Download CV"
                        </a>
                        <button
                            on:click=move |_| page.dispatch(PageEvent::navigate(Section::Projects))
                            class="flex items-center gap-3 border-2 border-gray-600 px-8 py-4 rounded-lg font-semibold hover:border-purple-500 hover:text-purple-400 transition-all hover:scale-105"
                        >
                            "More"
                            <Icon kind=IconKind::ArrowDownCircle class="w-5 h-5" />
                        </button>
                    </div>
                    <ContactInfo />
                </div>

                <div class="relative flex justify-center">
                    <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                        <div class="w-96 h-96 bg-purple-600/30 rounded-full blur-3xl animate-pulse"></div>
                        <div class="absolute w-72 h-72 bg-pink-600/20 rounded-full blur-2xl -top-10 -right-10 animate-pulse delay-500"></div>
                        <div class="absolute w-40 h-40 border-4 border-purple-400/40 rounded-full top-20 right-20 animate-spin-slow"></div>
                        <div class="absolute text-7xl text-purple-400/60 top-5 right-40">"+"</div>
                    </div>
                    <div class="relative z-10 w-96 h-96 bg-gradient-to-br from-purple-500/20 to-pink-500/20 rounded-3xl shadow-2xl border-4 border-purple-500/30 flex items-center justify-center backdrop-blur-sm">
                        <div class="text-9xl">"👨‍💻"</div>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let items = [
        (IconKind::Mail, PROFILE.email),
        (IconKind::Phone, PROFILE.phone),
        (IconKind::MapPin, PROFILE.location),
    ];
    view! {
        <div class="flex flex-wrap gap-6 pt-6 text-sm text-gray-400">
            {items
                .into_iter()
                .map(|(kind, text)| {
                    view! {
                        <div class="flex items-center gap-2">
                            <span class="text-purple-400">
                                <Icon kind class="w-[18px] h-[18px]" />
                            </span>
                            <span>{text}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
