use leptos::prelude::*;

use crate::content::PROFILE;

// stamped by build.rs
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-16 bg-black border-t border-purple-500/20 text-center">
            <div class="max-w-7xl mx-auto px-6">
                <h3 class="text-3xl font-bold mb-4 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                    {PROFILE.name}
                </h3>
                <p class="text-gray-400 mb-8">{PROFILE.role}</p>
                <div class="flex justify-center space-x-6 mb-8">
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-400 hover:text-purple-400 transition"
                    >
                        "GitHub"
                    </a>
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-400 hover:text-purple-400 transition"
                    >
                        "LinkedIn"
                    </a>
                    <a href=PROFILE.mailto() class="text-gray-400 hover:text-purple-400 transition">
                        "Email"
                    </a>
                </div>
                <p class="text-gray-500 text-sm">
                    {format!("© {BUILD_YEAR} {} | All Rights Reserved", PROFILE.name)}
                </p>
            </div>
        </footer>
    }
}
