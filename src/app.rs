mod contact;
mod context;
mod experience;
mod footer;
mod hero;
mod icons;
mod nav;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

use crate::{content::PROFILE, page::PageEvent};
use contact::Contact;
use context::PageContext;
use experience::ExperienceTimeline;
use footer::Footer;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.role />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole site: one page of anchored sections under a fixed nav bar.
#[component]
fn PortfolioPage() -> impl IntoView {
    let page = PageContext::provide();

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| page.dispatch(PageEvent::Scrolled(scroll_y.get())));

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-black to-purple-900 text-white overflow-x-hidden">
            <NavBar />
            <Hero />
            <Skills />
            <Projects />
            <ExperienceTimeline />
            <Contact />
            <Footer />
        </div>
    }
}
