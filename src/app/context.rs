use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{
    content::Section,
    page::{Field, Notice, PageEvent, PageState, Viewport},
};

/// The real browser window.
struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn element_top(&self, id: &str) -> Option<f64> {
        document()
            .get_element_by_id(id)
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_else(|err| {
            log::warn!("couldn't read scroll position: {err:?}");
            0.0
        })
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

fn show_notice(notice: &Notice) {
    if notice.is_error() {
        log::debug!("contact form rejected: {notice}");
    }
    if let Err(err) = window().alert_with_message(&notice.to_string()) {
        log::warn!("couldn't show notice: {err:?}");
    }
}

/// Handle to the page state shared by every section of the page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    state: RwSignal<PageState>,
}

impl PageContext {
    pub fn provide() -> Self {
        let ctx = Self {
            state: RwSignal::new(PageState::new()),
        };
        provide_context(ctx);
        ctx
    }

    pub fn dispatch(self, event: PageEvent) {
        let notice = self
            .state
            .try_update(|state| state.apply(event, &BrowserViewport))
            .flatten();
        if let Some(notice) = notice {
            show_notice(&notice);
        }
    }

    pub fn scrolled(self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.scrolled))
    }

    pub fn menu_open(self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.menu_open))
    }

    pub fn is_visible(self, section: Section) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.is_visible(section)))
    }

    pub fn field(self, field: Field) -> Memo<String> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.form.get(field).to_string()))
    }
}

pub fn use_page() -> PageContext {
    expect_context::<PageContext>()
}
