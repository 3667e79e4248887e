mod contact;
mod visibility;

pub use contact::{ContactError, ContactForm, Field, Submission};
pub use visibility::{stagger_style, Reveal, VisibleSections, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

use std::fmt;

use crate::content::Section;

/// Vertical offset past which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Space left above a section after navigating to it, so the fixed nav bar doesn't cover it.
pub const HEADER_CLEARANCE: f64 = 80.0;

/// The host environment the page scrolls in.
pub trait Viewport {
    /// Top edge of the element with this id, relative to the viewport top.
    fn element_top(&self, id: &str) -> Option<f64>;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "bg-black/90 backdrop-blur-xl shadow-lg shadow-purple-500/10"
    } else {
        "bg-transparent"
    }
}

/// Smooth-scrolls so the element sits [`HEADER_CLEARANCE`] below the viewport top.
///
/// Returns the requested document offset, or `None` when no element has this id.
pub fn scroll_to_section(viewport: &impl Viewport, id: &str) -> Option<f64> {
    let Some(top) = viewport.element_top(id) else {
        log::debug!("no element with id {id:?}, not scrolling");
        return None;
    };
    let target = top + viewport.scroll_y() - HEADER_CLEARANCE;
    viewport.smooth_scroll_to(target);
    Some(target)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scrolled(f64),
    SectionIntersected(Section),
    ToggleMenu,
    NavigateTo(String),
    FieldChanged(Field, String),
    Submit,
}

impl PageEvent {
    pub fn navigate(section: Section) -> Self {
        Self::NavigateTo(section.id().to_string())
    }
}

/// Feedback the visitor must see after submitting the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Acknowledged(Submission),
    Invalid(ContactError),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Invalid(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Acknowledged(submission) => fmt::Display::fmt(submission, f),
            Notice::Invalid(err) => fmt::Display::fmt(err, f),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub visible: VisibleSections,
    pub form: ContactForm,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: PageEvent, viewport: &impl Viewport) -> Option<Notice> {
        match event {
            PageEvent::Scrolled(y) => {
                self.scrolled = is_scrolled(y);
                None
            }
            PageEvent::SectionIntersected(section) => {
                self.visible.mark(section);
                None
            }
            PageEvent::ToggleMenu => {
                self.menu_open = !self.menu_open;
                None
            }
            PageEvent::NavigateTo(id) => {
                if let Err(err) = id.parse::<Section>() {
                    log::debug!("navigating to an unlisted anchor: {err}");
                }
                scroll_to_section(viewport, &id);
                self.menu_open = false;
                None
            }
            PageEvent::FieldChanged(field, value) => {
                self.form.set(field, value);
                None
            }
            PageEvent::Submit => Some(match self.form.submit() {
                Ok(submission) => {
                    log::info!("contact form submitted by {}", submission.name);
                    Notice::Acknowledged(submission)
                }
                Err(err) => Notice::Invalid(err),
            }),
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.contains(section)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashMap};

    use super::*;

    // Document laid out as a column of sections at fixed document offsets.
    struct FakeViewport {
        offsets: HashMap<&'static str, f64>,
        scroll_y: Cell<f64>,
        scroll_requests: Cell<usize>,
    }

    impl FakeViewport {
        fn new() -> Self {
            let offsets = Section::ALL
                .into_iter()
                .enumerate()
                .map(|(i, s)| (s.id(), i as f64 * 900.0))
                .collect();
            Self {
                offsets,
                scroll_y: Cell::new(0.0),
                scroll_requests: Cell::new(0),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.offsets.get(id).map(|offset| offset - self.scroll_y.get())
        }

        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scroll_requests.set(self.scroll_requests.get() + 1);
            self.scroll_y.set(top);
        }
    }

    #[test]
    fn test_seen_sections_stay_visible() {
        let viewport = FakeViewport::new();
        let mut state = PageState::new();
        assert!(!state.is_visible(Section::Skills));

        state.apply(PageEvent::SectionIntersected(Section::Skills), &viewport);
        state.apply(PageEvent::Scrolled(4000.0), &viewport);
        state.apply(PageEvent::SectionIntersected(Section::Contact), &viewport);
        state.apply(PageEvent::Scrolled(0.0), &viewport);

        assert!(state.is_visible(Section::Skills));
        assert!(state.is_visible(Section::Contact));
        assert!(!state.is_visible(Section::Projects));
        assert_eq!(state.visible.len(), 2);
    }

    #[test]
    fn test_scrolled_flag_tracks_each_event() {
        let viewport = FakeViewport::new();
        let mut state = PageState::new();

        state.apply(PageEvent::Scrolled(51.0), &viewport);
        assert!(state.scrolled);
        state.apply(PageEvent::Scrolled(50.0), &viewport);
        assert!(!state.scrolled);
        state.apply(PageEvent::Scrolled(300.0), &viewport);
        assert!(state.scrolled);
        state.apply(PageEvent::Scrolled(0.0), &viewport);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_nav_class() {
        assert_eq!(nav_class(false), "bg-transparent");
        assert!(nav_class(true).contains("backdrop-blur-xl"));
    }

    #[test]
    fn test_submit_valid_form() {
        let viewport = FakeViewport::new();
        let mut state = PageState::new();
        state.apply(PageEvent::FieldChanged(Field::Name, "Ann".into()), &viewport);
        state.apply(PageEvent::FieldChanged(Field::Email, "a@b.com".into()), &viewport);
        state.apply(PageEvent::FieldChanged(Field::Phone, "123".into()), &viewport);
        state.apply(PageEvent::FieldChanged(Field::Message, "hi".into()), &viewport);

        let notice = state
            .apply(PageEvent::Submit, &viewport)
            .expect("submit should produce a notice");
        assert!(!notice.is_error());
        let text = notice.to_string();
        assert!(text.contains("Ann"));
        assert!(text.contains("a@b.com"));
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn test_submit_missing_name() {
        let viewport = FakeViewport::new();
        let mut state = PageState::new();
        state.apply(PageEvent::FieldChanged(Field::Email, "a@b.com".into()), &viewport);
        state.apply(PageEvent::FieldChanged(Field::Phone, "123".into()), &viewport);
        state.apply(PageEvent::FieldChanged(Field::Message, "hi".into()), &viewport);
        let before = state.form.clone();

        let notice = state.apply(PageEvent::Submit, &viewport);
        assert_eq!(notice, Some(Notice::Invalid(ContactError::MissingRequired)));
        assert_eq!(state.form, before);
    }

    #[test]
    fn test_navigate_aligns_below_header() {
        let viewport = FakeViewport::new();
        let mut state = PageState::new();

        state.apply(PageEvent::navigate(Section::Projects), &viewport);
        assert_eq!(viewport.element_top("projects"), Some(HEADER_CLEARANCE));

        // from a scrolled position the target is still absolute
        state.apply(PageEvent::navigate(Section::Skills), &viewport);
        assert_eq!(viewport.element_top("skills"), Some(HEADER_CLEARANCE));
        assert_eq!(viewport.scroll_y(), 900.0 - HEADER_CLEARANCE);
    }

    #[test]
    fn test_navigate_unknown_id_still_closes_menu() {
        let viewport = FakeViewport::new();
        viewport.scroll_y.set(1234.0);
        let mut state = PageState::new();

        state.apply(PageEvent::ToggleMenu, &viewport);
        assert!(state.menu_open);
        state.apply(PageEvent::NavigateTo("blog".to_string()), &viewport);

        assert!(!state.menu_open);
        assert_eq!(viewport.scroll_y(), 1234.0);
        assert_eq!(viewport.scroll_requests.get(), 0);
        assert_eq!(scroll_to_section(&viewport, "nope"), None);
    }

    #[test]
    fn test_navigate_closes_open_menu() {
        let viewport = FakeViewport::new();
        let mut state = PageState::new();

        for section in Section::ALL {
            state.apply(PageEvent::ToggleMenu, &viewport);
            assert!(state.menu_open);
            state.apply(PageEvent::navigate(section), &viewport);
            assert!(!state.menu_open);
        }
        assert_eq!(viewport.scroll_requests.get(), Section::ALL.len());
    }

    #[test]
    fn test_toggle_menu() {
        let viewport = FakeViewport::new();
        let mut state = PageState::new();
        state.apply(PageEvent::ToggleMenu, &viewport);
        state.apply(PageEvent::ToggleMenu, &viewport);
        assert!(!state.menu_open);
    }
}
