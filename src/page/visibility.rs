use std::collections::BTreeSet;

use crate::content::Section;

/// Portion of a section that must be on screen before it counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Pulls the bottom edge of the detection area 100px above the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Sections that have intersected the viewport at least once.
///
/// Grow-only for the lifetime of a page view: once a section is in here its
/// reveal animation has played and must not replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSections(BTreeSet<Section>);

impl VisibleSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only the first time a section is marked.
    pub fn mark(&mut self, section: Section) -> bool {
        let inserted = self.0.insert(section);
        if inserted {
            log::debug!("section revealed: {section}");
        }
        inserted
    }

    pub fn contains(&self, section: Section) -> bool {
        self.0.contains(&section)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Fade in while rising into place.
    Rise,
    /// Fade in while sliding in from the right.
    Slide,
    Grow,
    Fade,
}

impl Reveal {
    pub fn classes(self, visible: bool) -> &'static str {
        match (self, visible) {
            (Reveal::Rise, true) => "opacity-100 translate-y-0",
            (Reveal::Rise, false) => "opacity-0 translate-y-10",
            (Reveal::Slide, true) => "opacity-100 translate-x-0",
            (Reveal::Slide, false) => "opacity-0 translate-x-10",
            (Reveal::Grow, true) => "opacity-100 scale-100",
            (Reveal::Grow, false) => "opacity-0 scale-95",
            (Reveal::Fade, true) => "opacity-100",
            (Reveal::Fade, false) => "opacity-0",
        }
    }
}

/// Inline style staggering card transitions within a grid.
pub fn stagger_style(base_ms: u32, step_ms: u32, index: usize) -> String {
    let delay = base_ms as usize + step_ms as usize * index;
    format!("transition-delay: {delay}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_idempotent() {
        let mut visible = VisibleSections::new();
        assert!(visible.is_empty());
        assert!(visible.mark(Section::Skills));
        assert!(!visible.mark(Section::Skills));
        assert_eq!(visible.len(), 1);
        assert!(visible.contains(Section::Skills));
        assert!(!visible.contains(Section::Projects));
    }

    #[test]
    fn test_marks_accumulate() {
        let mut visible = VisibleSections::new();
        visible.mark(Section::Contact);
        visible.mark(Section::About);
        visible.mark(Section::Contact);
        assert_eq!(visible.len(), 2);
        assert!(visible.contains(Section::About));
        assert!(visible.contains(Section::Contact));
    }

    #[test]
    fn test_reveal_classes() {
        assert_eq!(Reveal::Rise.classes(false), "opacity-0 translate-y-10");
        assert_eq!(Reveal::Rise.classes(true), "opacity-100 translate-y-0");
        assert_eq!(Reveal::Slide.classes(false), "opacity-0 translate-x-10");
        assert_eq!(Reveal::Grow.classes(true), "opacity-100 scale-100");
        assert_eq!(Reveal::Fade.classes(false), "opacity-0");
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(400, 150, 0), "transition-delay: 400ms");
        assert_eq!(stagger_style(400, 150, 3), "transition-delay: 850ms");
        assert_eq!(stagger_style(400, 100, 4), "transition-delay: 800ms");
    }
}
