#[cfg(test)]
#[path = "navigator_test.rs"]
mod tests;

use crate::domain::models::NavLink;
use crate::domain::models::Region;

/// Scroll-spy over the side navigation: tracks which section the scroll
/// position sits in and which nav link should be highlighted for it.
pub struct Navigator {
    links: Vec<NavLink>,
    sections: Vec<Region>,
    lookahead: i64,
    active: Option<String>,
}

impl Navigator {
    pub fn new(links: Vec<NavLink>, lookahead: i64) -> Navigator {
        return Navigator {
            links,
            sections: vec![],
            lookahead,
            active: None,
        };
    }

    /// Replace the section geometry. Called whenever the document is laid out
    /// again, so the spy survives resizes.
    pub fn set_sections(&mut self, sections: Vec<Region>) {
        self.sections = sections;
    }

    /// Recompute the active section for a scroll offset. Sections are visited
    /// in document order and each one whose activation line has been passed
    /// overwrites the previous candidate, so the furthest-down section wins.
    /// Offsets above the top of the document select nothing.
    pub fn on_scroll(&mut self, offset: i64) {
        if offset < 0 {
            self.active = None;
            return;
        }

        let mut current = None;
        for section in &self.sections {
            if offset >= (section.top - self.lookahead).max(0) {
                current = Some(section.id.clone());
            }
        }

        self.active = current;
    }

    pub fn active_section(&self) -> Option<&str> {
        return self.active.as_deref();
    }

    /// Index of the highlighted nav link: the first link whose target
    /// contains the active section id. Substring containment, not equality,
    /// mirroring anchor-href matching.
    pub fn active_link(&self) -> Option<usize> {
        let id = self.active.as_deref()?;
        return self.links.iter().position(|link| link.target.contains(id));
    }

    pub fn links(&self) -> &[NavLink] {
        return &self.links;
    }
}
