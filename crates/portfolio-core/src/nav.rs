use crate::constants::NAV_SCROLL_PROBE_OFFSET;

/// In-page links are the only ones tracked for scroll highlighting.
#[inline]
pub fn is_in_page_link(href: &str) -> bool {
    href.starts_with('#')
}

/// Index of the link whose section contains the scroll probe.
///
/// `section_tops[i]` is the document offset of the section targeted by link
/// `i`, or `None` when the target is missing. The last present section whose
/// top is at or above `scroll_y + 120` wins; with none, the first link does.
pub fn active_index(scroll_y: f64, section_tops: &[Option<f64>]) -> usize {
    let probe = scroll_y + NAV_SCROLL_PROBE_OFFSET;
    section_tops
        .iter()
        .enumerate()
        .filter_map(|(i, top)| top.filter(|t| probe >= *t).map(|_| i))
        .last()
        .unwrap_or(0)
}

/// Open/closed state of the collapsible mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[inline]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[inline]
    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}
