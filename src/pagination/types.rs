//! Pagination types
//!
//! Defines the window segments and the typed items the engine hands to a
//! renderer.

use serde::Serialize;

/// Role of a page reference within the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rel {
    /// The "previous page" button
    Previous,
    /// The "next page" button
    Next,
    /// A numbered page
    Page,
}

/// One element of the rendered pagination control, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    /// A navigable page reference carrying both affordances
    Link {
        /// Target page number
        page: u64,
        /// Plain navigation URL
        href: String,
        /// Partial-update request URL
        partial_href: String,
        /// Numbered page or previous/next button
        rel: Rel,
    },
    /// The page currently shown
    Current {
        /// Current page number
        page: u64,
    },
    /// A previous/next button with nowhere to go
    Disabled {
        /// Which button is disabled
        rel: Rel,
    },
    /// Omitted run of pages
    Ellipsis,
}

impl PageItem {
    /// Page number this item refers to, if any
    pub fn page(&self) -> Option<u64> {
        match self {
            Self::Link { page, .. } | Self::Current { page } => Some(*page),
            Self::Disabled { .. } | Self::Ellipsis => None,
        }
    }

    /// Check if this is a numbered page (link or current marker)
    pub fn is_numbered(&self) -> bool {
        matches!(
            self,
            Self::Link { rel: Rel::Page, .. } | Self::Current { .. }
        )
    }
}

/// The visible page numbers, split into up to three segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Window {
    /// Leading pages
    pub first: Vec<u64>,
    /// Pages around the current one (interior regime only)
    pub middle: Vec<u64>,
    /// Trailing pages
    pub last: Vec<u64>,
}

impl Window {
    /// Check if the window shows no pages
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.middle.is_empty() && self.last.is_empty()
    }

    /// All page numbers in display order
    pub fn pages(&self) -> impl Iterator<Item = u64> + '_ {
        self.first
            .iter()
            .chain(&self.middle)
            .chain(&self.last)
            .copied()
    }

    /// Non-empty segments in display order
    pub fn segments(&self) -> impl Iterator<Item = &[u64]> {
        [&self.first, &self.middle, &self.last]
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .map(Vec::as_slice)
    }
}

/// Computed pagination state without markup, for JSON consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// Total number of items
    pub total_amount: u64,
    /// Items per page
    pub per_page: u64,
    /// Number of pages
    pub total_pages: u64,
    /// Clamped current page
    pub current_page: u64,
    /// Whether a control is shown at all
    pub has_pages: bool,
    /// Visible page numbers
    pub window: Window,
    /// Items in display order
    pub items: Vec<PageItem>,
}
