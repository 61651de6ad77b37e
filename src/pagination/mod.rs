//! Pagination module
//!
//! Computes a bounded window of page links and turns it into items that
//! work for both plain navigation and partial-update requests.
//!
//! # Overview
//!
//! Small result sets list every page. Larger ones show the first pages, an
//! ellipsis, the pages around the current one, another ellipsis, and the last
//! pages. Every link keeps the other query parameters of the base URL.

mod engine;
mod page_url;
mod types;
mod window;

pub use engine::{
    parse_lenient_int, PaginationEngine, PaginationParams, PaginationState, DEFAULT_PAGE_PARAM,
};
pub use page_url::PageUrl;
pub use types::{PageItem, PageSummary, Rel, Window};
pub use window::{compute_window, COLLAPSE_THRESHOLD, ON_EACH_SIDE};
