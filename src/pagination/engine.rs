//! Pagination engine
//!
//! Holds the normalized pagination state for one render and turns the page
//! window into typed items and markup.

use super::page_url::PageUrl;
use super::types::{PageItem, PageSummary, Rel, Window};
use super::window::compute_window;
use crate::error::{Error, Result};
use crate::render::{HtmlRenderer, PageRenderer};
use serde::{Deserialize, Deserializer};
use std::num::IntErrorKind;
use tracing::debug;

/// Default query parameter carrying the page number
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Normalized pagination state.
///
/// Only [`PaginationState::new`] builds one, so every state carries a
/// positive page size and a page clamped into range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    total_amount: u64,
    per_page: u64,
    current_page: u64,
    total_pages: u64,
    base_url: PageUrl,
    /// Without the leading `#`
    partial_target_id: String,
    partial_base_url: PageUrl,
    page_param: String,
}

impl PaginationState {
    /// Build a normalized state.
    ///
    /// Fails only when `per_page` is not positive. Negative totals count as
    /// zero and the requested page is clamped into `[1, total_pages]`.
    pub fn new(
        total_amount: i64,
        per_page: i64,
        current_page: i64,
        base_url: &str,
        partial_target_id: &str,
        partial_base_url: &str,
    ) -> Result<Self> {
        if per_page <= 0 {
            return Err(Error::InvalidPerPage { per_page });
        }
        let per_page = per_page as u64;

        if total_amount < 0 {
            debug!(total_amount, "negative item count normalized to zero");
        }
        let total_amount = total_amount.max(0) as u64;
        let total_pages = total_amount.div_ceil(per_page);
        let clamped = clamp_page(current_page, total_pages);
        if i64::try_from(clamped).ok() != Some(current_page) {
            debug!(
                requested = current_page,
                page = clamped,
                total_pages,
                "requested page clamped into range"
            );
        }

        let base_url = PageUrl::parse(base_url);
        let partial_base_url = if partial_base_url.trim().is_empty() {
            base_url.clone()
        } else {
            PageUrl::parse(partial_base_url)
        };

        Ok(Self {
            total_amount,
            per_page,
            current_page: clamped,
            total_pages,
            base_url,
            partial_target_id: normalize_target(partial_target_id),
            partial_base_url,
            page_param: DEFAULT_PAGE_PARAM.to_string(),
        })
    }

    /// Total number of items across all pages
    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    /// Items per page (never zero)
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// 1-based current page, clamped into range
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Number of pages, zero for an empty result set
    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Target for plain navigation links
    pub fn base_url(&self) -> &PageUrl {
        &self.base_url
    }

    /// Target for partial-update requests
    pub fn partial_base_url(&self) -> &PageUrl {
        &self.partial_base_url
    }

    /// DOM region a partial update replaces, without the leading `#`
    pub fn partial_target_id(&self) -> &str {
        &self.partial_target_id
    }

    /// Query parameter carrying the page number
    pub fn page_param(&self) -> &str {
        &self.page_param
    }
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`
fn clamp_page(requested: i64, total_pages: u64) -> u64 {
    let requested = requested.max(1) as u64;
    requested.min(total_pages.max(1))
}

fn normalize_target(target: &str) -> String {
    target.trim().trim_start_matches('#').to_string()
}

/// Parse an integer from untrusted request text.
///
/// Empty or non-numeric text yields `None`; out-of-range numbers saturate.
pub fn parse_lenient_int(text: &str) -> Option<i64> {
    let text = text.trim();
    match text.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn lenient_int<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    Ok(text.as_deref().and_then(parse_lenient_int))
}

fn lenient_total<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_int(deserializer)?.unwrap_or(0))
}

/// Typed pagination inputs as they arrive from a request.
///
/// `total` and `page` come from untrusted query strings and never fail to
/// deserialize: garbage reads as 0 items and page 1. `per_page` stays
/// strict since a bad page size is a configuration error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    /// Total number of items
    #[serde(default, deserialize_with = "lenient_total")]
    pub total: i64,
    /// Items per page
    pub per_page: Option<i64>,
    /// Requested page
    #[serde(default, deserialize_with = "lenient_int")]
    pub page: Option<i64>,
    /// Base URL for plain navigation
    #[serde(default)]
    pub base_url: String,
    /// DOM region for partial updates
    #[serde(default)]
    pub target: String,
    /// Base URL for partial-update requests
    #[serde(default)]
    pub partial_url: String,
}

impl PaginationParams {
    /// Build an engine, using `default_per_page` when none was supplied
    pub fn build(&self, default_per_page: i64) -> Result<PaginationEngine> {
        let state = PaginationState::new(
            self.total,
            self.per_page.unwrap_or(default_per_page),
            self.page.unwrap_or(1),
            &self.base_url,
            &self.target,
            &self.partial_url,
        )?;
        Ok(PaginationEngine::from_state(state))
    }
}

/// Computes the visible page window and renders it as links
#[derive(Debug, Clone)]
pub struct PaginationEngine {
    state: PaginationState,
}

impl PaginationEngine {
    /// Create an engine for `total_amount` items, `per_page` per page,
    /// positioned at `current_page`, linking to `base_url`.
    pub fn new(total_amount: i64, per_page: i64, current_page: i64, base_url: &str) -> Result<Self> {
        let state = PaginationState::new(total_amount, per_page, current_page, base_url, "", "")?;
        Ok(Self { state })
    }

    /// Create an engine from an already normalized state
    pub fn from_state(state: PaginationState) -> Self {
        Self { state }
    }

    /// Set the DOM region partial updates should replace
    #[must_use]
    pub fn with_partial_target(mut self, target_id: &str) -> Self {
        self.state.partial_target_id = normalize_target(target_id);
        self
    }

    /// Set the base URL for partial-update requests. Empty keeps the plain base URL.
    #[must_use]
    pub fn with_partial_url(mut self, partial_base_url: &str) -> Self {
        self.state.partial_base_url = if partial_base_url.trim().is_empty() {
            self.state.base_url.clone()
        } else {
            PageUrl::parse(partial_base_url)
        };
        self
    }

    /// Use a different query parameter for the page number.
    /// Empty keeps the current one.
    #[must_use]
    pub fn with_page_param(mut self, page_param: &str) -> Self {
        if !page_param.is_empty() {
            self.state.page_param = page_param.to_string();
        }
        self
    }

    /// Get the normalized state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Check if there is more than one page to navigate
    pub fn has_pages(&self) -> bool {
        self.state.total_pages > 1
    }

    /// Number of pages
    pub fn total_pages(&self) -> u64 {
        self.state.total_pages
    }

    /// Clamped current page
    pub fn current_page(&self) -> u64 {
        self.state.current_page
    }

    /// Total number of items
    pub fn total_amount(&self) -> u64 {
        self.state.total_amount
    }

    /// Items per page
    pub fn per_page(&self) -> u64 {
        self.state.per_page
    }

    /// DOM region for partial updates, if one was given
    pub fn partial_target(&self) -> Option<&str> {
        Some(self.state.partial_target_id.as_str()).filter(|t| !t.is_empty())
    }

    /// Visible page numbers
    pub fn window(&self) -> Window {
        compute_window(self.state.total_pages, self.state.current_page)
    }

    /// Build the control's items in display order.
    ///
    /// Empty when there is at most one page.
    pub fn items(&self) -> Vec<PageItem> {
        if !self.has_pages() {
            return Vec::new();
        }

        let current = self.state.current_page;
        let window = self.window();
        let mut items = Vec::with_capacity(window.pages().count() + 4);

        items.push(if current <= 1 {
            PageItem::Disabled { rel: Rel::Previous }
        } else {
            self.link(current - 1, Rel::Previous)
        });

        let mut previous_end: Option<u64> = None;
        for segment in window.segments() {
            if let (Some(end), Some(&start)) = (previous_end, segment.first()) {
                if start > end + 1 {
                    items.push(PageItem::Ellipsis);
                }
            }
            for &page in segment {
                items.push(self.page_item(page));
            }
            previous_end = segment.last().copied();
        }

        items.push(if current >= self.state.total_pages {
            PageItem::Disabled { rel: Rel::Next }
        } else {
            self.link(current + 1, Rel::Next)
        });

        items
    }

    /// Computed state and items without markup
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            total_amount: self.state.total_amount,
            per_page: self.state.per_page,
            total_pages: self.state.total_pages,
            current_page: self.state.current_page,
            has_pages: self.has_pages(),
            window: self.window(),
            items: self.items(),
        }
    }

    /// Render with the default HTML markup
    pub fn render(&self) -> String {
        self.render_with(&HtmlRenderer::default())
    }

    /// Render with a custom renderer
    pub fn render_with(&self, renderer: &impl PageRenderer) -> String {
        let items = self.items();
        if items.is_empty() {
            return String::new();
        }
        renderer.render(&items, self.partial_target())
    }

    fn page_item(&self, page: u64) -> PageItem {
        if page == self.state.current_page {
            PageItem::Current { page }
        } else {
            self.link(page, Rel::Page)
        }
    }

    fn link(&self, page: u64, rel: Rel) -> PageItem {
        let param = self.state.page_param.as_str();
        PageItem::Link {
            page,
            href: self.state.base_url.with_page(param, page),
            partial_href: self.state.partial_base_url.with_page(param, page),
            rel,
        }
    }
}
