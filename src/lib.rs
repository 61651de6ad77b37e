//! # pagelinks
//!
//! Windowed page-link generation for server-rendered catalog pages.
//!
//! Given a result-set size, a page size and the requested page, the engine
//! picks a bounded set of page links and renders each one so it works both
//! as a plain navigation and as a partial-update request.
//!
//! ## Features
//!
//! - **Page Window**: first pages, pages around the current one, last pages
//! - **Dual Links**: plain `href` plus htmx `hx-get`/`hx-target` on every link
//! - **Parameter Preservation**: search terms and filters survive, sorted by key
//! - **Forgiving Input**: out-of-range pages are clamped, never rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelinks::PaginationEngine;
//!
//! let engine = PaginationEngine::new(500, 10, 25, "/artworks?q=rubens")?
//!     .with_partial_target("results");
//!
//! assert_eq!(engine.total_pages(), 50);
//! assert!(engine.render().contains(r#"aria-current="page">25<"#));
//! # Ok::<(), pagelinks::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! PaginationState ──► compute_window ──► Vec<PageItem> ──► PageRenderer
//!  (clamped input)     (page numbers)     (links/markers)    (HTML fragment)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Page window and link generation
pub mod pagination;

/// Markup rendering
pub mod render;

/// Configuration loading
pub mod config;

/// Command-line interface and fragment server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, load_config_from_str, MarkupConfig, PagerConfig};
pub use error::{Error, Result};
pub use pagination::{PageItem, PaginationEngine, PaginationParams, Window};
pub use render::{HtmlRenderer, PageRenderer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
