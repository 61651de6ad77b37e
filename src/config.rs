//! Configuration for the pagination control
//!
//! Settings are usually loaded from a YAML file:
//!
//! ```yaml
//! page_param: page
//! default_per_page: 16
//! markup:
//!   nav_class: pagination
//!   push_url: true
//! ```
//!
//! Every field is optional and falls back to the defaults below.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Pagination settings shared by the CLI and the fragment server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Query parameter carrying the page number
    pub page_param: String,

    /// Items per page when a request does not say
    pub default_per_page: i64,

    /// Markup settings for the HTML renderer
    pub markup: MarkupConfig,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_param: crate::pagination::DEFAULT_PAGE_PARAM.to_string(),
            default_per_page: 16,
            markup: MarkupConfig::default(),
        }
    }
}

impl PagerConfig {
    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.page_param.trim().is_empty() {
            return Err(Error::invalid_value("page_param", "must not be empty"));
        }
        if self.default_per_page <= 0 {
            return Err(Error::invalid_value(
                "default_per_page",
                format!("must be greater than zero, got {}", self.default_per_page),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Markup
// ============================================================================

/// Class names and labels used by [`crate::render::HtmlRenderer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Class of the `<nav>` wrapper
    pub nav_class: String,
    /// `aria-label` of the `<nav>` wrapper
    pub aria_label: String,
    /// Class of the `<ul>` list
    pub list_class: String,
    /// Class of every link and page marker
    pub link_class: String,
    /// Extra class of the current page marker
    pub current_class: String,
    /// Extra class of disabled previous/next buttons
    pub disabled_class: String,
    /// Class of the ellipsis marker
    pub ellipsis_class: String,
    /// Label of the previous button
    pub previous_label: String,
    /// Label of the next button
    pub next_label: String,
    /// Text of the ellipsis marker
    pub ellipsis_label: String,
    /// Push the plain URL into browser history on partial updates
    pub push_url: bool,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            nav_class: "pagination".to_string(),
            aria_label: "Pagination".to_string(),
            list_class: "pagination-list".to_string(),
            link_class: "page-link".to_string(),
            current_class: "is-current".to_string(),
            disabled_class: "is-disabled".to_string(),
            ellipsis_class: "page-ellipsis".to_string(),
            previous_label: "«".to_string(),
            next_label: "»".to_string(),
            ellipsis_label: "…".to_string(),
            push_url: true,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate a config file
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    load_config_from_str(&content)
        .with_context(|| format!("Invalid config file '{}'", path.display()))
}

/// Load and validate config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    // serde_yaml reads an empty document as null
    let config: PagerConfig = if yaml.trim().is_empty() {
        PagerConfig::default()
    } else {
        serde_yaml::from_str(yaml)?
    };
    config.validate()?;
    Ok(config)
}
