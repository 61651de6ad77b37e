//! CLI module
//!
//! Command-line interface for rendering pagination controls.
//!
//! # Commands
//!
//! - `render` - Print the control (HTML) or the computed window (JSON)
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{render_output, Runner};
pub use server::{router, serve, ServerConfig};
