//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Windowed page-link generator
#[derive(Parser, Debug)]
#[command(name = "pagelinks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the pagination control for a result set
    Render {
        /// Total number of items
        #[arg(long, allow_negative_numbers = true)]
        total: i64,

        /// Items per page (defaults to the configured value)
        #[arg(long, allow_negative_numbers = true)]
        per_page: Option<i64>,

        /// Requested page
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Base URL for plain navigation links
        #[arg(long, default_value = "")]
        url: String,

        /// DOM region partial updates replace
        #[arg(long, default_value = "")]
        target: String,

        /// Base URL for partial-update requests (defaults to --url)
        #[arg(long, default_value = "")]
        partial_url: String,

        /// Output format
        #[arg(short, long, default_value = "html")]
        format: OutputFormat,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// HTML fragment
    Html,
    /// JSON summary of the computed window
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "pagelinks",
            "render",
            "--total",
            "500",
            "--page",
            "-2",
            "--url",
            "/artworks?q=rubens",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                total,
                per_page,
                page,
                url,
                format,
                ..
            } => {
                assert_eq!(total, 500);
                assert_eq!(per_page, None);
                assert_eq!(page, -2);
                assert_eq!(url, "/artworks?q=rubens");
                assert_eq!(format, OutputFormat::Json);
            }
            Commands::Serve { .. } => panic!("Expected Render"),
        }
    }

    #[test]
    fn test_parse_serve_with_global_config() {
        let cli =
            Cli::try_parse_from(["pagelinks", "serve", "--port", "9000", "-c", "pager.yaml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pager.yaml")));
        assert!(matches!(cli.command, Commands::Serve { port: 9000 }));
    }
}
