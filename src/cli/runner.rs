//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PagerConfig};
use crate::error::Result;
use crate::pagination::PaginationParams;
use crate::render::HtmlRenderer;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Render {
                total,
                per_page,
                page,
                url,
                target,
                partial_url,
                format,
            } => {
                let params = PaginationParams {
                    total: *total,
                    per_page: *per_page,
                    page: Some(*page),
                    base_url: url.clone(),
                    target: target.clone(),
                    partial_url: partial_url.clone(),
                };
                let output = render_output(&config, &params, *format)?;
                println!("{output}");
                Ok(())
            }
            Commands::Serve { port } => {
                let server_config = crate::cli::ServerConfig { pager: config };
                crate::cli::serve(server_config, *port).await
            }
        }
    }

    /// Load the config file, or defaults when none was given
    fn load_config(&self) -> Result<PagerConfig> {
        match &self.cli.config {
            Some(path) => {
                let config = load_config(path)?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            None => Ok(PagerConfig::default()),
        }
    }
}

/// Render `params` in the requested format
pub fn render_output(
    config: &PagerConfig,
    params: &PaginationParams,
    format: OutputFormat,
) -> Result<String> {
    let engine = params
        .build(config.default_per_page)?
        .with_page_param(&config.page_param);

    match format {
        OutputFormat::Html => {
            Ok(engine.render_with(&HtmlRenderer::new(config.markup.clone())))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&engine.summary())?),
    }
}
