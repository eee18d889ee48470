//! Nutri-Score Calculator
//!
//! An MCP server grading foods from their nutrition labels.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutriscore::build_info;
use nutriscore::config::ServiceConfig;
use nutriscore::mcp::NutriScoreService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr, stdout carries the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutriscore=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ServiceConfig::from_env();
    tracing::info!(
        max_batch = config.max_batch,
        strict_input = config.strict_input,
        "Loaded configuration"
    );

    eprintln!("Starting MCP server on stdio...");
    let service = NutriScoreService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
