//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration (`.env`, environment, then
//! command-line overrides) and serves the configured transport.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use payrix_mcp_server::core::{Config, McpServer, Toolset, TransportConfig, TransportService};

/// Payrix MCP server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Transport to serve: stdio (alias io) or http (alias sse).
    #[arg(short, long)]
    transport: Option<String>,

    /// Comma-separated toolsets to enable: payrix, calculator, joke, time.
    #[arg(long)]
    toolsets: Option<String>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env must be loaded before the level is resolved so MCP_LOG_LEVEL works from it
    dotenvy::dotenv().ok();
    let level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("MCP_LOG_LEVEL").ok())
        .unwrap_or_else(|| "info".to_string());
    init_logging(&level);

    let mut config = Config::from_env();
    config.logging.level = level;
    apply_overrides(&mut config, &cli)?;

    info!("Starting {} v{}", config.server.name, config.server.version);
    if config.has_toolset(Toolset::Payrix) && config.payrix.api_url.is_empty() {
        warn!("API_URL is not set; Payrix tools will return errors until it is configured");
    }

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config).context("failed to initialize server")?;

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(kind) = &cli.transport {
        config.transport = TransportConfig::from_kind(kind)?;
    }
    if let Some(list) = &cli.toolsets {
        config.toolsets = Toolset::parse_list(list);
    }
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr: stdout carries the stdio transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
