//! Portfolio site server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ edge header rule ─▶ router
//!                                                        │
//!                      ┌─────────────────────────────────┼──────────────────┐
//!                      ▼                                 ▼                  ▼
//!                GET / (page)                    /integrations/...     anything else
//!                GET /health                     → upstream (opt.)      → 404
//!
//!     Cross-cutting: config (TOML + hot reload), tracing, metrics,
//!                    timeouts, body limits, graceful shutdown
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Serve the portfolio site.
#[derive(Debug, Parser)]
#[command(name = "portfolio-site", version, about)]
struct Cli {
    /// Path to a TOML configuration file; defaults are used when omitted.
    #[arg(short, long, env = "PORTFOLIO_SITE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    portfolio_site::lifecycle::start(cli.config.as_deref()).await?;
    Ok(())
}
