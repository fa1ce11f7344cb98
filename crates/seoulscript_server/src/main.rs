use anyhow::Result;
use clap::Parser;
use seoulscript_server::{ObservabilityConfig, ServiceConfig, build_app, init_observability};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "SeoulScript K-drama generation service")]
struct Args {
    /// Listen address (overrides SEOULSCRIPT_BIND_ADDR)
    #[arg(short, long)]
    bind: Option<String>,

    /// Directory holding structure.json, tropes.json and summaries.txt
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Configuration file (default: ./seoulscript.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let observability = ObservabilityConfig {
        log_level: log_level.to_string(),
        json_logs: args.json_logs,
    };
    init_observability(&observability)
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    let mut config = ServiceConfig::load_from(args.config.as_deref(), std::env::vars().collect())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(root) = args.root {
        config.app_root = root;
    }
    let addr = config.socket_addr()?;

    let router = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        addr = %addr,
        model = %config.openai_model,
        mvp_model = %config.openai_mvp_model,
        "SeoulScript server listening"
    );
    axum::serve(listener, router).await?;

    Ok(())
}
