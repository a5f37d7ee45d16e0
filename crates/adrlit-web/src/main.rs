//! adrlit — ADR literature extractor
//!
//! Run the dashboard with: cargo run -p adrlit-web -- serve

use anyhow::Context;
use clap::Parser;
use tracing::info;

use adrlit_config::AppConfig;
use adrlit_web::cli::{init_tracing, run_extract, Cli, Command};
use adrlit_web::router::build_router;
use adrlit_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    // Logs go to stderr so `extract` output on stdout stays clean
    init_tracing(&config.logging.level)?;

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => serve(config, bind).await,
        Command::Extract { input, humanize, format } => {
            let output = run_extract(&config, &input, humanize, format)?;
            println!("{}", output.trim_end());
            Ok(())
        }
    }
}

async fn serve(mut config: AppConfig, bind: Option<String>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    let addr = config.server.bind.clone();

    info!("Starting adrlit dashboard...");
    let app = build_router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
