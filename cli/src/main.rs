//! CLI entrypoint for gemchat
//!
//! Wires the layers together: flags → logging → configuration →
//! credential → Gemini gateway → TUI.

use anyhow::{Context, Result};
use clap::Parser;
use gemchat_domain::Model;
use gemchat_infrastructure::{ConfigLoader, GeminiConfig, GeminiGateway};
use gemchat_presentation::{Cli, TuiApp};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. The TUI owns the
    // terminal, so log lines go to a file instead of stderr.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::never(&log_dir, "gemchat.log");
    let (writer, _log_guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    info!("Starting gemchat");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // The credential is the one start-up-fatal requirement
    let api_key = ConfigLoader::resolve_api_key(&config)?;

    let model: Model = match &cli.model {
        Some(s) => s.parse().unwrap(),
        None => config.provider.model.clone(),
    };

    info!(model = %model, "Configuration loaded");

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(GeminiConfig {
        api_key,
        base_url: config.provider.base_url.clone(),
        connect_timeout: Duration::from_secs(config.provider.connect_timeout_secs),
        timeout: Duration::from_secs(config.provider.timeout_secs),
        max_output_tokens: config.provider.max_output_tokens,
    })?);

    let mut app = TuiApp::new(gateway, model).with_tick_ms(config.tui.tick_ms);
    app.run().await?;

    info!("gemchat exited");
    Ok(())
}

/// Directory for the log file: the platform state dir, or a temp fallback
fn log_directory() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|d| d.join("gemchat"))
        .unwrap_or_else(|| std::env::temp_dir().join("gemchat"))
}
