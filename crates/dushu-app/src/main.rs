use std::io::{self, Write};

use clap::Parser;
use dushu_config::log::LogFormat;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod input;
pub mod profile;
pub mod render;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let (mut config, source) = profile::load_config(cli.config.as_deref())?;
    profile::apply_cli_overrides(&mut config, &cli);

    init_tracing(config.log.format);
    tracing::info!("Config loaded from {}", source);
    tracing::debug!("Effective config: {:?}", config);

    let state = AppState::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::handle_command(&state, cli.command, &mut out).await?;
    out.flush()?;

    Ok(())
}

/// Log to stderr so stdout stays clean for rendered output
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder
            .with_ansi(atty::is(atty::Stream::Stderr))
            .compact()
            .init(),
    }
}
