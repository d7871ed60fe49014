// ABOUTME: Entry point for the varsheet binary.
// ABOUTME: Loads a registry snapshot and serves create-css/cancel messages as JSON lines over stdio.

mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use varsheet_core::{Dispatcher, Outcome, StyleRegistry, UiResponse, load_snapshot};

use crate::config::HostConfig;

/// Export design-tool styles and variables as CSS custom properties.
#[derive(Debug, Parser)]
#[command(name = "varsheet", version, about)]
struct Cli {
    /// Registry snapshot to read (.json, .yaml or .yml). Overrides VARSHEET_REGISTRY.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Pretty-print outbound messages.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("varsheet=info,varsheet_core=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = HostConfig::from_env()?.with_overrides(cli.registry, cli.pretty);

    let snapshot = load_snapshot(&config.registry)
        .with_context(|| format!("loading registry snapshot {}", config.registry.display()))?;
    tracing::info!(registry = %config.registry.display(), "varsheet session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    serve(Dispatcher::new(snapshot), stdin.lock(), &mut stdout, config.pretty)
}

/// Feed each input line to the dispatcher until cancel or end of input.
fn serve<R: StyleRegistry>(
    mut dispatcher: Dispatcher<R>,
    input: impl BufRead,
    output: &mut impl Write,
    pretty: bool,
) -> anyhow::Result<()> {
    for raw in input.split(b'\n') {
        let raw = raw.context("reading request")?;
        let Ok(line) = std::str::from_utf8(&raw) else {
            tracing::debug!(bytes = raw.len(), "ignoring request that is not valid utf-8");
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        match dispatcher.handle_json(line) {
            Ok(Outcome::Reply(response)) => write_response(output, &response, pretty)?,
            Ok(Outcome::Close) => break,
            Ok(Outcome::Ignored) => {}
            Err(e) => tracing::error!(error = %e, "generation failed, no css produced"),
        }
    }

    tracing::info!("varsheet session closed");
    Ok(())
}

fn write_response(output: &mut impl Write, response: &UiResponse, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    writeln!(output, "{}", json)?;
    output.flush()?;
    Ok(())
}
