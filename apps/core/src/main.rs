//! Sentiment scoring CLI
//!
//! Reads one text per line on stdin, writes one JSON result per line on stdout.

use anyhow::Context;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use sentiment_core::{EngineConfig, Resources, SentimentEngine, SentimentResult};

#[derive(Serialize)]
struct Line<'a> {
    text: &'a str,
    #[serde(flatten)]
    result: SentimentResult,
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("SENTIMENT_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").to_string(),
                io::stderr,
            ))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn env_flag(key: &str) -> bool {
    std::env::var(key).is_ok_and(|v| matches!(v.trim(), "1" | "true" | "yes" | "on"))
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Also loads .env, so it must run before the other variables are read
    let config = EngineConfig::from_env().context("Invalid engine configuration")?;

    let resources = match std::env::var("SENTIMENT_RESOURCES") {
        Ok(path) => Resources::from_path(&path)
            .with_context(|| format!("Failed to load resources from {}", path))?,
        Err(_) => Resources::bundled(),
    };

    let explain = env_flag("SENTIMENT_EXPLAIN");
    let mut engine = SentimentEngine::new(config, Arc::new(resources))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0usize;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if explain {
            serde_json::to_writer(&mut out, &engine.explain(&line))?;
        } else {
            let result = engine.analyze(&line);
            serde_json::to_writer(&mut out, &Line { text: &line, result })?;
        }
        writeln!(out)?;
        count += 1;
    }

    info!("Analyzed {} lines", count);
    Ok(())
}
