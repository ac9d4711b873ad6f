//! Headless encounter runner.
//!
//! Plays an encounter with first-legal decisions and logs the outcome together
//! with the digest of the full event stream, so two runs can be compared.
//!
//! Environment (also read from `.env`):
//! - `BATTLE_DATA_DIR`: content directory (defaults to the bundled data)
//! - `BATTLE_ENCOUNTER`: encounter file stem (defaults to `king_slime`)
//! - `BATTLE_SEED`: random seed (defaults to 0)
//! - `BATTLE_PACING`: `true` to wait out presentation pauses
//! - `RUST_LOG`: log filter

use anyhow::{Context, Result};
use battle_content::ContentFactory;
use battle_core::stream_digest;
use runtime::{FirstLegalProvider, Runtime, RuntimeConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let factory = match std::env::var_os("BATTLE_DATA_DIR") {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    let encounter = std::env::var("BATTLE_ENCOUNTER").unwrap_or_else(|_| "king_slime".into());
    let seed = env_or("BATTLE_SEED", 0u64)?;
    let honor_pacing = env_or("BATTLE_PACING", false)?;

    let spec = factory.load_encounter(&encounter)?;
    let config = RuntimeConfig {
        battle: factory.load_config()?,
        honor_pacing,
        seed,
        ..RuntimeConfig::default()
    };

    let mut runtime = Runtime::builder()
        .config(config)
        .encounter(&spec)
        .provider(FirstLegalProvider)
        .build()
        .await?;

    let mut events = Vec::new();
    let outcome = loop {
        let step = runtime.step().await?;
        events.extend(step.events.iter().cloned());
        if let Some(outcome) = step.outcome() {
            break outcome;
        }
    };

    let state = runtime.state().await?;
    let digest = stream_digest(&events).context("failed to encode event stream")?;
    tracing::info!(
        %outcome,
        rounds = state.turn.round,
        decisions = state.turn.nonce,
        events = events.len(),
        digest = %hex::encode(digest),
        "encounter finished"
    );

    runtime.shutdown().await?;
    Ok(())
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid {key}: {value}")),
        Err(_) => Ok(default),
    }
}
