//! cedear-watch binary: one watch cycle per invocation (cron-driven).
//!
//! Exit 0 covers both "sent" and "nothing new"; missing credentials, an
//! unusable state file, or a delivery failure exit nonzero. Seen state is
//! persisted even when delivery fails.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cedear_watch::config::{default_sources, TelegramConfig, DEFAULT_STATE_PATH};
use cedear_watch::fetch::HttpRowSource;
use cedear_watch::notify::telegram::TelegramNotifier;
use cedear_watch::pipeline::{now_ar_string, run_cycle};
use cedear_watch::state::StateStore;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cedear_watch=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    // Validated once, before anything touches the network.
    let telegram = TelegramConfig::from_env()?;
    let notifier = TelegramNotifier::new(telegram);

    let fetcher = HttpRowSource::new()?;
    let sources = default_sources();

    let store = StateStore::new(DEFAULT_STATE_PATH);
    let mut state = store.load()?;

    let now = now_ar_string();
    let outcome = run_cycle(&sources, &fetcher, &notifier, &mut state, &now).await;

    // Persist first so a delivery failure does not re-announce everything.
    store.save(&state)?;
    outcome?;
    Ok(())
}
