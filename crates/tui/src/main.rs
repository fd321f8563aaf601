//! Terminal companion entry point.
mod app;
mod config;
mod content;
mod input;
mod prefs;
mod presentation;
mod screens;
mod state;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use prefs::PrefStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = TuiConfig::from_env();
    let store = PrefStore::open_default();
    let prefs = store.edit(|prefs| prefs.launch_count += 1)?;

    App::new(config, &prefs, store)?.run().await
}
