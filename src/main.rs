use std::sync::Arc;

use anyhow::{Result, bail};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unique_slug::{
    application::services::ApplicationServices,
    config::AppConfig,
    domain::slug::{Record, RecordStore, SlugOptions},
    infrastructure::{repositories::InMemoryRecordStore, util::DefaultTextNormalizer},
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        bail!("usage: unique_slug <text...>");
    }

    let store = match config.seed_file() {
        Some(path) => InMemoryRecordStore::from_json_file(path).await?,
        None => InMemoryRecordStore::new(),
    };
    let store: Arc<dyn RecordStore> = Arc::new(store);

    let defaults = config.slug_defaults().clone();
    let mut record = Record::new(config.record_kind())
        .with_field(defaults.source_field.as_str(), text)
        .with_unset_field(defaults.slug_field.as_str());

    let services = ApplicationServices::new(store, Arc::new(DefaultTextNormalizer), defaults);
    let slugs = services.slugs();

    match slugs.ensure_slug(&mut record, &SlugOptions::new()).await? {
        Some(slug) => println!("{slug}"),
        None => bail!("{record} already carries a slug"),
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
