use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chatlens_core::{config, Analyzer, DatasetIndex, Summarizer};
use chatlens_provider::OpenAiProvider;
use chatlens_server::state::AppState;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let log_dir = PathBuf::from("logs");
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "chatlens-server.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new("chatlens_server=info,chatlens_core=info,tower_http=debug")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    let config_path = std::env::var("CHATLENS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.yaml"));
    let config = if config_path.is_file() {
        config::load_config(&config_path)?
    } else {
        tracing::warn!(path = %config_path.display(), "config file not found, using defaults");
        config::default_config()
    };

    let index = Arc::new(DatasetIndex::load(&config.dataset.path));
    if let Some(error) = index.load_error() {
        tracing::warn!(error, "serving with an empty dataset index");
    }

    let summarizer = if config.summarizer.api_key.is_empty() {
        tracing::warn!("no API credential configured, all summaries will degrade");
        Summarizer::disabled(config.summarizer.model.clone())
    } else {
        let provider = OpenAiProvider::new(
            config.summarizer.api_key.clone(),
            config.summarizer.api_base.clone(),
        );
        Summarizer::new(Arc::new(provider), config.summarizer.model.clone())
    };
    let summarizer_configured = summarizer.is_configured();

    let state = AppState {
        index: index.clone(),
        analyzer: Arc::new(Analyzer::new(index, summarizer)),
        summarizer_configured,
    };

    let addr = std::env::var("CHATLENS_BIND").unwrap_or_else(|_| config.server.bind.clone());
    chatlens_server::serve(state, &addr).await
}
