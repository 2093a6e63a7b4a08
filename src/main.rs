use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pawboard::infrastructure::{
    ApiClient, AppConfig, CliArgs, KeyringTokenStorage, StorageManager,
};
use pawboard::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let mut config = StorageManager::new()?.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    config
        .endpoints
        .apply_env_overrides(|key| std::env::var(key).ok());
    config.sanitize();
    Ok(config)
}

fn create_app() -> Result<(App, Option<String>)> {
    let config = load_config()?;
    let cli_token = config.token.clone();

    init_logging(&config)?;

    info!(
        name = pawboard::NAME,
        version = pawboard::VERSION,
        api_url = %config.api_url,
        "Starting Pawboard"
    );

    let api_client = Arc::new(ApiClient::new(&config.api_url, config.endpoints.clone())?);
    let token_storage = Arc::new(KeyringTokenStorage::for_api(&config.api_url));

    let app = App::new(api_client.clone(), api_client, token_storage, &config);

    Ok((app, cli_token))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let (app, cli_token) = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal, cli_token).await;

    ratatui::restore();

    result
}
