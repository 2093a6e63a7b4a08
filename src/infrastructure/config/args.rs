use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pawboard",
    version,
    about = "Terminal admin console for the pet social network",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", env = "PAWBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the admin API.
    #[arg(long, value_name = "URL", env = "PAWBOARD_API_URL")]
    pub api_url: Option<String>,

    /// Session token; skips the login screen when no keyring token exists.
    #[arg(long, env = "PAWBOARD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH", env = "PAWBOARD_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "PAWBOARD_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Rows per page (10, 25, 50 or 100).
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Search debounce in milliseconds.
    #[arg(long = "debounce-ms")]
    pub search_debounce_ms: Option<u64>,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,
}
