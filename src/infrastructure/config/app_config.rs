//! Application configuration.

use crate::domain::keybinding::Action;
use crate::domain::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use crate::domain::resource::Resource;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

const APP_NAME: &str = "pawboard";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "pawboard";

/// Prefix of every environment variable the console reads.
pub const ENV_PREFIX: &str = "PAWBOARD";

const DEFAULT_LOGIN_PATH: &str = "/admin/login";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Endpoint path overrides. Unset entries use the built-in paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dogs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breeds: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_admins: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gifting: Option<String>,
}

impl EndpointConfig {
    const fn slot(&self, resource: Resource) -> &Option<String> {
        match resource {
            Resource::Dogs => &self.dogs,
            Resource::Faqs => &self.faqs,
            Resource::Breeds => &self.breeds,
            Resource::Hobbies => &self.hobbies,
            Resource::Likes => &self.likes,
            Resource::Reports => &self.reports,
            Resource::SubAdmins => &self.sub_admins,
            Resource::Gifting => &self.gifting,
        }
    }

    fn slot_mut(&mut self, resource: Resource) -> &mut Option<String> {
        match resource {
            Resource::Dogs => &mut self.dogs,
            Resource::Faqs => &mut self.faqs,
            Resource::Breeds => &mut self.breeds,
            Resource::Hobbies => &mut self.hobbies,
            Resource::Likes => &mut self.likes,
            Resource::Reports => &mut self.reports,
            Resource::SubAdmins => &mut self.sub_admins,
            Resource::Gifting => &mut self.gifting,
        }
    }

    /// Returns the collection path for `resource`, always with a leading `/`.
    #[must_use]
    pub fn path(&self, resource: Resource) -> String {
        normalize_path(
            self.slot(resource)
                .as_deref()
                .unwrap_or_else(|| resource.default_path()),
        )
    }

    /// Returns the login path.
    #[must_use]
    pub fn login_path(&self) -> String {
        normalize_path(self.login.as_deref().unwrap_or(DEFAULT_LOGIN_PATH))
    }

    /// Applies `PAWBOARD_<RESOURCE>_PATH` variables, which win over file values.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: String| lookup(&name).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty(format!("{ENV_PREFIX}_LOGIN_PATH")) {
            self.login = Some(path);
        }
        for resource in Resource::ALL {
            let name = format!("{ENV_PREFIX}_{}_PATH", resource.key().to_ascii_uppercase());
            if let Some(path) = non_empty(name) {
                *self.slot_mut(resource) = Some(path);
            }
        }
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Switches that hide whole screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub gifting: bool,
    #[serde(default = "default_true")]
    pub reports: bool,
    #[serde(default = "default_true")]
    pub sub_admins: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            gifting: true,
            reports: true,
            sub_admins: true,
        }
    }
}

impl FeatureFlags {
    /// Returns whether the screen for `resource` is enabled.
    #[must_use]
    pub const fn allows(&self, resource: Resource) -> bool {
        match resource {
            Resource::Gifting => self.gifting,
            Resource::Reports => self.reports,
            Resource::SubAdmins => self.sub_admins,
            _ => true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Session token passed on the command line or environment.
    #[serde(skip)]
    pub token: Option<String>,

    /// Base URL of the admin API, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub log_level: LogLevel,

    /// Reserved; the console is keyboard driven.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Initial rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Idle time before a search keystroke triggers a fetch.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Notification duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,

    #[serde(default)]
    pub endpoints: EndpointConfig,

    #[serde(default)]
    pub features: FeatureFlags,

    /// Custom keybindings.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,
}

fn default_api_url() -> String {
    "http://localhost:3000/api/v1".to_string()
}

fn default_true() -> bool {
    true
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

const fn default_search_debounce_ms() -> u64 {
    450
}

const fn default_notification_duration() -> u64 {
    4
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = args.api_url {
            self.api_url = api_url;
        }
        if let Some(token) = args.token {
            self.token = Some(token);
        }
        if let Some(page_size) = args.page_size {
            self.page_size = page_size;
        }
        if let Some(debounce) = args.search_debounce_ms {
            self.search_debounce_ms = debounce;
        }
        if let Some(notification_duration) = args.notification_duration {
            self.notification_duration = notification_duration;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
    }

    /// Clamps out-of-range values to defaults.
    pub fn sanitize(&mut self) {
        if !PAGE_SIZES.contains(&self.page_size) {
            warn!(page_size = self.page_size, "Unsupported page size, using default");
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self.api_url = self.api_url.trim().trim_end_matches('/').to_string();
        if self.api_url.is_empty() {
            self.api_url = default_api_url();
        }
    }

    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    #[must_use]
    pub const fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_duration)
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("pawboard.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            token: None,
            api_url: default_api_url(),
            log_level: LogLevel::Info,
            mouse: true,
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: default_search_debounce_ms(),
            notification_duration: default_notification_duration(),
            endpoints: EndpointConfig::default(),
            features: FeatureFlags::default(),
            keybindings: HashMap::new(),
        }
    }
}
