//! Run configuration.
//!
//! Settings are layered with the `config` crate: an optional TOML file, then
//! environment variables, then whatever the CLI overrides. The result is a
//! plain [`Settings`] value built once at start-up and handed to the fetcher
//! and dispatcher; nothing downstream reads the environment.
//!
//! # Configuration
//!
//! ```toml
//! email_sender = "bot@example.com"
//! email_password = "app-password"
//! email_receiver = "me@example.com, team@example.com"
//! smtp_server = "smtp.gmail.com"
//! smtp_port = 587
//! tag = "zh"
//! ```
//!
//! Every key can also come from the matching upper-case environment
//! variable (`EMAIL_SENDER`, `SMTP_PORT`, ...).

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use hubdigest_types::RecipientList;

/// Default SMTP relay host.
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";

/// Default SMTP submission port.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default registry tag filter.
pub const DEFAULT_TAG: &str = "en";

/// Default number of items requested per category.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default registry API base.
pub const DEFAULT_REGISTRY_ENDPOINT: &str = "https://huggingface.co/api";

/// Default cap on simultaneous deliveries.
pub const DEFAULT_MAX_CONCURRENT_DELIVERIES: usize = 5;

/// Everything a run needs to know, resolved once at start-up.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub email_sender: Option<String>,

    #[serde(default)]
    pub email_password: Option<String>,

    /// Comma-separated recipient addresses.
    #[serde(default)]
    pub email_receiver: Option<String>,

    #[serde(default = "default_smtp_server")]
    pub smtp_server: String,

    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_registry_endpoint")]
    pub registry_endpoint: String,

    #[serde(default = "default_max_concurrent_deliveries")]
    pub max_concurrent_deliveries: usize,
}

fn default_smtp_server() -> String {
    DEFAULT_SMTP_SERVER.to_string()
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_registry_endpoint() -> String {
    DEFAULT_REGISTRY_ENDPOINT.to_string()
}

fn default_max_concurrent_deliveries() -> usize {
    DEFAULT_MAX_CONCURRENT_DELIVERIES
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_sender: None,
            email_password: None,
            email_receiver: None,
            smtp_server: default_smtp_server(),
            smtp_port: default_smtp_port(),
            tag: default_tag(),
            page_size: default_page_size(),
            registry_endpoint: default_registry_endpoint(),
            max_concurrent_deliveries: default_max_concurrent_deliveries(),
        }
    }
}

/// Credentials and destinations needed to actually send mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub sender: String,
    pub password: String,
    pub recipients: RecipientList,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub max_concurrent: usize,
}

impl Settings {
    /// Load settings from an optional config file plus the process
    /// environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }

        // Values stay strings until deserialization so `EMAIL_PASSWORD=007`
        // is not read as a number.
        let config = builder
            .add_source(Environment::default())
            .build()
            .context("Failed to load configuration")?;

        Self::from_config(config)
    }

    /// Deserialize settings from an already-built [`Config`].
    pub fn from_config(config: Config) -> Result<Self> {
        let settings: Settings = config
            .try_deserialize()
            .context("Invalid configuration")?;
        Ok(settings)
    }

    /// Recipients parsed from `email_receiver`.
    pub fn recipients(&self) -> RecipientList {
        self.email_receiver
            .as_deref()
            .map(RecipientList::parse)
            .unwrap_or_default()
    }

    /// Resolve delivery settings.
    ///
    /// Returns `None` when the sender, the password or every recipient is
    /// missing; the run then degrades to dry-run mode.
    pub fn delivery(&self) -> Option<DeliveryConfig> {
        let sender = non_empty(self.email_sender.as_deref())?;
        let password = non_empty(self.email_password.as_deref())?;
        let recipients = self.recipients();
        if recipients.is_empty() {
            return None;
        }

        Some(DeliveryConfig {
            sender: sender.to_string(),
            password: password.to_string(),
            recipients,
            smtp_server: self.smtp_server.clone(),
            smtp_port: self.smtp_port,
            max_concurrent: self.max_concurrent_deliveries.max(1),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
