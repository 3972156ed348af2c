//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::alert::{AlertGroup, LabelSet};
use crate::notify::{NotificationConfig, NotifyContext};
use crate::template::validate_template;
use crate::webhook::ClientSettings;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Channel configuration handed to the notifier
    pub notification: NotificationConfig,

    /// Receiver name override (CLI or TOML)
    pub receiver: Option<String>,

    /// External URL override (TOML only)
    pub external_url: Option<String>,

    /// Group labels from `--group-label`
    pub group_labels: LabelSet,

    /// Transport settings for building the HTTP client
    pub http: ClientSettings,

    /// Alerts file; `None` reads stdin
    pub alerts: Option<PathBuf>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The webhook URL carries the access token; only the host is shown.
        let host = self
            .notification
            .webhook_url()
            .host_str()
            .unwrap_or_default();
        let proxy = self
            .http
            .proxy
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.host_str().unwrap_or_default().to_string());

        write!(
            f,
            "Config {{ host: {host}, receiver: {}, timeout: {}s, proxy: {proxy}, \
             insecure: {}, group_labels: {} }}",
            self.receiver.as_deref().unwrap_or(defaults::RECEIVER),
            self.http.timeout.as_secs(),
            self.http.accept_invalid_certs,
            self.group_labels.len(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing, unparsable or not http(s)
    /// - A title or text template does not compile
    /// - The timeout is zero
    /// - The proxy URL is invalid
    /// - A group label is not `Key=Value`
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let webhook_url = Self::resolve_webhook_url(cli, toml)?;
        let mut notification =
            NotificationConfig::new(webhook_url.clone()).map_err(|e| ConfigError::InvalidUrl {
                url: webhook_url.to_string(),
                reason: e.to_string(),
            })?;

        let title = cli
            .title
            .clone()
            .or_else(|| toml.and_then(|t| t.dingtalk.title.clone()));
        if let Some(title) = title {
            check_template(field::TITLE, &title)?;
            notification = notification.with_title(title);
        }

        let text = cli
            .text
            .clone()
            .or_else(|| toml.and_then(|t| t.dingtalk.text.clone()));
        if let Some(text) = text {
            check_template(field::TEXT, &text)?;
            notification = notification.with_text(text);
        }

        let receiver = cli
            .receiver
            .clone()
            .or_else(|| toml.and_then(|t| t.receiver.name.clone()));

        let external_url = toml.and_then(|t| t.receiver.external_url.clone());

        let group_labels = cli
            .group_labels
            .iter()
            .map(|s| parse_label(s))
            .collect::<Result<LabelSet, _>>()?;

        let http = Self::build_client_settings(cli, toml)?;

        Ok(Self {
            notification,
            receiver,
            external_url,
            group_labels,
            http,
            alerts: cli.alerts.clone(),
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Builds the per-attempt context for an alert group.
    ///
    /// Configured values win over what the group carries; the receiver
    /// falls back to the default name.
    #[must_use]
    pub fn notify_context(&self, group: &AlertGroup) -> NotifyContext {
        let receiver = self
            .receiver
            .as_deref()
            .or(group.receiver.as_deref())
            .unwrap_or(defaults::RECEIVER);

        let mut labels = group.group_labels.clone();
        labels.extend(self.group_labels.clone());

        NotifyContext::new(receiver)
            .with_group_labels(labels)
            .with_external_url(
                self.external_url
                    .clone()
                    .or_else(|| group.external_url.clone()),
            )
    }

    fn resolve_webhook_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // CLI takes precedence
        let url_str = cli
            .webhook_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.dingtalk.webhook_url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK_URL,
                    "Use --webhook-url or set dingtalk.webhook_url in config file",
                )
            })?;

        Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })
    }

    fn build_client_settings(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<ClientSettings, ConfigError> {
        let http = toml.map(|t| &t.http);

        // Priority: CLI explicit > TOML > default
        let timeout_secs = cli
            .timeout
            .or_else(|| http.and_then(|h| h.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: "must be greater than 0".to_string(),
            });
        }

        let proxy = cli
            .proxy_url
            .as_deref()
            .or_else(|| http.and_then(|h| h.proxy_url.as_deref()))
            .map(|s| {
                Url::parse(s).map_err(|e| ConfigError::InvalidProxy {
                    url: s.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let user_agent = http
            .and_then(|h| h.user_agent.clone())
            .unwrap_or_else(ClientSettings::default_user_agent);

        Ok(ClientSettings {
            timeout: Duration::from_secs(timeout_secs),
            proxy,
            user_agent,
            accept_invalid_certs: http.is_some_and(|h| h.insecure_skip_verify),
        })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn check_template(field: &'static str, template: &str) -> Result<(), ConfigError> {
    validate_template(template).map_err(|e| ConfigError::InvalidTemplate {
        field,
        reason: e.to_string(),
    })
}

fn parse_label(s: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidLabel {
        value: s.to_string(),
    };

    let (name, value) = s.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    Ok((name.to_string(), value.trim().to_string()))
}
