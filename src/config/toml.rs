//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// DingTalk channel section
    #[serde(default)]
    pub dingtalk: DingTalkSection,

    /// Receiver metadata exposed to templates
    #[serde(default)]
    pub receiver: ReceiverSection,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpSection,
}

/// DingTalk channel section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DingTalkSection {
    /// Robot webhook URL
    pub webhook_url: Option<String>,

    /// Title template
    pub title: Option<String>,

    /// Body template
    pub text: Option<String>,
}

/// Receiver section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReceiverSection {
    /// Receiver name (default: "dingtalk")
    pub name: Option<String>,

    /// Link back to the alerting system
    pub external_url: Option<String>,
}

/// HTTP client section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// Proxy URL
    pub proxy_url: Option<String>,

    /// User-Agent header value
    pub user_agent: Option<String>,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure_skip_verify: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# dingtalk-notify configuration file

[dingtalk]
# Robot webhook URL (required, http or https)
# webhook_url = "https://oapi.dingtalk.com/robot/send?access_token=..."

# Handlebars templates. Available variables:
#   {{receiver}} {{status}} {{externalURL}}
#   {{alerts}} {{firingAlerts}} {{resolvedAlerts}}
#   {{groupLabels}} {{commonLabels}} {{commonAnnotations}}
# Helpers: toUpper, toLower, title, join, len
# title = "[{{toUpper status}}] {{commonLabels.alertname}}"
# text = '''
# {{#each alerts}}
# - {{labels.instance}}: {{annotations.summary}}
# {{/each}}
# '''

[receiver]
# Receiver name shown to templates (default: "dingtalk")
# name = "ops-team"

# Link back to the alerting system
# external_url = "http://alertmanager:9093"

[http]
# Request timeout in seconds (default: 10)
timeout = 10

# Proxy for outbound requests (default: direct connection)
# proxy_url = "http://proxy:3128"

# User-Agent header value
# user_agent = "dingtalk-notify"

# Skip TLS certificate verification
# insecure_skip_verify = false
"#
    .to_string()
}
