//! Configuration layer for dingtalk-notify.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The webhook URL has no default and must come from the CLI or the file.
//!
//! Receiver name, external URL and group labels may also arrive with the
//! alert group itself. Configured values override those; see
//! [`ValidatedConfig::notify_context`].
//!
//! # TOML-Only Options
//!
//! - `receiver.external_url`
//! - `http.user_agent`
//! - `http.insecure_skip_verify`

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
