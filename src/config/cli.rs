//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dingtalk-notify: deliver an alert group to a DingTalk robot
///
/// Reads alerts as JSON (an Alertmanager webhook message or a bare array),
/// renders them into a markdown message and posts it to the webhook once.
#[derive(Debug, Parser)]
#[command(name = "dingtalk-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// DingTalk robot webhook URL (required for send mode)
    #[arg(long = "webhook-url")]
    pub webhook_url: Option<String>,

    /// Handlebars template for the message title
    #[arg(long)]
    pub title: Option<String>,

    /// Handlebars template for the message body
    #[arg(long)]
    pub text: Option<String>,

    /// Receiver name exposed to templates
    #[arg(long)]
    pub receiver: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Proxy URL for outbound requests
    #[arg(long = "proxy-url")]
    pub proxy_url: Option<String>,

    /// Group label in 'Key=Value' format (can be specified multiple times)
    #[arg(long = "group-label", value_name = "K=V")]
    pub group_labels: Vec<String>,

    /// File with the alerts as JSON (reads stdin when omitted)
    #[arg(long)]
    pub alerts: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for dingtalk-notify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "dingtalk-notify.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
