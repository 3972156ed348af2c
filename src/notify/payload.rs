//! DingTalk robot wire format.

use serde::{Deserialize, Serialize};

use crate::template::RenderedMessage;

/// Request body for a DingTalk markdown message.
///
/// Serializes as `{"msgtype":"markdown","markdown":{"title":..,"text":..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WirePayload<'a> {
    msgtype: &'static str,
    markdown: Markdown<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Markdown<'a> {
    title: &'a str,
    text: &'a str,
}

impl<'a> WirePayload<'a> {
    /// Wraps a rendered message as a markdown payload.
    #[must_use]
    pub fn markdown(message: &'a RenderedMessage) -> Self {
        Self {
            msgtype: "markdown",
            markdown: Markdown {
                title: message.title.as_str(),
                text: message.text.as_str(),
            },
        }
    }

    /// Returns the message type (`markdown`).
    #[must_use]
    pub const fn msgtype(&self) -> &'static str {
        self.msgtype
    }

    /// Returns the rendered title.
    #[must_use]
    pub const fn title(&self) -> &'a str {
        self.markdown.title
    }

    /// Returns the rendered body.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.markdown.text
    }
}

/// Application-level reply from the DingTalk robot API.
///
/// DingTalk answers HTTP 200 even when it rejects a message and reports the
/// rejection in `errcode`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DingTalkReply {
    /// Zero on success.
    #[serde(default)]
    pub errcode: i64,
    /// Human readable status.
    #[serde(default)]
    pub errmsg: String,
}

impl DingTalkReply {
    /// Parses a reply body, returning `None` if it is not a DingTalk reply.
    #[must_use]
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// Returns true if DingTalk accepted the message.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.errcode == 0
    }
}
