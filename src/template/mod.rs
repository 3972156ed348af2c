//! Template layer: turning an alert group into message text.
//!
//! This module provides:
//! - The data view templates see ([`AlertGroupView`], [`AlertView`])
//! - The renderer abstraction ([`MessageRenderer`]) and its Handlebars
//!   implementation ([`HandlebarsRenderer`])
//! - Syntax checking for configured templates ([`validate_template`])
//! - Built-in default templates ([`DEFAULT_TITLE`], [`DEFAULT_TEXT`])

mod error;
mod renderer;
mod view;


pub use error::{RenderError, TemplateFailure};
pub use renderer::{HandlebarsRenderer, MessageRenderer, RenderedMessage, validate_template};
pub use view::{AlertGroupView, AlertView};

/// Default title template.
pub const DEFAULT_TITLE: &str =
    "[{{toUpper status}}{{#if firingAlerts}}:{{len firingAlerts}}{{/if}}] {{commonLabels.alertname}}";

/// Default body template (DingTalk markdown).
pub const DEFAULT_TEXT: &str = r"### [{{toUpper status}}] {{commonLabels.alertname}}
{{#each alerts}}
**{{labels.alertname}}** ({{status}}, since {{startsAt}})
{{#if annotations.summary}}
> {{annotations.summary}}
{{/if}}
{{#each labels}}
- {{@key}}: {{this}}
{{/each}}
{{/each}}";
