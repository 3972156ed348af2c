//! Message rendering from alert group data.

use handlebars::{Handlebars, Template, TemplateError, handlebars_helper};
use serde_json::Value as Json;

use super::{AlertGroupView, RenderError, TemplateFailure};

/// A rendered notification, ready to be put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Rendered title.
    pub title: String,
    /// Rendered body.
    pub text: String,
}

/// Renders title and body templates against an [`AlertGroupView`].
///
/// Implementations must render both templates even if the first fails and
/// report every failure in one [`RenderError`]; a partially rendered
/// message is never returned.
pub trait MessageRenderer: Send + Sync {
    /// Renders the title and text templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] naming each template that failed.
    fn render(
        &self,
        view: &AlertGroupView<'_>,
        title_template: &str,
        text_template: &str,
    ) -> Result<RenderedMessage, RenderError>;
}

handlebars_helper!(to_upper: |s: str| s.to_uppercase());
handlebars_helper!(to_lower: |s: str| s.to_lowercase());
handlebars_helper!(title_case: |s: str| capitalize(s));
handlebars_helper!(join: |list: array, sep: str| join_values(list, sep));

/// Handlebars-based renderer.
///
/// Output is markdown, so HTML escaping is disabled. Missing fields render
/// as empty strings. Besides the Handlebars built-ins, templates can use:
/// - `toUpper` / `toLower` / `title` on strings
/// - `join` on an array with a separator: `{{join list ", "}}`
#[derive(Debug)]
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Creates a renderer with the helpers registered.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("toUpper", Box::new(to_upper));
        registry.register_helper("toLower", Box::new(to_lower));
        registry.register_helper("title", Box::new(title_case));
        registry.register_helper("join", Box::new(join));

        Self { registry }
    }

    fn render_one(
        &self,
        name: &'static str,
        template: &str,
        view: &AlertGroupView<'_>,
    ) -> Result<String, TemplateFailure> {
        self.registry
            .render_template(template, view)
            .map_err(|e| TemplateFailure {
                template: name,
                reason: e.to_string(),
            })
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRenderer for HandlebarsRenderer {
    fn render(
        &self,
        view: &AlertGroupView<'_>,
        title_template: &str,
        text_template: &str,
    ) -> Result<RenderedMessage, RenderError> {
        let title = self.render_one("title", title_template, view);
        let text = self.render_one("text", text_template, view);

        match (title, text) {
            (Ok(title), Ok(text)) => Ok(RenderedMessage { title, text }),
            (title, text) => Err(RenderError::new(
                title.err().into_iter().chain(text.err()).collect(),
            )),
        }
    }
}

/// Checks template syntax without rendering it.
///
/// # Errors
///
/// Returns the Handlebars parse error if the template is malformed.
pub fn validate_template(template: &str) -> Result<(), TemplateError> {
    Template::compile(template).map(drop)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn join_values(list: &[Json], sep: &str) -> String {
    list.iter()
        .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
        .collect::<Vec<_>>()
        .join(sep)
}
