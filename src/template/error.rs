//! Error types for message rendering.

use std::fmt;

use thiserror::Error;

/// One template that failed to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFailure {
    /// Which template failed (`title` or `text`).
    pub template: &'static str,
    /// Why it failed.
    pub reason: String,
}

impl fmt::Display for TemplateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.template, self.reason)
    }
}

/// Rendering failed for at least one template.
///
/// Carries every failure from the attempt, so a broken title and a broken
/// text are reported together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_failures(.failures))]
pub struct RenderError {
    failures: Vec<TemplateFailure>,
}

impl RenderError {
    /// Creates an error from the collected failures.
    #[must_use]
    pub const fn new(failures: Vec<TemplateFailure>) -> Self {
        Self { failures }
    }

    /// Returns the individual template failures.
    #[must_use]
    pub fn failures(&self) -> &[TemplateFailure] {
        &self.failures
    }

    /// Returns true if the named template is among the failures.
    #[must_use]
    pub fn failed(&self, template: &str) -> bool {
        self.failures.iter().any(|f| f.template == template)
    }
}

fn join_failures(failures: &[TemplateFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
