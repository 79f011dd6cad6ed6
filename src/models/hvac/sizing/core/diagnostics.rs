//! Structured diagnostics.
//!
//! Every message a sizer emits is logged through [`log`] and also kept in
//! the result, so callers can inspect diagnostics without a logger.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Severe,
}

/// A headline with continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub headline: String,
    pub lines: Vec<String>,
}

impl Diagnostic {
    pub fn warning(headline: impl Into<String>) -> Self {
        Self::new(Severity::Warning, headline)
    }

    pub fn severe(headline: impl Into<String>) -> Self {
        Self::new(Severity::Severe, headline)
    }

    fn new(severity: Severity, headline: impl Into<String>) -> Self {
        Self {
            severity,
            headline: headline.into(),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Whether the headline or any line contains `needle`.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.headline.contains(needle) || self.lines.iter().any(|line| line.contains(needle))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline)?;
        for line in &self.lines {
            write!(f, "\n   ~~~ {line}")?;
        }
        Ok(())
    }
}

/// Diagnostics collected during one sizing call.
#[derive(Debug, Default)]
pub(super) struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub(super) fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => log::warn!("{diagnostic}"),
            Severity::Severe => log::error!("{diagnostic}"),
        }
        self.0.push(diagnostic);
    }

    pub(super) fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}
