//! Diagnostic collection for export resolution.
//!
//! Resolution passes accumulate diagnostics here instead of printing as they
//! go; the caller decides how to surface them (compiler driver, language
//! server, test assertion).

mod message;

#[cfg(test)]
mod tests;

pub use message::{Diagnostic, DiagnosticKind, Severity};

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind and subject.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to
    /// override.
    pub fn report(
        &mut self,
        kind: DiagnosticKind,
        subject: impl Into<String>,
    ) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: Diagnostic::with_default_message(kind, subject.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    /// Append all diagnostics from `other`.
    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    /// Render all diagnostics as plain text, one per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            out.push_str(&message.to_string());
            out.push('\n');
        }
        out
    }
}

impl DiagnosticBuilder<'_> {
    /// Override the default message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message.message = message.into();
        self
    }

    /// Override the default severity.
    pub fn severity(mut self, severity: Severity) -> Self {
        self.message.severity = severity;
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
