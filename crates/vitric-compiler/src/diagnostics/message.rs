/// Diagnostic kinds emitted by export resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Type normalization failed: the type uses language features the
    /// runtime does not support.
    UnsupportedType,
    /// A type declared a catalogued element name but its structural class
    /// is incompatible with the element model (e.g. an array typedef'd to
    /// an element name).
    UnsupportedTypeClass,
    /// The generic structural builder has no export representation for the
    /// type.
    NotExportable,
}

impl DiagnosticKind {
    /// Default severity for this kind.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnsupportedType | Self::UnsupportedTypeClass | Self::NotExportable => {
                Severity::Error
            }
        }
    }

    /// Base message for this kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnsupportedType => "type uses unsupported language features",
            Self::UnsupportedTypeClass => "type class cannot be exported as a named element",
            Self::NotExportable => "type cannot be exported",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One recorded diagnostic.
///
/// `subject` is the name the caller can attribute the message to: the
/// declaration name when resolution was driven from a declaration, the
/// type's canonical name otherwise. The host supplies no source spans.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    pub(super) fn with_default_message(kind: DiagnosticKind, subject: String) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            subject,
            message: kind.fallback_message().to_owned(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: `{}`: {}", self.severity, self.subject, self.message)
    }
}
