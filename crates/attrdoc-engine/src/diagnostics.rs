use crate::source::SourceSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A message tied to a place in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: SourceSpan,
}

impl Diagnostic {
    pub fn warning(span: SourceSpan, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            span,
        }
    }

    pub fn error(span: SourceSpan, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {kind}: {}", self.span, self.message)
    }
}

/// Failures that abort processing of one comment.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("Malformed documentation: {0}")]
    Markup(Diagnostic),
    #[error("Tag not allowed: {0}")]
    Policy(Diagnostic),
    #[error("{count} warning(s) treated as errors")]
    WarningsAsErrors { count: usize },
}

impl DocError {
    /// The diagnostic behind this failure, if it has a single one.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            DocError::Markup(d) | DocError::Policy(d) => Some(d),
            DocError::WarningsAsErrors { .. } => None,
        }
    }
}

/// Caller-owned sink for non-fatal findings.
///
/// Operations push warnings here as they go; nothing is filtered or
/// deduplicated. The caller decides what to do with them afterwards.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::debug!("{diagnostic}");
        self.items.push(diagnostic);
    }

    pub fn warn(&mut self, span: SourceSpan, message: impl Into<String>) {
        self.push(Diagnostic::warning(span, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Fails if `warn_error` is set and any warning was collected.
    pub fn check(&self, warn_error: bool) -> Result<(), DocError> {
        let count = self
            .items
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        if warn_error && count > 0 {
            return Err(DocError::WarningsAsErrors { count });
        }
        Ok(())
    }
}
