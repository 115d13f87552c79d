use serde::{Deserialize, Serialize};

use crate::source::SourceSpan;

/// A value together with the span it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T> {
    pub value: T,
    pub span: SourceSpan,
}

impl<T> Located<T> {
    pub fn new(value: T, span: SourceSpan) -> Self {
        Self { value, span }
    }
}

/// An ordered documentation body, in source order.
pub type Documentation = Vec<Located<DocElement>>;

/// One top-level block of a documentation body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocElement {
    Paragraph(String),
    Heading(Heading),
    CodeBlock {
        /// First word of the fence info string, if any.
        language: Option<String>,
        content: String,
    },
    List {
        ordered: bool,
        items: Vec<String>,
    },
    Quote(String),
    Html(String),
    Rule,
    Tag(TagElement),
}

impl DocElement {
    pub fn is_heading(&self) -> bool {
        matches!(self, DocElement::Heading(_))
    }

    /// Short lowercase name of the element kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DocElement::Paragraph(_) => "paragraph",
            DocElement::Heading(_) => "heading",
            DocElement::CodeBlock { .. } => "code",
            DocElement::List { .. } => "list",
            DocElement::Quote(_) => "quote",
            DocElement::Html(_) => "html",
            DocElement::Rule => "rule",
            DocElement::Tag(_) => "tag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 to 6.
    pub level: u8,
    /// Explicit `{#label}` from the source, or a slug filled in during assembly.
    pub label: Option<String>,
    pub text: String,
}

/// Structured, non-prose content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagElement {
    /// Produced from annotations rather than from markup.
    Alert {
        name: String,
        message: Option<String>,
    },
    Author(String),
    Deprecated(Option<String>),
    Param {
        name: String,
        text: String,
    },
    Raise {
        name: String,
        text: String,
    },
    Return(String),
    See {
        target: String,
        text: String,
    },
    Since(String),
    Before {
        version: String,
        text: String,
    },
    Version(String),
    /// Removed from the body during assembly and reported as [`crate::Tags`].
    Internal(InternalTag),
}

/// Tags that steer the documentation pipeline rather than describe anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalTag {
    Canonical(String),
    Inline,
    Open,
    Closed,
    Hidden,
}

impl InternalTag {
    pub fn kind(&self) -> InternalTagKind {
        match self {
            InternalTag::Canonical(_) => InternalTagKind::Canonical,
            InternalTag::Inline => InternalTagKind::Inline,
            InternalTag::Open => InternalTagKind::Open,
            InternalTag::Closed => InternalTagKind::Closed,
            InternalTag::Hidden => InternalTagKind::Hidden,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InternalTagKind {
    Canonical,
    Inline,
    Open,
    Closed,
    Hidden,
}

impl std::fmt::Display for InternalTagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InternalTagKind::Canonical => "canonical",
            InternalTagKind::Inline => "inline",
            InternalTagKind::Open => "open",
            InternalTagKind::Closed => "closed",
            InternalTagKind::Hidden => "hidden",
        };
        write!(f, "@{name}")
    }
}
