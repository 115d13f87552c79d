//! Assembly of parsed fragments and alerts into a final documentation body.

use std::collections::{BTreeSet, HashSet};

use crate::{
    diagnostics::{DocError, Diagnostic, Diagnostics},
    markup::{DocElement, Documentation, InternalTag, InternalTagKind, Located, TagElement},
};

/// The declaration or module that documentation belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Scope {
    path: Vec<String>,
}

impl Scope {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            path: vec![name.into()],
        }
    }

    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(name.into());
        Self { path }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.join("."))
    }
}

/// Which internal tags a context accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagsPolicy {
    /// Any internal tag is an error.
    #[default]
    None,
    Allow(BTreeSet<InternalTagKind>),
}

impl TagsPolicy {
    pub fn allowing(kinds: impl IntoIterator<Item = InternalTagKind>) -> Self {
        let kinds: BTreeSet<_> = kinds.into_iter().collect();
        if kinds.is_empty() {
            TagsPolicy::None
        } else {
            TagsPolicy::Allow(kinds)
        }
    }

    /// Module-like declarations: expansion status.
    pub fn status() -> Self {
        Self::allowing([
            InternalTagKind::Inline,
            InternalTagKind::Open,
            InternalTagKind::Closed,
        ])
    }

    /// Declarations that can name their canonical path.
    pub fn canonical() -> Self {
        Self::allowing([InternalTagKind::Canonical, InternalTagKind::Hidden])
    }

    pub fn accepts(&self, kind: InternalTagKind) -> bool {
        match self {
            TagsPolicy::None => false,
            TagsPolicy::Allow(kinds) => kinds.contains(&kind),
        }
    }
}

/// Internal tags pulled out of a body, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tags(pub Vec<Located<InternalTag>>);

impl Tags {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InternalTag> {
        self.0.iter().map(|t| &t.value)
    }

    pub fn contains(&self, kind: InternalTagKind) -> bool {
        self.iter().any(|t| t.kind() == kind)
    }
}

/// Builds the final body: fragments first, then alerts, both in order.
///
/// Internal tags are moved out of the body into [`Tags`] when `policy`
/// accepts them; any other internal tag fails the whole body. Headings
/// without an explicit label get one derived from their text.
pub fn assemble(
    policy: &TagsPolicy,
    parent: &Scope,
    fragments: Documentation,
    alerts: Vec<Located<DocElement>>,
    sink: &mut Diagnostics,
) -> Result<(Documentation, Tags), DocError> {
    let mut body = Vec::with_capacity(fragments.len() + alerts.len());
    let mut tags = Vec::new();
    let mut labels = HashSet::new();

    for element in fragments {
        match element.value {
            DocElement::Tag(TagElement::Internal(tag)) => {
                let kind = tag.kind();
                if !policy.accepts(kind) {
                    return Err(DocError::Policy(Diagnostic::error(
                        element.span,
                        format!("Unexpected tag '{kind}' in '{parent}'."),
                    )));
                }
                tags.push(Located::new(tag, element.span));
            }
            DocElement::Heading(mut heading) => {
                let label = heading
                    .label
                    .take()
                    .unwrap_or_else(|| slug(&heading.text));
                if !labels.insert(label.clone()) {
                    sink.warn(
                        element.span.clone(),
                        format!("Label '{label}' is defined more than once in '{parent}'."),
                    );
                }
                heading.label = Some(label);
                body.push(Located::new(DocElement::Heading(heading), element.span));
            }
            value => body.push(Located::new(value, element.span)),
        }
    }

    body.extend(alerts);
    Ok((body, Tags(tags)))
}

/// Lowercase, alphanumerics kept, runs of anything else become one `-`.
fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Heading;
    use crate::source::{SourcePosition, SourceSpan};
    use pretty_assertions::assert_eq;

    fn at(line: usize) -> SourceSpan {
        SourceSpan::new("s.ml", SourcePosition::new(line, 0), SourcePosition::new(line, 5))
    }

    fn para(text: &str, line: usize) -> Located<DocElement> {
        Located::new(DocElement::Paragraph(text.into()), at(line))
    }

    fn internal(tag: InternalTag, line: usize) -> Located<DocElement> {
        Located::new(DocElement::Tag(TagElement::Internal(tag)), at(line))
    }

    fn heading(text: &str, label: Option<&str>, line: usize) -> Located<DocElement> {
        Located::new(
            DocElement::Heading(Heading {
                level: 1,
                label: label.map(str::to_string),
                text: text.into(),
            }),
            at(line),
        )
    }

    #[test]
    fn scope_displays_dotted_path() {
        assert_eq!(Scope::root("Foo").child("Bar").to_string(), "Foo.Bar");
    }

    #[test]
    fn alerts_follow_fragments() {
        let alert = Located::new(
            DocElement::Tag(TagElement::Alert {
                name: "deprecated".into(),
                message: None,
            }),
            at(1),
        );
        let mut sink = Diagnostics::new();
        let (doc, tags) = assemble(
            &TagsPolicy::None,
            &Scope::root("M"),
            vec![para("a", 2), para("b", 3)],
            vec![alert.clone()],
            &mut sink,
        )
        .unwrap();
        assert_eq!(doc, vec![para("a", 2), para("b", 3), alert]);
        assert!(tags.is_empty());
    }

    #[test]
    fn allowed_internal_tags_move_to_tags() {
        let mut sink = Diagnostics::new();
        let (doc, tags) = assemble(
            &TagsPolicy::status(),
            &Scope::root("M"),
            vec![para("a", 1), internal(InternalTag::Open, 2)],
            vec![],
            &mut sink,
        )
        .unwrap();
        assert_eq!(doc, vec![para("a", 1)]);
        assert!(tags.contains(InternalTagKind::Open));
    }

    #[test]
    fn disallowed_internal_tag_fails() {
        let mut sink = Diagnostics::new();
        let err = assemble(
            &TagsPolicy::status(),
            &Scope::root("M").child("N"),
            vec![internal(InternalTag::Canonical("X".into()), 4)],
            vec![],
            &mut sink,
        )
        .unwrap_err();
        let diagnostic = err.diagnostic().unwrap();
        assert_eq!(diagnostic.message, "Unexpected tag '@canonical' in 'M.N'.");
        assert_eq!(diagnostic.span, at(4));
    }

    #[test]
    fn headings_get_labels_and_duplicates_warn() {
        let mut sink = Diagnostics::new();
        let (doc, _) = assemble(
            &TagsPolicy::None,
            &Scope::root("M"),
            vec![
                heading("Getting Started!", None, 1),
                heading("Other", Some("getting-started"), 2),
            ],
            vec![],
            &mut sink,
        )
        .unwrap();
        match &doc[0].value {
            DocElement::Heading(h) => assert_eq!(h.label.as_deref(), Some("getting-started")),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn empty_allow_set_is_none() {
        assert_eq!(TagsPolicy::allowing([]), TagsPolicy::None);
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slug("  Hello,  World  "), "hello-world");
        assert_eq!(slug("API v2"), "api-v2");
    }
}
