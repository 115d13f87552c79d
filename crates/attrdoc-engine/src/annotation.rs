//! Raw metadata annotations and their classification.
//!
//! An annotation is recognised under exactly two spellings per kind: a
//! short form and a namespaced form. Everything else is irrelevant to
//! documentation extraction.

use crate::source::SourceSpan;

pub const DOC: &str = "doc";
pub const DOC_NAMESPACED: &str = "attrdoc.doc";
pub const DEPRECATED: &str = "deprecated";
pub const DEPRECATED_NAMESPACED: &str = "attrdoc.deprecated";

/// Documentation text that marks an explicit stop.
pub const STOP_MARKER: &str = "/*";

/// A string literal payload and where it sits in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub text: String,
    pub span: SourceSpan,
}

impl Literal {
    pub fn new(text: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// A named annotation as handed over by the source parser.
///
/// `payload` is `Some` only when the annotation carries a single string
/// literal; any other payload shape is represented as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnnotation {
    pub name: String,
    pub payload: Option<Literal>,
    /// Span of the whole annotation.
    pub span: SourceSpan,
}

impl RawAnnotation {
    pub fn new(name: impl Into<String>, payload: Option<Literal>, span: SourceSpan) -> Self {
        Self {
            name: name.into(),
            payload,
            span,
        }
    }

    /// A documentation annotation whose literal spans the same range.
    pub fn doc(text: impl Into<String>, span: SourceSpan) -> Self {
        Self::new(DOC, Some(Literal::new(text, span.clone())), span)
    }

    pub fn deprecated(message: Option<&str>, span: SourceSpan) -> Self {
        let payload = message.map(|m| Literal::new(m, span.clone()));
        Self::new(DEPRECATED, payload, span)
    }
}

/// A recognised annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    Text(&'a Literal),
    Deprecated(Option<&'a Literal>),
}

/// Classifies `annotation`, returning `None` for names that do not matter here.
///
/// # Panics
///
/// A documentation annotation always carries a string literal; the source
/// parser guarantees it. If that guarantee is broken no sensible output
/// exists, so this panics rather than returning an error.
pub fn classify(annotation: &RawAnnotation) -> Option<Classified<'_>> {
    match annotation.name.as_str() {
        DOC | DOC_NAMESPACED => match &annotation.payload {
            Some(literal) => Some(Classified::Text(literal)),
            None => panic!(
                "{}: '{}' annotation without a string literal payload",
                annotation.span, annotation.name
            ),
        },
        DEPRECATED | DEPRECATED_NAMESPACED => {
            Some(Classified::Deprecated(annotation.payload.as_ref()))
        }
        _ => None,
    }
}

/// True for a documentation annotation whose text is the stop marker.
pub fn is_stop_marker(annotation: &RawAnnotation) -> bool {
    matches!(classify(annotation), Some(Classified::Text(lit)) if lit.text == STOP_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourcePosition;
    use rstest::rstest;

    fn span() -> SourceSpan {
        SourceSpan::new("t.ml", SourcePosition::new(1, 0), SourcePosition::new(1, 10))
    }

    #[rstest]
    #[case(DOC)]
    #[case(DOC_NAMESPACED)]
    fn doc_names_classify_as_text(#[case] name: &str) {
        let ann = RawAnnotation::new(name, Some(Literal::new("hello", span())), span());
        match classify(&ann) {
            Some(Classified::Text(lit)) => assert_eq!(lit.text, "hello"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[rstest]
    #[case(DEPRECATED)]
    #[case(DEPRECATED_NAMESPACED)]
    fn deprecated_names_classify_with_optional_payload(#[case] name: &str) {
        let bare = RawAnnotation::new(name, None, span());
        assert_eq!(classify(&bare), Some(Classified::Deprecated(None)));

        let with_msg = RawAnnotation::new(name, Some(Literal::new("use bar", span())), span());
        assert!(matches!(
            classify(&with_msg),
            Some(Classified::Deprecated(Some(lit))) if lit.text == "use bar"
        ));
    }

    #[rstest]
    #[case("inline")]
    #[case("ocaml.warning")]
    #[case("Doc")]
    fn other_names_are_irrelevant(#[case] name: &str) {
        let ann = RawAnnotation::new(name, Some(Literal::new("x", span())), span());
        assert_eq!(classify(&ann), None);
    }

    #[test]
    #[should_panic(expected = "without a string literal payload")]
    fn doc_without_literal_is_a_contract_violation() {
        classify(&RawAnnotation::new(DOC, None, span()));
    }

    #[test]
    fn stop_marker_is_recognised_under_doc_name_only() {
        assert!(is_stop_marker(&RawAnnotation::doc(STOP_MARKER, span())));
        assert!(!is_stop_marker(&RawAnnotation::doc("/* not a stop", span())));
        assert!(!is_stop_marker(&RawAnnotation::deprecated(
            Some(STOP_MARKER),
            span()
        )));
    }
}
