use crate::{
    annotation::{Classified, RawAnnotation, STOP_MARKER, classify},
    diagnostics::{DocError, Diagnostics},
    markup,
    semantics::{Scope, TagsPolicy, assemble},
    source::Location,
};

use super::{DocsOrStop, parse_literal};

/// Reads one freestanding annotation.
///
/// Returns `None` for annotations that are not documentation, and for
/// deprecated ones, which are reported as misplaced.
pub fn standalone(
    parent: &Scope,
    annotation: &RawAnnotation,
    sink: &mut Diagnostics,
) -> Result<Option<DocsOrStop>, DocError> {
    match classify(annotation) {
        Some(Classified::Text(literal)) if literal.text == STOP_MARKER => Ok(Some(DocsOrStop::Stop)),
        Some(Classified::Text(literal)) => {
            let fragments = parse_literal(literal, sink)?;
            let (doc, _) = assemble(&TagsPolicy::None, parent, fragments, vec![], sink)?;
            Ok(Some(DocsOrStop::Docs(doc)))
        }
        Some(Classified::Deprecated(_)) => {
            sink.warn(
                annotation.span.clone(),
                "Deprecated attribute not expected here.",
            );
            Ok(None)
        }
        None => Ok(None),
    }
}

/// [`standalone`] over a list, keeping order and dropping the `None`s.
pub fn standalone_multiple(
    parent: &Scope,
    annotations: &[RawAnnotation],
    sink: &mut Diagnostics,
) -> Result<Vec<DocsOrStop>, DocError> {
    let mut out = Vec::new();
    for annotation in annotations {
        if let Some(item) = standalone(parent, annotation, sink)? {
            out.push(item);
        }
    }
    Ok(out)
}

/// Parses a whole text file as documentation, with no annotation around it.
pub fn page(
    parent: &Scope,
    location: &Location,
    text: &str,
    sink: &mut Diagnostics,
) -> Result<DocsOrStop, DocError> {
    let fragments = markup::parse_comment(text, location, sink)?;
    let (doc, _) = assemble(&TagsPolicy::None, parent, fragments, vec![], sink)?;
    Ok(DocsOrStop::Docs(doc))
}
