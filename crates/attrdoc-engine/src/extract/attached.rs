use crate::{
    annotation::{Classified, RawAnnotation, classify},
    diagnostics::{DocError, Diagnostics},
    markup::Documentation,
    semantics::{Scope, Tags, TagsPolicy, assemble},
};

use super::{deprecation_alert, parse_literal};

/// Folds the annotations of one declaration into a body and its tags.
///
/// Documentation texts are parsed and concatenated in order; deprecated
/// annotations become alerts that follow the text. Other annotations are
/// ignored.
pub fn attached(
    policy: &TagsPolicy,
    parent: &Scope,
    annotations: &[RawAnnotation],
    sink: &mut Diagnostics,
) -> Result<(Documentation, Tags), DocError> {
    let mut fragments = Vec::new();
    let mut alerts = Vec::new();

    for annotation in annotations {
        match classify(annotation) {
            Some(Classified::Text(literal)) => fragments.extend(parse_literal(literal, sink)?),
            Some(Classified::Deprecated(payload)) => {
                alerts.push(deprecation_alert(annotation, payload))
            }
            None => {}
        }
    }

    assemble(policy, parent, fragments, alerts, sink)
}

/// Like [`attached`] for declarations that accept no tags at all.
pub fn attached_no_tag(
    parent: &Scope,
    annotations: &[RawAnnotation],
    sink: &mut Diagnostics,
) -> Result<Documentation, DocError> {
    let (doc, _) = attached(&TagsPolicy::None, parent, annotations, sink)?;
    Ok(doc)
}
