//! # Documentation Extraction
//!
//! Collects documentation from annotations on declarations and scopes.
//!
//! ## Modules
//!
//! - **`attached`**: all annotations of one declaration folded into one body
//! - **`standalone`**: a freestanding annotation read as docs or a stop marker
//! - **`top_comment`**: the leading comment of a scope body and its alerts
//! - **`split`**: synopsis / rest split at the first heading

pub mod attached;
pub mod split;
pub mod standalone;
pub mod top_comment;

pub use attached::{attached, attached_no_tag};
pub use split::{Split, split_docs};
pub use standalone::{page, standalone, standalone_multiple};
pub use top_comment::{
    BodyItem, ItemKind, TopComment, TopCommentError, extract_top_comment,
    extract_top_comment_for_class_body,
};

use crate::{
    annotation::{Literal, RawAnnotation},
    diagnostics::{DocError, Diagnostics},
    markup::{self, DocElement, Documentation, Located, TagElement},
};

/// Width of the opening delimiter in front of a documentation literal.
const OPENING_DELIMITER_WIDTH: usize = 3;

/// What a freestanding annotation amounts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsOrStop {
    Docs(Documentation),
    Stop,
}

fn parse_literal(literal: &Literal, sink: &mut Diagnostics) -> Result<Documentation, DocError> {
    let location = literal.span.location().padded(OPENING_DELIMITER_WIDTH);
    markup::parse_comment(&literal.text, &location, sink)
}

/// The alert for a deprecated-kind annotation, placed at the annotation itself.
fn deprecation_alert(annotation: &RawAnnotation, payload: Option<&Literal>) -> Located<DocElement> {
    Located::new(
        DocElement::Tag(TagElement::Alert {
            name: "deprecated".to_string(),
            message: payload.map(|lit| lit.text.clone()),
        }),
        annotation.span.clone(),
    )
}
