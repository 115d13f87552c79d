//! The introductory comment of a scope body.
//!
//! A single forward pass over the items, in one of two phases:
//!
//! - **Leading**: looking for the first documentation text. Alerts seen on
//!   the way are collected, skippable items are kept in place.
//! - **Trailing**: after the comment, collecting the alerts right behind
//!   it. Skippable items here are dropped; the next text or unrecognised
//!   item ends the pass.
//!
//! Reaching an unrecognised item in the leading phase gives up: nothing
//! is consumed from that point on and no documentation is produced.

use crate::{
    annotation::{Classified, Literal, RawAnnotation, classify},
    diagnostics::{DocError, Diagnostics},
    markup::{DocElement, Documentation, Located},
    semantics::{Scope, Tags, TagsPolicy, assemble},
};

use super::{DocsOrStop, Split, deprecation_alert, parse_literal, split_docs};

/// How the caller sees one item of a scope body.
///
/// Callers must report a stop-marker annotation (see
/// [`crate::annotation::is_stop_marker`]) as [`ItemKind::Unrecognized`]; the
/// scanner does not look for stop markers itself and would otherwise read
/// the marker as ordinary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind<'a> {
    AnnotationLike(&'a RawAnnotation),
    /// An open/include-style item that never carries documentation.
    OpenLike,
    Unrecognized,
}

/// What the scanner does with one item.
#[derive(Debug)]
enum ScanStep<'a> {
    Text(&'a Literal),
    Alert(Located<DocElement>),
    Skip,
    Stop,
}

impl<'a> ScanStep<'a> {
    fn of(kind: ItemKind<'a>) -> Self {
        match kind {
            ItemKind::AnnotationLike(annotation) => match classify(annotation) {
                Some(Classified::Text(literal)) => ScanStep::Text(literal),
                Some(Classified::Deprecated(payload)) => {
                    ScanStep::Alert(deprecation_alert(annotation, payload))
                }
                None => ScanStep::Skip,
            },
            ItemKind::OpenLike => ScanStep::Skip,
            ItemKind::Unrecognized => ScanStep::Stop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Leading,
    Trailing,
}

/// Result of [`extract_top_comment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopComment<T> {
    /// Items left for the caller, in their original order.
    pub remaining: Vec<T>,
    pub docs: Split,
    pub tags: Tags,
}

/// A top comment that failed to parse or assemble.
///
/// The scan still ran to the end, so `remaining` holds the same items a
/// successful scan would have left; only the comment and its alerts are lost.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct TopCommentError<T> {
    pub remaining: Vec<T>,
    #[source]
    pub error: DocError,
}

/// Finds the top comment of a scope body.
///
/// Returns the items the caller still has to process, the comment (with
/// the alerts around it) split into synopsis and rest, and its tags.
pub fn extract_top_comment<T, F>(
    policy: &TagsPolicy,
    classify_item: F,
    parent: &Scope,
    items: Vec<T>,
    sink: &mut Diagnostics,
) -> Result<TopComment<T>, TopCommentError<T>>
where
    F: Fn(&T) -> ItemKind<'_>,
{
    let mut phase = Phase::Leading;
    let mut kept = vec![false; items.len()];
    let mut tail = items.len();
    let mut leading_alerts = Vec::new();
    let mut trailing_alerts = Vec::new();
    let mut body: Result<Documentation, DocError> = Ok(Vec::new());
    let mut stopped = false;

    for (index, item) in items.iter().enumerate() {
        let step = ScanStep::of(classify_item(item));
        log::trace!("{parent}: item {index} in {phase:?} phase: {step:?}");
        match phase {
            Phase::Leading => match step {
                ScanStep::Text(literal) => {
                    log::debug!("{parent}: top comment at {}", literal.span);
                    body = parse_literal(literal, sink);
                    phase = Phase::Trailing;
                }
                ScanStep::Alert(alert) => leading_alerts.push(alert),
                ScanStep::Skip => kept[index] = true,
                ScanStep::Stop => {
                    log::debug!("{parent}: no top comment, stopped at item {index}");
                    tail = index;
                    stopped = true;
                    break;
                }
            },
            // Skip items after the comment are dropped, unlike the leading phase.
            Phase::Trailing => match step {
                ScanStep::Alert(alert) => trailing_alerts.push(alert),
                ScanStep::Skip => {}
                ScanStep::Text(_) | ScanStep::Stop => {
                    tail = index;
                    break;
                }
            },
        }
    }

    let remaining: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter(|(index, _)| kept[*index] || *index >= tail)
        .map(|(_, item)| item)
        .collect();

    if stopped {
        return Ok(TopComment {
            remaining,
            docs: Split::default(),
            tags: Tags::default(),
        });
    }

    let mut alerts = leading_alerts;
    alerts.extend(trailing_alerts);
    let assembled = body.and_then(|body| assemble(policy, parent, body, alerts, sink));
    match assembled {
        Ok((doc, tags)) => Ok(TopComment {
            remaining,
            docs: split_docs(doc),
            tags,
        }),
        Err(error) => {
            log::debug!("{parent}: top comment rejected: {error}");
            Err(TopCommentError { remaining, error })
        }
    }
}

/// An item of an already-processed body, where comments are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyItem<T> {
    Comment(DocsOrStop),
    Item(T),
}

/// Takes the first item as the top comment if it is parsed documentation.
pub fn extract_top_comment_for_class_body<T>(items: Vec<BodyItem<T>>) -> (Vec<BodyItem<T>>, Split) {
    let mut iter = items.into_iter();
    match iter.next() {
        Some(BodyItem::Comment(DocsOrStop::Docs(doc))) => (iter.collect(), split_docs(doc)),
        Some(first) => (std::iter::once(first).chain(iter).collect(), Split::default()),
        None => (vec![], Split::default()),
    }
}
