//! Tag paragraphs: a paragraph whose first line starts with `@`.
//!
//! Every line that starts with `@` opens a new tag; other lines continue
//! the text of the tag above them. A line like `@1.0` or `@name:` is read
//! as a tag with an unknown name, so it is reported rather than lost.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    diagnostics::{DocError, Diagnostic, Diagnostics},
    source::{SourceMap, SourceSpan, Span},
};

use super::types::{DocElement, InternalTag, Located, TagElement};

static RE_TAG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@([A-Za-z][A-Za-z0-9_-]*)(?:[[:blank:]]+(.*?))?[[:blank:]]*$").unwrap()
});

/// True if `raw` should be read as a run of tags instead of prose.
pub fn is_tag_paragraph(raw: &str) -> bool {
    raw.trim_start().starts_with('@')
}

struct PendingTag {
    name: String,
    text: String,
    span: Span,
}

/// Reads the tags of one paragraph. `range` is the paragraph's byte range
/// in the text behind `map`.
pub fn parse_tags(
    map: &SourceMap,
    range: Span,
    sink: &mut Diagnostics,
) -> Result<Vec<Located<DocElement>>, DocError> {
    let raw = map.slice(range);
    let mut out = Vec::new();
    let mut pending: Option<PendingTag> = None;
    let mut offset = range.start;

    for line in raw.split_inclusive('\n') {
        let line_span = Span {
            start: offset,
            end: offset + line.trim_end().len(),
        };
        offset += line.len();
        let trimmed = line.trim();

        if let Some(caps) = RE_TAG_LINE.captures(trimmed) {
            if let Some(tag) = pending.take() {
                finish(map, tag, &mut out, sink)?;
            }
            pending = Some(PendingTag {
                name: caps[1].to_string(),
                text: caps.get(2).map_or("", |m| m.as_str()).to_string(),
                span: line_span,
            });
        } else if let Some(rest) = trimmed.strip_prefix('@') {
            if let Some(tag) = pending.take() {
                finish(map, tag, &mut out, sink)?;
            }
            let (name, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            pending = Some(PendingTag {
                name: name.to_string(),
                text: text.trim().to_string(),
                span: line_span,
            });
        } else if let Some(tag) = pending.as_mut() {
            if !trimmed.is_empty() {
                if !tag.text.is_empty() {
                    tag.text.push(' ');
                }
                tag.text.push_str(trimmed);
            }
            tag.span.end = line_span.end;
        }
    }

    if let Some(tag) = pending.take() {
        finish(map, tag, &mut out, sink)?;
    }
    Ok(out)
}

fn finish(
    map: &SourceMap,
    tag: PendingTag,
    out: &mut Vec<Located<DocElement>>,
    sink: &mut Diagnostics,
) -> Result<(), DocError> {
    let span = map.span(tag.span);
    match build(&tag.name, tag.text.trim(), &span, sink)? {
        Some(element) => out.push(Located::new(DocElement::Tag(element), span)),
        None => sink.warn(span, format!("Unknown tag '@{}'.", tag.name)),
    }
    Ok(())
}

fn build(
    name: &str,
    text: &str,
    span: &SourceSpan,
    sink: &mut Diagnostics,
) -> Result<Option<TagElement>, DocError> {
    let element = match name {
        "author" => TagElement::Author(required(name, text, "an author name", span)?.to_string()),
        "deprecated" => TagElement::Deprecated(optional(text)),
        "param" => {
            let (name, text) = leading_word(name, text, "a parameter name", span)?;
            TagElement::Param { name, text }
        }
        "raise" | "raises" => {
            let (name, text) = leading_word(name, text, "an exception name", span)?;
            TagElement::Raise { name, text }
        }
        "return" | "returns" => TagElement::Return(text.to_string()),
        "see" => {
            let (target, text) = leading_word(name, text, "a reference", span)?;
            TagElement::See { target, text }
        }
        "since" => TagElement::Since(required(name, text, "a version", span)?.to_string()),
        "before" => {
            let (version, text) = leading_word(name, text, "a version", span)?;
            TagElement::Before { version, text }
        }
        "version" => TagElement::Version(required(name, text, "a version", span)?.to_string()),
        "canonical" => {
            let path = required(name, text, "a path", span)?;
            TagElement::Internal(InternalTag::Canonical(path.to_string()))
        }
        "inline" | "open" | "closed" | "hidden" => {
            if !text.is_empty() {
                sink.warn(
                    span.clone(),
                    format!("'@{name}' should not be followed by content."),
                );
            }
            TagElement::Internal(match name {
                "inline" => InternalTag::Inline,
                "open" => InternalTag::Open,
                "closed" => InternalTag::Closed,
                _ => InternalTag::Hidden,
            })
        }
        _ => return Ok(None),
    };
    Ok(Some(element))
}

fn optional(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn required<'a>(
    tag: &str,
    text: &'a str,
    what: &str,
    span: &SourceSpan,
) -> Result<&'a str, DocError> {
    if text.is_empty() {
        return Err(DocError::Markup(Diagnostic::error(
            span.clone(),
            format!("'@{tag}' expects {what} on the same line."),
        )));
    }
    Ok(text)
}

fn leading_word(
    tag: &str,
    text: &str,
    what: &str,
    span: &SourceSpan,
) -> Result<(String, String), DocError> {
    let text = required(tag, text, what, span)?;
    let (word, rest) = text
        .split_once(char::is_whitespace)
        .unwrap_or((text, ""));
    Ok((word.to_string(), rest.trim().to_string()))
}
