//! # Documentation Markup
//!
//! Turns the text of one comment into an ordered list of top-level
//! [`DocElement`]s, each carrying the span it came from.
//!
//! The text is CommonMark, read with `pulldown-cmark`. Paragraphs that
//! start with `@` are tag runs (see [`tags`]).
//!
//! ## Modules
//!
//! - **`types`**: `DocElement`, `TagElement`, `InternalTag`, `Located`
//! - **`tags`**: reading `@tag` paragraphs
//!
//! ## Key Invariants
//!
//! - Element order matches source order
//! - Every span points into the original file, via the location hint

pub mod tags;
pub mod types;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

use crate::{
    diagnostics::{DocError, Diagnostics},
    source::{Location, SourceMap, Span},
};

pub use types::{
    DocElement, Documentation, Heading, InternalTag, InternalTagKind, Located, TagElement,
};

/// Which top-level block is being collected.
#[derive(Debug)]
enum BlockStart {
    Paragraph,
    Heading { level: u8, label: Option<String> },
    FencedCode { language: Option<String> },
    IndentedCode,
    List { ordered: bool },
    Quote,
    Html,
}

/// A top-level block between its start and end events.
#[derive(Debug)]
struct OpenBlock {
    start: BlockStart,
    range: Span,
    text: String,
    items: Vec<String>,
}

impl OpenBlock {
    fn open(tag: &Tag<'_>, range: Span) -> Self {
        let start = match tag {
            Tag::Heading { level, id, .. } => BlockStart::Heading {
                level: *level as u8,
                label: id.as_ref().map(|id| id.to_string()),
            },
            Tag::CodeBlock(CodeBlockKind::Fenced(info)) => BlockStart::FencedCode {
                language: info.split_whitespace().next().map(str::to_string),
            },
            Tag::CodeBlock(CodeBlockKind::Indented) => BlockStart::IndentedCode,
            Tag::List(first) => BlockStart::List {
                ordered: first.is_some(),
            },
            Tag::BlockQuote(_) => BlockStart::Quote,
            Tag::HtmlBlock => BlockStart::Html,
            _ => BlockStart::Paragraph,
        };
        Self {
            start,
            range,
            text: String::new(),
            items: vec![],
        }
    }

    /// A block nested `depth` levels inside this one has started.
    fn nested(&mut self, tag: &Tag<'_>, depth: usize) {
        match tag {
            Tag::Item if depth == 1 => self.items.push(String::new()),
            Tag::Paragraph | Tag::Item | Tag::CodeBlock(_) => {
                let buf = self.buffer();
                if !buf.is_empty() && !buf.ends_with('\n') {
                    buf.push('\n');
                }
            }
            _ => {}
        }
    }

    fn buffer(&mut self) -> &mut String {
        match self.items.last_mut() {
            Some(item) => item,
            None => &mut self.text,
        }
    }

    fn inline(&mut self, event: Event<'_>) {
        match event {
            Event::Text(t) | Event::Code(t) | Event::Html(t) | Event::InlineHtml(t) => {
                self.buffer().push_str(&t)
            }
            Event::InlineMath(t) | Event::DisplayMath(t) => self.buffer().push_str(&t),
            Event::SoftBreak => self.buffer().push(' '),
            Event::HardBreak => self.buffer().push('\n'),
            _ => {}
        }
    }

    fn close(
        self,
        map: &SourceMap,
        out: &mut Vec<Located<DocElement>>,
        sink: &mut Diagnostics,
    ) -> Result<(), DocError> {
        let span = map.span(self.range);
        let element = match self.start {
            BlockStart::Paragraph => {
                if tags::is_tag_paragraph(&map.slice(self.range)) {
                    out.extend(tags::parse_tags(map, self.range, sink)?);
                    return Ok(());
                }
                DocElement::Paragraph(self.text.trim().to_string())
            }
            BlockStart::Heading { level, label } => DocElement::Heading(Heading {
                level,
                label,
                text: self.text.trim().to_string(),
            }),
            BlockStart::FencedCode { language } => {
                if !fence_is_closed(&map.slice(self.range)) {
                    sink.warn(span.clone(), "Missing end of code block.");
                }
                DocElement::CodeBlock {
                    language,
                    content: self.text,
                }
            }
            BlockStart::IndentedCode => DocElement::CodeBlock {
                language: None,
                content: self.text,
            },
            BlockStart::List { ordered } => DocElement::List {
                ordered,
                items: self
                    .items
                    .into_iter()
                    .map(|item| item.trim().to_string())
                    .collect(),
            },
            BlockStart::Quote => DocElement::Quote(self.text.trim().to_string()),
            BlockStart::Html => DocElement::Html(self.text),
        };
        out.push(Located::new(element, span));
        Ok(())
    }
}

fn options() -> Options {
    Options::ENABLE_HEADING_ATTRIBUTES
}

/// True if the fenced block's raw source ends with a matching fence.
fn fence_is_closed(raw: &str) -> bool {
    let mut lines = raw.lines();
    let Some(first) = lines.next() else {
        return false;
    };
    let first = first.trim_start();
    let Some(fence) = first.chars().next() else {
        return false;
    };
    let width = first.chars().take_while(|c| *c == fence).count();
    lines.any(|line| {
        let t = line.trim();
        t.len() >= width && t.chars().all(|c| c == fence)
    })
}

/// Parses the text of one comment.
///
/// `location` is where `text` starts in its file; all spans in the result
/// are expressed relative to it. Warnings go to `sink`; a malformed tag
/// fails the whole comment.
pub fn parse_comment(
    text: &str,
    location: &Location,
    sink: &mut Diagnostics,
) -> Result<Documentation, DocError> {
    let map = SourceMap::new(text, location.clone());
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<OpenBlock> = None;

    for (event, range) in Parser::new_ext(text, options()).into_offset_iter() {
        match event {
            Event::Start(tag) => {
                match current.as_mut() {
                    Some(block) => block.nested(&tag, depth),
                    None => current = Some(OpenBlock::open(&tag, range.into())),
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0
                    && let Some(block) = current.take()
                {
                    block.close(&map, &mut out, sink)?;
                }
            }
            Event::Rule if current.is_none() => {
                out.push(Located::new(DocElement::Rule, map.span(range.into())));
            }
            other => {
                if let Some(block) = current.as_mut() {
                    block.inline(other);
                }
            }
        }
    }

    log::trace!("parsed {} element(s) at {}", out.len(), location.start);
    Ok(out)
}
