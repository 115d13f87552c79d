use crate::markup::Documentation;

/// A body cut at its first heading.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Split {
    /// Everything before the first heading. Never contains a heading.
    pub synopsis: Documentation,
    /// The first heading and everything after it.
    pub rest: Documentation,
}

impl Split {
    pub fn is_empty(&self) -> bool {
        self.synopsis.is_empty() && self.rest.is_empty()
    }

    /// Puts the two halves back together.
    pub fn into_documentation(self) -> Documentation {
        let mut doc = self.synopsis;
        doc.extend(self.rest);
        doc
    }
}

pub fn split_docs(doc: Documentation) -> Split {
    let at = doc
        .iter()
        .position(|element| element.value.is_heading())
        .unwrap_or(doc.len());
    let mut synopsis = doc;
    let rest = synopsis.split_off(at);
    Split { synopsis, rest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{DocElement, Heading, Located};
    use crate::source::{SourcePosition, SourceSpan};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn element(kind: char, line: usize) -> Located<DocElement> {
        let span = SourceSpan::new("x.ml", SourcePosition::new(line, 0), SourcePosition::new(line, 1));
        let value = match kind {
            'h' => DocElement::Heading(Heading {
                level: 2,
                label: None,
                text: format!("h{line}"),
            }),
            'c' => DocElement::CodeBlock {
                language: None,
                content: String::new(),
            },
            _ => DocElement::Paragraph(format!("p{line}")),
        };
        Located::new(value, span)
    }

    fn doc(shape: &str) -> Documentation {
        shape.chars().enumerate().map(|(i, k)| element(k, i + 1)).collect()
    }

    #[test]
    fn splits_before_first_heading() {
        let split = split_docs(doc("php"));
        assert_eq!(split.synopsis, doc("p"));
        assert_eq!(split.rest, vec![element('h', 2), element('p', 3)]);
    }

    #[test]
    fn no_heading_means_everything_is_synopsis() {
        let split = split_docs(doc("pcp"));
        assert_eq!(split.synopsis, doc("pcp"));
        assert!(split.rest.is_empty());
    }

    #[test]
    fn empty_body() {
        assert!(split_docs(vec![]).is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("h")]
    #[case("hp")]
    #[case("pp")]
    #[case("phph")]
    #[case("cchpph")]
    fn halves_rebuild_input_and_synopsis_has_no_heading(#[case] shape: &str) {
        let input = doc(shape);
        let split = split_docs(input.clone());
        assert!(split.synopsis.iter().all(|e| !e.value.is_heading()));
        assert!(split.rest.first().is_none_or(|e| e.value.is_heading()));
        assert_eq!(split.into_documentation(), input);
    }

    #[test]
    fn splitting_rest_again_never_puts_headings_in_synopsis() {
        let mut rest = doc("pphpphph");
        loop {
            let split = split_docs(rest);
            assert!(split.synopsis.iter().all(|e| !e.value.is_heading()));
            if split.rest.is_empty() {
                break;
            }
            rest = split.rest[1..].to_vec();
        }
    }
}
