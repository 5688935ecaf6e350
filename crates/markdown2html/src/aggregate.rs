use std::ops::RangeInclusive;

use crate::block::{classify, starts_alphabetic, strip_marker, BlockKind};
use crate::inline::InlineFormatter;
use crate::line::SourceDocument;

/// One finished HTML block and the source lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlBlock {
    pub kind: BlockKind,
    pub html: String,
    pub line_range: RangeInclusive<usize>,
}

impl HtmlBlock {
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Expands the block starting at `cursor` into HTML.
///
/// The returned range is inclusive and always starts at `cursor`; its end is
/// the last line consumed, never past the final line of `doc`.
pub fn aggregate(
    doc: &SourceDocument,
    cursor: usize,
    kind: BlockKind,
    formatter: &InlineFormatter,
) -> HtmlBlock {
    let (html, line_range) = match kind {
        BlockKind::Heading(level) => {
            let text = strip_marker(doc.get(cursor).unwrap_or_default());
            let html = format!("<h{level}>{}</h{level}>\n", formatter.format(text));
            (html, cursor..=cursor)
        }
        BlockKind::UnorderedListItem => list(doc, cursor, kind, "ul", formatter),
        BlockKind::OrderedListItem => list(doc, cursor, kind, "ol", formatter),
        BlockKind::ParagraphLine => paragraph(doc, cursor, formatter),
        BlockKind::Blank => (String::new(), cursor..=cursor),
    };

    HtmlBlock {
        kind,
        html,
        line_range,
    }
}

fn list(
    doc: &SourceDocument,
    cursor: usize,
    kind: BlockKind,
    tag: &str,
    formatter: &InlineFormatter,
) -> (String, RangeInclusive<usize>) {
    let range = contiguous_run(doc, cursor, |line| classify(line) == kind);

    let mut html = format!("<{tag}>\n");
    for line in &doc.lines()[range.clone()] {
        html.push_str("<li>");
        html.push_str(&formatter.format(strip_marker(line)));
        html.push_str("</li>\n");
    }
    html.push_str(&format!("</{tag}>\n"));

    (html, range)
}

fn paragraph(
    doc: &SourceDocument,
    cursor: usize,
    formatter: &InlineFormatter,
) -> (String, RangeInclusive<usize>) {
    let range = contiguous_run(doc, cursor, starts_alphabetic);

    let sentences: Vec<String> = doc.lines()[range.clone()]
        .iter()
        .map(|line| formatter.format(line.trim()).into_owned())
        .collect();

    let html = format!("<p>\n{}\n</p>\n", sentences.join("\n<br/>\n"));
    (html, range)
}

/// Returns `cursor..=last` where every line after `cursor` satisfies
/// `continues`. The first line is always included.
fn contiguous_run<F>(doc: &SourceDocument, cursor: usize, continues: F) -> RangeInclusive<usize>
where
    F: Fn(&str) -> bool,
{
    let mut last = cursor;
    while let Some(next) = doc.get(last + 1) {
        if !continues(next) {
            break;
        }
        last += 1;
    }
    cursor..=last
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, cursor: usize) -> HtmlBlock {
        let doc = SourceDocument::parse(input);
        let kind = classify(doc.get(cursor).unwrap());
        aggregate(&doc, cursor, kind, &InlineFormatter::default())
    }

    #[test]
    fn heading_consumes_one_line() {
        let block = run("## Sub **title**  \nnext", 0);
        assert_eq!(block.html, "<h2>Sub <b>title</b></h2>\n");
        assert_eq!(block.line_range, 0..=0);
    }

    #[test]
    fn unordered_list_stops_at_other_marker() {
        let block = run("- one\n- __two__\n* three", 0);
        assert_eq!(block.html, "<ul>\n<li>one</li>\n<li><em>two</em></li>\n</ul>\n");
        assert_eq!(block.line_range, 0..=1);
    }

    #[test]
    fn ordered_list_stops_at_blank_line() {
        let block = run("* a\n\n* b", 0);
        assert_eq!(block.html, "<ol>\n<li>a</li>\n</ol>\n");
        assert_eq!(block.line_range, 0..=0);
    }

    #[test]
    fn list_runs_to_end_of_document() {
        let block = run("intro\n- x\n- y", 1);
        assert_eq!(block.line_range, 1..=2);
    }

    #[test]
    fn paragraph_joins_lines_with_breaks() {
        let block = run("First line\nsecond **line**\n# Heading", 0);
        assert_eq!(
            block.html,
            "<p>\nFirst line\n<br/>\nsecond <b>line</b>\n</p>\n"
        );
        assert_eq!(block.line_range, 0..=1);
    }

    #[test]
    fn paragraph_stops_at_non_alphabetic_line() {
        let block = run("Text\n(aside)\nmore", 0);
        assert_eq!(block.line_range, 0..=0);
    }

    #[test]
    fn paragraph_stops_at_list_markers() {
        for input in ["Text\n- item", "Text\n* item"] {
            let block = run(input, 0);
            assert_eq!(block.html, "<p>\nText\n</p>\n");
            assert_eq!(block.line_range, 0..=0);
        }
    }

    #[test]
    fn every_heading_level_wraps_trimmed_text() {
        for level in 1..=6 {
            let input = format!("{} Level __{level}__ ", "#".repeat(level));
            let block = run(&input, 0);
            assert_eq!(block.kind, BlockKind::Heading(level));
            assert_eq!(
                block.html,
                format!("<h{level}>Level <em>{level}</em></h{level}>\n")
            );
        }
    }

    #[test]
    fn punctuation_led_line_is_its_own_paragraph() {
        let block = run("(aside)\nfollows", 0);
        assert_eq!(block.kind, BlockKind::ParagraphLine);
        assert_eq!(block.html, "<p>\n(aside)\n<br/>\nfollows\n</p>\n");
    }

    #[test]
    fn blank_emits_nothing() {
        let doc = SourceDocument::parse("\nText");
        let block = aggregate(&doc, 0, BlockKind::Blank, &InlineFormatter::default());
        assert!(block.is_empty());
        assert_eq!(block.line_range, 0..=0);
    }
}
