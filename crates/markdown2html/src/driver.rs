use log::{debug, trace};

use crate::aggregate::{aggregate, HtmlBlock};
use crate::block::{classify, BlockKind};
use crate::inline::InlineFormatter;
use crate::line::SourceDocument;
use crate::options::RenderOptions;

/// Walks a [`SourceDocument`] front to back, yielding one [`HtmlBlock`] per
/// non-blank block in document order.
pub struct DocumentDriver<'a> {
    doc: &'a SourceDocument,
    cursor: usize,
    formatter: InlineFormatter,
}

impl<'a> DocumentDriver<'a> {
    pub fn new(doc: &'a SourceDocument, options: RenderOptions) -> Self {
        Self {
            doc,
            cursor: 0,
            formatter: InlineFormatter::new(options),
        }
    }

    /// Index of the next unconsumed line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Iterator for DocumentDriver<'_> {
    type Item = HtmlBlock;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.doc.get(self.cursor) {
            let kind = classify(line);
            if kind == BlockKind::Blank {
                trace!("line {}: blank, skipped", self.cursor);
                self.cursor += 1;
                continue;
            }

            let block = aggregate(self.doc, self.cursor, kind, &self.formatter);
            self.cursor = *block.line_range.end() + 1;

            debug!(
                "lines {}..={}: {}",
                block.line_range.start(),
                block.line_range.end(),
                block.kind
            );

            if !block.is_empty() {
                return Some(block);
            }
        }

        None
    }
}

/// Converts a whole document into its ordered HTML blocks.
pub fn convert_document(doc: &SourceDocument, options: RenderOptions) -> Vec<HtmlBlock> {
    DocumentDriver::new(doc, options).collect()
}

/// Converts a whole document and concatenates the blocks.
pub fn render_document(doc: &SourceDocument, options: RenderOptions) -> String {
    DocumentDriver::new(doc, options)
        .map(|block| block.html)
        .collect()
}
