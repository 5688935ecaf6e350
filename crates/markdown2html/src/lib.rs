//! Line-oriented Markdown to HTML conversion.
//!
//! Supports ATX-style headings, `-` (unordered) and `*` (ordered) lists,
//! paragraphs, and the `**bold**` / `__emphasis__` inline markers. A
//! document is classified one line at a time; contiguous list items and
//! paragraph lines are folded into a single block.

mod aggregate;
mod block;
mod driver;
pub mod error;
pub mod fs;
mod inline;
mod line;
mod options;

pub use aggregate::{aggregate, HtmlBlock};
pub use block::{classify, BlockKind};
pub use driver::{convert_document, render_document, DocumentDriver};
pub use error::{ConvertError, ConvertResult, ExitCode};
pub use fs::{convert_path, read_source, write_atomic};
pub use inline::InlineFormatter;
pub use line::{read_lines, SourceDocument};
pub use options::RenderOptions;

use std::io::{self, BufReader, Read};

/// Converts Markdown held in memory.
pub fn convert_str(input: &str, options: RenderOptions) -> String {
    render_document(&SourceDocument::parse(input), options)
}

pub fn convert_from_reader<R: Read>(
    reader: &mut BufReader<R>,
    options: RenderOptions,
) -> io::Result<String> {
    let doc = SourceDocument::from_reader(reader)?;
    Ok(render_document(&doc, options))
}
