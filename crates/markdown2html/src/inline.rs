use std::borrow::Cow;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::RenderOptions;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());

const DELIMITER_LEN: usize = 2;

/// Rewrites `**bold**` and `__emphasis__` spans within a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineFormatter {
    options: RenderOptions,
}

struct Substitution {
    range: Range<usize>,
    tag: &'static str,
}

impl InlineFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Only the leftmost span of each delimiter type is replaced. Both types
    /// are located on the untouched input, then spliced in one pass.
    pub fn format<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut substitutions = Vec::with_capacity(4);

        if self.options.bold {
            collect_span(&BOLD, line, ("<b>", "</b>"), &mut substitutions);
        }
        if self.options.emphasis {
            collect_span(&EMPHASIS, line, ("<em>", "</em>"), &mut substitutions);
        }

        if substitutions.is_empty() {
            return Cow::Borrowed(line);
        }

        // `*` and `_` delimiters never share bytes, so the ranges are
        // disjoint and can be applied back to front without re-indexing.
        substitutions.sort_by(|a, b| b.range.start.cmp(&a.range.start));

        let mut output = line.to_string();
        for substitution in substitutions {
            output.replace_range(substitution.range, substitution.tag);
        }
        Cow::Owned(output)
    }
}

fn collect_span(
    pattern: &Regex,
    line: &str,
    (open, close): (&'static str, &'static str),
    substitutions: &mut Vec<Substitution>,
) {
    let Some(found) = pattern.find(line) else {
        return;
    };

    substitutions.push(Substitution {
        range: found.start()..found.start() + DELIMITER_LEN,
        tag: open,
    });
    substitutions.push(Substitution {
        range: found.end() - DELIMITER_LEN..found.end(),
        tag: close,
    });
}
