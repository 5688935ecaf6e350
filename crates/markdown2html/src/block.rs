use std::fmt;

/// Block type started by a single source line, decided from its leading token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading(usize),
    UnorderedListItem,
    OrderedListItem,
    ParagraphLine,
    Blank,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(level) => write!(f, "heading (level {level})"),
            Self::UnorderedListItem => f.write_str("unordered list item"),
            Self::OrderedListItem => f.write_str("ordered list item"),
            Self::ParagraphLine => f.write_str("paragraph line"),
            Self::Blank => f.write_str("blank"),
        }
    }
}

/// Classifies a line by its first whitespace-delimited token.
///
/// A marker token only counts when content follows it. Bare markers (`#`,
/// `-`, `*` alone) and lines opening with any other punctuation fall back to
/// [`BlockKind::ParagraphLine`], so classification never fails.
pub fn classify(line: &str) -> BlockKind {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return BlockKind::Blank;
    }

    let (token, rest) = split_token(trimmed);
    if rest.trim().is_empty() {
        return BlockKind::ParagraphLine;
    }

    match token {
        "-" => BlockKind::UnorderedListItem,
        "*" => BlockKind::OrderedListItem,
        _ if token.chars().all(|ch| ch == '#') => BlockKind::Heading(token.len()),
        _ => BlockKind::ParagraphLine,
    }
}

/// Strips the marker token and the whitespace after it, returning the content.
pub fn strip_marker(line: &str) -> &str {
    let (_, rest) = split_token(line.trim_start());
    rest.trim()
}

/// True when the first non-whitespace character is alphabetic.
pub fn starts_alphabetic(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(char::is_alphabetic)
}

fn split_token(trimmed: &str) -> (&str, &str) {
    match trimmed.find(char::is_whitespace) {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_heading_levels() {
        assert_eq!(classify("# Title"), BlockKind::Heading(1));
        assert_eq!(classify("###### Deep"), BlockKind::Heading(6));
        assert_eq!(classify("######## Deeper"), BlockKind::Heading(8));
    }

    #[test]
    fn classifies_list_markers() {
        assert_eq!(classify("- item"), BlockKind::UnorderedListItem);
        assert_eq!(classify("* item"), BlockKind::OrderedListItem);
    }

    #[test]
    fn classifies_blank_lines() {
        assert_eq!(classify(""), BlockKind::Blank);
        assert_eq!(classify("   \t "), BlockKind::Blank);
    }

    #[test]
    fn bare_markers_fall_back_to_paragraph() {
        assert_eq!(classify("#"), BlockKind::ParagraphLine);
        assert_eq!(classify("-"), BlockKind::ParagraphLine);
        assert_eq!(classify("*   "), BlockKind::ParagraphLine);
    }

    #[test]
    fn markers_without_separator_are_paragraph_text() {
        assert_eq!(classify("#hashtag"), BlockKind::ParagraphLine);
        assert_eq!(classify("-dash"), BlockKind::ParagraphLine);
        assert_eq!(classify("**bold** start"), BlockKind::ParagraphLine);
        assert_eq!(classify("(aside)"), BlockKind::ParagraphLine);
    }

    #[test]
    fn strips_marker_and_surrounding_whitespace() {
        assert_eq!(strip_marker("## Sub heading  "), "Sub heading");
        assert_eq!(strip_marker("-   spaced"), "spaced");
    }

    #[test]
    fn detects_alphabetic_start() {
        assert!(starts_alphabetic("Text"));
        assert!(starts_alphabetic("  indented"));
        assert!(starts_alphabetic("élan"));
        assert!(!starts_alphabetic("1. numbered"));
        assert!(!starts_alphabetic(""));
    }
}
