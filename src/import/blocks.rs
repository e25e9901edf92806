//! Splitting a quiz body into per-question blocks.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(\d+)[.)][ \t]+").unwrap());

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n\s*").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Block<'a> {
    pub ordinal: usize,
    pub text: &'a str,
}

/// Split at numbered markers (`1.` / `2)` at line start), or at blank lines
/// when the body has no numbered markers at all.
pub(crate) fn split(body: &str) -> Vec<Block<'_>> {
    let numbered = split_numbered(body);
    if !numbered.is_empty() {
        return numbered;
    }

    split_paragraphs(body)
        .into_iter()
        .enumerate()
        .map(|(i, text)| Block {
            ordinal: i + 1,
            text,
        })
        .collect()
}

/// Each block runs from the end of its marker to the start of the next one.
/// Text ahead of the first marker belongs to no question.
fn split_numbered(body: &str) -> Vec<Block<'_>> {
    let markers: Vec<(usize, usize, usize)> = NUMBER_MARKER
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let ordinal = caps[1].parse().unwrap_or(0);
            Some((whole.start(), whole.end(), ordinal))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(_, content_start, ordinal))| {
            let end = markers.get(i + 1).map_or(body.len(), |next| next.0);
            Block {
                ordinal,
                text: &body[content_start..end],
            }
        })
        .collect()
}

/// Non-empty chunks separated by one or more blank lines, trimmed.
pub(crate) fn split_paragraphs(body: &str) -> Vec<&str> {
    BLANK_LINES
        .split(body)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_blocks() {
        let blocks = split("Quiz title\n1. First?\nA. x\n2) Second?\n  3. Third");
        assert_eq!(
            blocks,
            vec![
                Block { ordinal: 1, text: "First?\nA. x\n" },
                Block { ordinal: 2, text: "Second?\n" },
                Block { ordinal: 3, text: "Third" },
            ]
        );
    }

    #[test]
    fn test_marker_needs_trailing_space() {
        let blocks = split("1.5 is a number\n\n2.0 too");
        assert_eq!(
            blocks,
            vec![
                Block { ordinal: 1, text: "1.5 is a number" },
                Block { ordinal: 2, text: "2.0 too" },
            ]
        );
    }

    #[test]
    fn test_keeps_written_ordinals() {
        let blocks = split("4. Four\n7. Seven");
        let ordinals: Vec<usize> = blocks.iter().map(|b| b.ordinal).collect();
        assert_eq!(ordinals, vec![4, 7]);
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(
            split_paragraphs("\n\none\ntwo\n\n \n\t\nthree\n\n"),
            vec!["one\ntwo", "three"]
        );
        assert!(split_paragraphs("   \n\n  ").is_empty());
    }
}
