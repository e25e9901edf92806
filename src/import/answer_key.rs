//! Trailing `Answer Key` section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::letter_index;

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*answer[ \t]+key[ \t]*:?[ \t]*$").unwrap());

static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*[.)]\s*([A-Fa-f])\b").unwrap());

/// Maps a 1-based question ordinal to a zero-based option index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AnswerKeyEntry {
    pub ordinal: usize,
    pub index: usize,
}

/// Split `text` at the first `Answer Key` header line.
///
/// Returns the text before the header and the entries found below it. Lines
/// under the header that are not `<n>. <letter>` are ignored. Without a
/// header the whole text is the body and the key is empty.
pub(crate) fn extract(text: &str) -> (&str, Vec<AnswerKeyEntry>) {
    let Some(header) = HEADER.find(text) else {
        return (text, Vec::new());
    };

    let entries = text[header.end()..]
        .lines()
        .filter_map(|line| parse_entry(line.trim()))
        .collect();

    (&text[..header.start()], entries)
}

fn parse_entry(line: &str) -> Option<AnswerKeyEntry> {
    let caps = ENTRY.captures(line)?;
    let ordinal = caps[1].parse().ok()?;
    let letter = caps[2].chars().next()?;
    Some(AnswerKeyEntry {
        ordinal,
        index: letter_index(letter)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header() {
        let (body, key) = extract("1. Q\nA. x\nB. y");
        assert_eq!(body, "1. Q\nA. x\nB. y");
        assert!(key.is_empty());
    }

    #[test]
    fn test_header_variants() {
        for header in ["Answer Key", "answer key:", "  ANSWER KEY :  ", "Answer  Key"] {
            let text = format!("1. Q\n{}\n1. b", header);
            let (body, key) = extract(&text);
            assert_eq!(body, "1. Q\n", "header {:?}", header);
            assert_eq!(key, vec![AnswerKeyEntry { ordinal: 1, index: 1 }]);
        }
    }

    #[test]
    fn test_header_must_stand_alone() {
        let (body, key) = extract("1. See the answer key below\n1. A");
        assert_eq!(body, "1. See the answer key below\n1. A");
        assert!(key.is_empty());
    }

    #[test]
    fn test_entries() {
        let (_, key) = extract("Answer Key\n1. A\n2) c\n\n  3.D\n4. G\nnotes\n10. f");
        assert_eq!(
            key,
            vec![
                AnswerKeyEntry { ordinal: 1, index: 0 },
                AnswerKeyEntry { ordinal: 2, index: 2 },
                AnswerKeyEntry { ordinal: 3, index: 3 },
                AnswerKeyEntry { ordinal: 10, index: 5 },
            ]
        );
    }
}
