//! Parsing one question block of the heuristic path.

use once_cell::sync::Lazy;
use regex::Regex;

use super::correct_value_index;
use crate::models::{QuestionKind, QuizQuestion, MAX_OPTIONS, MIN_OPTIONS};

static LEADING_ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[.)](?:\s+|$)").unwrap());

static TRAILING_CORRECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|\s)correct\s*:\s*(true|false|yes|no|[a-f])\s*$").unwrap()
});

static TYPE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^type\s*:\s*(mc|tf|yn|sa)\b").unwrap());

static QUESTION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^q\s*:\s*").unwrap());

static ANSWER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*answer[ \t]*:[ \t]*(.*)$").unwrap());

static OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-f])[.:)]\s+(.*)$").unwrap());

/// Parse one block into a question, or `None` when no question text is left.
pub(crate) fn parse_block(block: &str) -> Option<QuizQuestion> {
    let mut text = block.trim();
    if let Some(m) = LEADING_ORDINAL.find(text) {
        text = text[m.end()..].trim_start();
    }

    let mut correct = None;
    if let Some(caps) = TRAILING_CORRECT.captures(text) {
        correct = correct_value_index(&caps[1]);
        let start = caps.get(0).map_or(text.len(), |m| m.start());
        text = text[..start].trim_end();
    }

    let mut kind = QuestionKind::MultipleChoice;
    if let Some(caps) = TYPE_PREFIX.captures(text) {
        kind = QuestionKind::from_code(&caps[1]).unwrap_or(QuestionKind::MultipleChoice);
        let end = caps.get(0).map_or(0, |m| m.end());
        text = text[end..].trim_start();
    }

    if let Some(m) = QUESTION_PREFIX.find(text) {
        text = &text[m.end()..];
    }
    let text = text.trim();

    match kind {
        QuestionKind::TrueFalse => non_empty(&flatten(text))
            .map(|t| QuizQuestion::true_false(t, correct.unwrap_or(0))),
        QuestionKind::YesNo => {
            non_empty(&flatten(text)).map(|t| QuizQuestion::yes_no(t, correct.unwrap_or(0)))
        }
        QuestionKind::ShortAnswer => parse_short_answer(text),
        QuestionKind::MultipleChoice => parse_multiple_choice(text, correct.unwrap_or(0)),
    }
}

fn non_empty(text: &str) -> Option<&str> {
    let text = text.trim();
    if text.is_empty() { None } else { Some(text) }
}

/// Everything after `Answer:`, including later lines, is the sample answer.
fn parse_short_answer(text: &str) -> Option<QuizQuestion> {
    let (prompt, sample) = match ANSWER_LINE.captures(text) {
        Some(caps) => {
            let start = caps.get(0).map_or(text.len(), |m| m.start());
            let answer_start = caps.get(1).map_or(text.len(), |m| m.start());
            (flatten(&text[..start]), flatten(&text[answer_start..]))
        }
        None => (flatten(text), String::new()),
    };

    non_empty(&prompt).map(|p| QuizQuestion::short_answer(p, sample))
}

fn parse_multiple_choice(text: &str, correct: usize) -> Option<QuizQuestion> {
    if let Some((prompt, options)) = multi_line_options(text).or_else(|| inline_options(text)) {
        let prompt = non_empty(&prompt)?;
        return Some(QuizQuestion::multiple_choice(prompt, options, correct));
    }

    // No usable options: keep the prompt so options can be filled in later.
    let prompt = flatten(text);
    non_empty(&prompt).map(|p| QuizQuestion::multiple_choice(p, Vec::new(), correct))
}

/// Options written one per line (`A. Red`) below a prompt.
fn multi_line_options(text: &str) -> Option<(String, Vec<String>)> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let first = lines.iter().position(|line| OPTION_LINE.is_match(line))?;
    if first == 0 {
        return None;
    }

    let options: Vec<String> = lines[first..]
        .iter()
        .filter_map(|line| OPTION_LINE.captures(line))
        .map(|caps| caps[2].trim().to_string())
        .take(MAX_OPTIONS)
        .collect();

    if options.len() < MIN_OPTIONS {
        return None;
    }

    Some((lines[..first].join(" "), options))
}

#[derive(Debug, Clone, Copy)]
struct Marker {
    start: usize,
    content_start: usize,
}

/// Options embedded in the prompt line (`Pick one. A. x B. y`).
fn inline_options(text: &str) -> Option<(String, Vec<String>)> {
    let flat = flatten(text);
    let markers = find_inline_markers(&flat);
    if markers.len() < MIN_OPTIONS {
        return None;
    }

    let options = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(flat.len(), |next| next.start);
            flat[marker.content_start..end].trim().to_string()
        })
        .collect();

    Some((flat[..markers[0].start].trim().to_string(), options))
}

/// Markers must run `A`, `B`, `C` … in order; a letter only counts when it
/// follows whitespace and sits right before `.`, `:` or `)` plus whitespace.
/// Lowercase markers (`a) b)`) are only used when uppercase ones don't give
/// at least two options.
fn find_inline_markers(flat: &str) -> Vec<Marker> {
    let upper = scan_markers(flat.as_bytes(), b'A');
    if upper.len() >= MIN_OPTIONS {
        return upper;
    }
    scan_markers(flat.as_bytes(), b'a')
}

fn scan_markers(bytes: &[u8], first: u8) -> Vec<Marker> {
    let mut markers: Vec<Marker> = Vec::new();
    let mut expected = first;
    let mut i = 0;

    while i < bytes.len() && markers.len() < MAX_OPTIONS {
        if bytes[i] == expected && is_marker_at(bytes, i) {
            markers.push(Marker {
                start: i,
                content_start: i + 2,
            });
            expected += 1;
            i += 2;
        } else {
            i += 1;
        }
    }

    markers
}

fn is_marker_at(bytes: &[u8], i: usize) -> bool {
    let boundary_before = i == 0 || bytes[i - 1].is_ascii_whitespace();
    let delimiter = matches!(bytes.get(i + 1), Some(b'.' | b':' | b')'));
    let boundary_after = bytes.get(i + 2).is_none_or(|b| b.is_ascii_whitespace());
    boundary_before && delimiter && boundary_after
}

fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
