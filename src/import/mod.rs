//! Pasted-text quiz importer.
//!
//! [`parse`] turns free-form quiz text into [`QuizQuestion`] records. It
//! understands numbered questions with options on their own lines or inline
//! (`1. Pick one. A. x B. y`), the line-prefixed `Type:` / `Q:` / `Correct:`
//! format written by [`crate::export`], and a trailing `Answer Key` section.
//!
//! Parsing is best effort and never fails. Text that cannot be interpreted
//! yields fewer questions, never an error.

mod answer_key;
mod blocks;
mod question;
mod structured;

use tracing::{debug, trace};

use crate::models::{letter_index, QuizQuestion};

pub(crate) use answer_key::AnswerKeyEntry;

/// A question together with the ordinal of the block it came from, so an
/// answer key can find it.
#[derive(Debug, Clone)]
pub(crate) struct ParsedQuestion {
    pub ordinal: usize,
    pub question: QuizQuestion,
}

/// Parse pasted quiz text into normalized questions.
///
/// Empty or whitespace-only input yields an empty list.
pub fn parse(raw: &str) -> Vec<QuizQuestion> {
    let text = normalize_newlines(raw);
    if text.trim().is_empty() {
        return Vec::new();
    }

    let (body, key) = answer_key::extract(&text);
    if !key.is_empty() {
        debug!(entries = key.len(), "found answer key");
    }

    let mut parsed = parse_body(body);
    apply_answer_key(&mut parsed, &key);

    debug!(questions = parsed.len(), "parsed quiz text");
    parsed.into_iter().map(|p| p.question).collect()
}

fn parse_body(body: &str) -> Vec<ParsedQuestion> {
    if structured::detect(body) {
        let parsed = structured::parse(body);
        if !parsed.is_empty() {
            debug!(questions = parsed.len(), "used structured format");
            return parsed;
        }
        debug!("structured markers found but nothing parsed; falling back to heuristics");
    }

    let blocks = blocks::split(body);
    debug!(blocks = blocks.len(), "split body into question blocks");

    blocks
        .into_iter()
        .filter_map(|block| match question::parse_block(block.text) {
            Some(question) => Some(ParsedQuestion {
                ordinal: block.ordinal,
                question,
            }),
            None => {
                trace!(ordinal = block.ordinal, "discarded block without question text");
                None
            }
        })
        .collect()
}

/// Answer key entries win over anything parsed from the block itself.
fn apply_answer_key(parsed: &mut [ParsedQuestion], key: &[AnswerKeyEntry]) {
    for entry in key {
        for item in parsed.iter_mut().filter(|p| p.ordinal == entry.ordinal) {
            item.question.set_correct_index(entry.index);
        }
    }
}

fn normalize_newlines(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

/// Interpret a `Correct:` value: `True`/`Yes` is the first option,
/// `False`/`No` the second, and a single letter its position.
pub(crate) fn correct_value_index(value: &str) -> Option<usize> {
    let value = value.trim();
    match value.to_lowercase().as_str() {
        "true" | "yes" => return Some(0),
        "false" | "no" => return Some(1),
        _ => {}
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if matches!(letter.to_ascii_uppercase(), 'A'..='F') => {
            letter_index(letter)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;
    use rstest::rstest;

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("  \n\r\n\t ").is_empty());
    }

    #[test]
    fn test_multi_line_options() {
        let questions = parse("1. What color is the sky?\nA. Red\nB. Blue\nC. Green");
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.kind, QuestionKind::MultipleChoice);
        assert_eq!(q.text, "What color is the sky?");
        assert_eq!(q.options, vec!["Red", "Blue", "Green"]);
        assert_eq!(q.correct_index, 0);
    }

    #[test]
    fn test_inline_options_with_answer_key() {
        let questions = parse("1. Pick one. A. X B. Y C. Z\n\nAnswer Key\n1. C");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Pick one.");
        assert_eq!(questions[0].options, vec!["X", "Y", "Z"]);
        assert_eq!(questions[0].correct_index, 2);
    }

    #[test]
    fn test_structured_short_answer() {
        let questions = parse("Type: SA\nQ: Name the capital of France.\nAnswer: Paris");
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.kind, QuestionKind::ShortAnswer);
        assert_eq!(q.text, "Name the capital of France.");
        assert_eq!(q.sample_answer, "Paris");
        assert!(q.options.is_empty());
    }

    #[test]
    fn test_garbage_degrades_to_placeholder_question() {
        let questions = parse("???###");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].kind, QuestionKind::MultipleChoice);
        assert_eq!(questions[0].text, "???###");
        assert_eq!(questions[0].options, vec!["", ""]);
        assert_eq!(questions[0].correct_index, 0);
    }

    #[test]
    fn test_windows_line_endings() {
        let questions = parse("1. What color is the sky?\r\nA. Red\r\nB. Blue\r\n\r\n2) Pick\rA) x\rB) y");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].options, vec!["Red", "Blue"]);
        assert_eq!(questions[1].text, "Pick");
        assert_eq!(questions[1].options, vec!["x", "y"]);
    }

    #[test]
    fn test_answer_key_overrides_inline_correct() {
        let input = "1. Q one\nA. a\nB. b\nCorrect: B\n\nAnswer Key:\n1. A";
        let questions = parse(input);
        assert_eq!(questions[0].correct_index, 0);
    }

    #[test]
    fn test_answer_key_is_clamped() {
        let input = "1. Q one A. a B. b\n2. Q two A. c B. d\nAnswer key\n1) F\n2. b\nnot an entry";
        let questions = parse(input);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_index, 1);
        assert_eq!(questions[1].correct_index, 1);
    }

    #[test]
    fn test_answer_key_skips_missing_ordinals() {
        let input = "1. First A. a B. b\n2. Second A. c B. d\n\nANSWER KEY\n2. B";
        let questions = parse(input);
        assert_eq!(questions[0].correct_index, 0);
        assert_eq!(questions[1].correct_index, 1);
    }

    #[test]
    fn test_answer_key_applies_to_structured_blocks() {
        let input = "Type: MC\nQ: One\nA: x\nB: y\n\nType: MC\nQ: Two\nA: x\nB: y\n\nAnswer Key\n2. B";
        let questions = parse(input);
        assert_eq!(questions[0].correct_index, 0);
        assert_eq!(questions[1].correct_index, 1);
    }

    #[test]
    fn test_blank_line_fallback_numbers_chunks() {
        let input = "Which is a fruit? A. Apple B. Rock\n\n\n\nWhich is a metal? A. Wood B. Iron\n\nAnswer Key\n2. B";
        let questions = parse(input);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_index, 0);
        assert_eq!(questions[1].text, "Which is a metal?");
        assert_eq!(questions[1].correct_index, 1);
    }

    #[test]
    fn test_structured_falls_back_to_heuristics() {
        // A `Type:` line without any `Q:` line yields nothing structured.
        let questions = parse("Type: TF\nThe earth is flat.\nCorrect: False");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].kind, QuestionKind::TrueFalse);
        assert_eq!(questions[0].text, "The earth is flat.");
        assert_eq!(questions[0].correct_index, 1);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let input = "1. A? A. x B. y\n2. B?\nA) p\nB) q\nCorrect: B";
        assert_eq!(parse(input), parse(input));
    }

    #[rstest]
    #[case("true", Some(0))]
    #[case(" Yes ", Some(0))]
    #[case("FALSE", Some(1))]
    #[case("no", Some(1))]
    #[case("c", Some(2))]
    #[case("F", Some(5))]
    #[case("G", None)]
    #[case("Paris", None)]
    #[case("", None)]
    fn test_correct_value_index(#[case] value: &str, #[case] expected: Option<usize>) {
        assert_eq!(correct_value_index(value), expected);
    }
}
