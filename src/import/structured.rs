//! The line-prefixed `Type:` / `Q:` / `Correct:` / `Answer:` format.
//!
//! ```text
//! Type: MC
//! Q: What color is the sky?
//! A: Red
//! B: Blue
//! Correct: B
//!
//! Type: SA
//! Q: Name the capital of France.
//! Answer: Paris
//! ```
//!
//! Blocks are separated by blank lines. Within a block the prefixed lines
//! may come in any order; unprefixed lines are ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use super::blocks::split_paragraphs;
use super::{correct_value_index, ParsedQuestion};
use crate::models::{QuestionKind, QuizQuestion};

static STRUCTURED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*(?:type|q)[ \t]*:").unwrap());

static TYPE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^type\s*:\s*(.*)$").unwrap());
static QUESTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^q\s*:\s*(.*)$").unwrap());
static CORRECT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^correct(?:\s+answer)?\s*:\s*(.*)$").unwrap());
static ANSWER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:sample\s+)?answer\s*:\s*(.*)$").unwrap());
static OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-f])[.:)]\s*(.*)$").unwrap());

/// Whether any line starts with `Type:` or `Q:`.
pub(crate) fn detect(body: &str) -> bool {
    STRUCTURED_LINE.is_match(body)
}

/// Parse every blank-line separated block. Blocks are numbered by position
/// so an answer key can refer to them.
pub(crate) fn parse(body: &str) -> Vec<ParsedQuestion> {
    split_paragraphs(body)
        .into_iter()
        .enumerate()
        .filter_map(|(i, block)| {
            parse_block(block).map(|question| ParsedQuestion {
                ordinal: i + 1,
                question,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CorrectValue {
    Index(usize),
    Text(String),
}

#[derive(Debug, Default)]
struct Fields {
    kind: Option<QuestionKind>,
    text: Option<String>,
    options: Vec<String>,
    correct: Option<CorrectValue>,
    answer: Option<String>,
}

fn parse_block(block: &str) -> Option<QuizQuestion> {
    let fields = scan_fields(block);
    let text = fields.text.filter(|t| !t.is_empty())?;

    let correct_index = match &fields.correct {
        Some(CorrectValue::Index(index)) => *index,
        _ => 0,
    };

    let question = match fields.kind.unwrap_or(QuestionKind::MultipleChoice) {
        QuestionKind::TrueFalse => QuizQuestion::true_false(text, correct_index),
        QuestionKind::YesNo => QuizQuestion::yes_no(text, correct_index),
        QuestionKind::ShortAnswer => {
            let sample = fields.answer.or(match fields.correct {
                Some(CorrectValue::Text(value)) => Some(value),
                _ => None,
            });
            QuizQuestion::short_answer(text, sample.unwrap_or_default())
        }
        QuestionKind::MultipleChoice => {
            QuizQuestion::multiple_choice(text, fields.options, correct_index)
        }
    };

    Some(question)
}

fn scan_fields(block: &str) -> Fields {
    let mut fields = Fields::default();

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(caps) = TYPE_LINE.captures(line) {
            fields.kind = QuestionKind::from_code(&caps[1]);
        } else if let Some(caps) = QUESTION_LINE.captures(line) {
            fields.text = Some(caps[1].trim().to_string());
        } else if let Some(caps) = CORRECT_LINE.captures(line) {
            fields.correct = Some(parse_correct(caps[1].trim()));
        } else if let Some(caps) = ANSWER_LINE.captures(line) {
            fields.answer = Some(caps[1].trim().to_string());
        } else if let Some(caps) = OPTION_LINE.captures(line) {
            fields.options.push(caps[2].trim().to_string());
        }
    }

    fields
}

fn parse_correct(value: &str) -> CorrectValue {
    match correct_value_index(value) {
        Some(index) => CorrectValue::Index(index),
        None => CorrectValue::Text(value.to_string()),
    }
}
