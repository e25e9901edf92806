//! Serializing questions back to the line-prefixed text format.
//!
//! The output is what [`crate::import::parse`] reads as the structured
//! format, so `parse(&export(&questions))` gives `questions` back for
//! single-line, trimmed question and option text.

use crate::models::{option_letter, QuestionKind, QuizQuestion};

/// Render questions as `Type:` / `Q:` blocks separated by blank lines.
pub fn export(questions: &[QuizQuestion]) -> String {
    questions
        .iter()
        .map(export_question)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn export_question(question: &QuizQuestion) -> String {
    let mut lines = vec![
        format!("Type: {}", question.kind.code()),
        format!("Q: {}", question.text),
    ];

    match question.kind {
        QuestionKind::ShortAnswer => {
            lines.push(format!("Answer: {}", question.sample_answer));
        }
        QuestionKind::TrueFalse => {
            let value = if question.correct_index == 0 { "True" } else { "False" };
            lines.push(format!("Correct: {}", value));
        }
        QuestionKind::YesNo => {
            let value = if question.correct_index == 0 { "Yes" } else { "No" };
            lines.push(format!("Correct: {}", value));
        }
        QuestionKind::MultipleChoice => {
            for (index, option) in question.options.iter().enumerate() {
                lines.push(format!("{}: {}", option_letter(index), option));
            }
            lines.push(format!("Correct: {}", option_letter(question.correct_index)));
        }
    }

    // Empty values leave a trailing space after the colon.
    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
