//! Question records as the dashboard stores them.
//!
//! The lesson record keeps its quiz as JSON. Early records were written by
//! the first quiz builder as `{ "question", "options", "correct" }` with no
//! type field; later ones carry `type` and a sample answer. [`normalize`] is
//! the single place those shapes become [`QuizQuestion`]s.

use serde::Deserialize;

use crate::models::{QuestionKind, QuizQuestion};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredQuestion {
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
    #[serde(default, alias = "question")]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default, alias = "correct")]
    pub correct_index: Option<usize>,
    #[serde(default, alias = "answer")]
    pub sample_answer: Option<String>,
}

/// Turn a stored record into a question.
///
/// A missing or unknown type means short answer when the record has a
/// sample answer and multiple choice otherwise. Records without question
/// text are dropped.
pub fn normalize(record: StoredQuestion) -> Option<QuizQuestion> {
    let text = record.text.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return None;
    }

    let sample_answer = record.sample_answer.unwrap_or_default();
    let kind = record
        .kind
        .as_deref()
        .and_then(QuestionKind::from_code)
        .unwrap_or(if sample_answer.trim().is_empty() {
            QuestionKind::MultipleChoice
        } else {
            QuestionKind::ShortAnswer
        });
    let correct = record.correct_index.unwrap_or(0);

    let question = match kind {
        QuestionKind::MultipleChoice => {
            QuizQuestion::multiple_choice(text, record.options.unwrap_or_default(), correct)
        }
        QuestionKind::TrueFalse => QuizQuestion::true_false(text, correct),
        QuestionKind::YesNo => QuizQuestion::yes_no(text, correct),
        QuestionKind::ShortAnswer => QuizQuestion::short_answer(text, sample_answer.trim()),
    };

    Some(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> StoredQuestion {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_legacy_builder_record() {
        let q = normalize(record(r#"{"question":"Pick","options":["a","b","","d"],"correct":3}"#)).unwrap();
        assert_eq!(q.kind, QuestionKind::MultipleChoice);
        assert_eq!(q.text, "Pick");
        assert_eq!(q.options, vec!["a", "b", "", "d"]);
        assert_eq!(q.correct_index, 3);
    }

    #[test]
    fn test_untyped_record_with_answer_is_short_answer() {
        let q = normalize(record(r#"{"question":"Capital?","answer":"Paris"}"#)).unwrap();
        assert_eq!(q, QuizQuestion::short_answer("Capital?", "Paris"));
    }

    #[test]
    fn test_typed_record() {
        let q = normalize(record(r#"{"type":"TF","text":"Hot?","correctIndex":1}"#)).unwrap();
        assert_eq!(q, QuizQuestion::true_false("Hot?", 1));

        let q = normalize(record(r#"{"type":"SA","text":"Why?","sampleAnswer":"Because"}"#)).unwrap();
        assert_eq!(q.sample_answer, "Because");
    }

    #[test]
    fn test_out_of_range_correct_is_clamped() {
        let q = normalize(record(r#"{"question":"Pick","options":["a","b"],"correct":9}"#)).unwrap();
        assert_eq!(q.correct_index, 1);
    }

    #[test]
    fn test_record_without_text_is_dropped() {
        assert_eq!(normalize(record(r#"{"options":["a","b"]}"#)), None);
        assert_eq!(normalize(record(r#"{"question":"   "}"#)), None);
    }
}
