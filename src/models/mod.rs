mod question;

pub use question::{
    clamp_index, letter_index, option_letter, QuestionKind, QuizQuestion, MAX_OPTIONS,
    MIN_OPTIONS, TRUE_FALSE_OPTIONS, YES_NO_OPTIONS,
};

/// Screen the preview is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
