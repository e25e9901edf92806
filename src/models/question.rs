use serde::{Deserialize, Serialize};

/// Maximum number of options a multiple-choice question keeps (A through F).
pub const MAX_OPTIONS: usize = 6;

/// Minimum number of options a multiple-choice question carries.
pub const MIN_OPTIONS: usize = 2;

pub const TRUE_FALSE_OPTIONS: [&str; 2] = ["True", "False"];
pub const YES_NO_OPTIONS: [&str; 2] = ["Yes", "No"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "MC")]
    MultipleChoice,
    #[serde(rename = "TF")]
    TrueFalse,
    #[serde(rename = "YN")]
    YesNo,
    #[serde(rename = "SA")]
    ShortAnswer,
}

impl QuestionKind {
    /// Two-letter code used by the `Type:` line.
    pub fn code(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "MC",
            QuestionKind::TrueFalse => "TF",
            QuestionKind::YesNo => "YN",
            QuestionKind::ShortAnswer => "SA",
        }
    }

    /// Parse a kind from its code or a long spelling such as `true/false`.
    pub fn from_code(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "mc" | "multiple choice" | "multiplechoice" | "multiple-choice" => {
                Some(QuestionKind::MultipleChoice)
            }
            "tf" | "true/false" | "truefalse" | "true-false" => Some(QuestionKind::TrueFalse),
            "yn" | "yes/no" | "yesno" | "yes-no" => Some(QuestionKind::YesNo),
            "sa" | "short answer" | "shortanswer" | "short-answer" => {
                Some(QuestionKind::ShortAnswer)
            }
            _ => None,
        }
    }

    pub fn is_choice(self) -> bool {
        !matches!(self, QuestionKind::ShortAnswer)
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One normalized quiz question.
///
/// Build values through the kind-specific constructors; they keep
/// `correct_index` inside the option range and give true/false and yes/no
/// questions their fixed options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_index: usize,
    #[serde(default)]
    pub sample_answer: String,
}

impl QuizQuestion {
    /// A multiple-choice question. Missing options are padded with empty
    /// placeholders up to two; anything past the sixth option is dropped.
    pub fn multiple_choice(text: impl Into<String>, mut options: Vec<String>, correct: usize) -> Self {
        options.truncate(MAX_OPTIONS);
        while options.len() < MIN_OPTIONS {
            options.push(String::new());
        }

        let mut question = Self {
            kind: QuestionKind::MultipleChoice,
            text: text.into(),
            options,
            correct_index: 0,
            sample_answer: String::new(),
        };
        question.set_correct_index(correct);
        question
    }

    pub fn true_false(text: impl Into<String>, correct: usize) -> Self {
        Self::fixed_choice(QuestionKind::TrueFalse, text.into(), TRUE_FALSE_OPTIONS, correct)
    }

    pub fn yes_no(text: impl Into<String>, correct: usize) -> Self {
        Self::fixed_choice(QuestionKind::YesNo, text.into(), YES_NO_OPTIONS, correct)
    }

    pub fn short_answer(text: impl Into<String>, sample_answer: impl Into<String>) -> Self {
        Self {
            kind: QuestionKind::ShortAnswer,
            text: text.into(),
            options: Vec::new(),
            correct_index: 0,
            sample_answer: sample_answer.into(),
        }
    }

    fn fixed_choice(kind: QuestionKind, text: String, options: [&str; 2], correct: usize) -> Self {
        let mut question = Self {
            kind,
            text,
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index: 0,
            sample_answer: String::new(),
        };
        question.set_correct_index(correct);
        question
    }

    /// Set the correct option, clamping to the last option when out of range.
    pub fn set_correct_index(&mut self, index: usize) {
        self.correct_index = clamp_index(index, self.options.len());
    }

    pub fn is_choice(&self) -> bool {
        self.kind.is_choice()
    }

    /// The text of the correct option, if this is a choice question.
    pub fn correct_option(&self) -> Option<&str> {
        if !self.is_choice() {
            return None;
        }
        self.options.get(self.correct_index).map(String::as_str)
    }
}

/// Clamp `index` into `[0, len - 1]`, flooring to 0 when there are no options.
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// Option letter for a zero-based position (`0` is `A`).
pub fn option_letter(index: usize) -> char {
    (b'A' + (index.min(25) as u8)) as char
}

/// Zero-based position for an option letter, case-insensitive.
pub fn letter_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some((upper as u8 - b'A') as usize)
    } else {
        None
    }
}
