use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use super::stored::{normalize, StoredQuestion};
use crate::models::QuizQuestion;

/// Error loading or writing stored question JSON.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The content is not a JSON list of question records.
    Json(serde_json::Error),
    /// The content parsed but held no usable questions.
    Empty,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "{}", e),
            LoadError::Json(e) => write!(f, "invalid question JSON: {}", e),
            LoadError::Empty => write!(f, "no questions found"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
            LoadError::Empty => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err)
    }
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuizQuestion>, LoadError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path)?;
    let questions = parse_stored_json(&json_content)?;

    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    info!(path = %path.display(), questions = questions.len(), "loaded stored questions");
    Ok(questions)
}

/// Parse a stored quiz field: a JSON array of records, or a JSON string
/// holding that array (the field is sometimes encoded twice).
pub fn parse_stored_json(content: &str) -> Result<Vec<QuizQuestion>, LoadError> {
    let mut value: Value = serde_json::from_str(content)?;
    if let Value::String(inner) = value {
        debug!("stored quiz is a JSON string; decoding again");
        value = serde_json::from_str(&inner)?;
    }

    let records: Vec<StoredQuestion> = serde_json::from_value(value)?;
    let total = records.len();
    let questions: Vec<QuizQuestion> = records.into_iter().filter_map(normalize).collect();

    if questions.len() < total {
        debug!(dropped = total - questions.len(), "dropped records without question text");
    }
    Ok(questions)
}

/// Encode questions in the current stored shape.
pub fn to_stored_json(questions: &[QuizQuestion], pretty: bool) -> Result<String, LoadError> {
    let json = if pretty {
        serde_json::to_string_pretty(questions)?
    } else {
        serde_json::to_string(questions)?
    };
    Ok(json)
}
