//! # quiz-import
//!
//! Turns pasted quiz text into structured questions and back.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_import::{export, parse, QuestionKind};
//!
//! let questions = parse("1. What color is the sky?\nA. Red\nB. Blue\n\nAnswer Key\n1. B");
//! assert_eq!(questions.len(), 1);
//! assert_eq!(questions[0].kind, QuestionKind::MultipleChoice);
//! assert_eq!(questions[0].correct_index, 1);
//!
//! // Exported text parses back to the same questions.
//! assert_eq!(parse(&export(&questions)), questions);
//! ```
//!
//! Stored question JSON, including records from the first quiz builder that
//! have no type field, is read through [`parse_stored_json`] and
//! [`load_questions_from_json`].

mod app;
pub mod config;
mod data;
pub mod export;
pub mod import;
pub mod models;
pub mod telemetry;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use config::{Config, ConfigError};
pub use data::{
    load_questions_from_json, normalize, parse_stored_json, to_stored_json, LoadError,
    StoredQuestion,
};
pub use export::export;
pub use import::parse;
pub use models::{AppState, QuestionKind, QuizQuestion};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading or writing question JSON.
    Load(LoadError),
    /// Error reading the configuration.
    Config(ConfigError),
    /// IO error during input, output or the preview.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Config(e) => write!(f, "Configuration error: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Config(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<ConfigError> for QuizError {
    fn from(err: ConfigError) -> Self {
        QuizError::Config(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A question list that can be previewed in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Parse pasted quiz text.
    pub fn from_text(raw: &str) -> Self {
        Self::new(parse(raw))
    }

    /// Load stored question JSON from a file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions))
    }

    /// Apply the `[preview]` settings.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.app.set_reveal_answers(config.preview.reveal_answers);
        self
    }

    /// Run the preview in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut session = terminal::TerminalSession::enter()?;
        run_event_loop(session.terminal(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::PreviewTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the preview should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return true;
    }

    match (app.state, key) {
        (AppState::Welcome, KeyCode::Enter) => app.start_quiz(),
        (AppState::Quiz, KeyCode::Up | KeyCode::Char('k')) => app.select_previous_option(),
        (AppState::Quiz, KeyCode::Down | KeyCode::Char('j')) => app.select_next_option(),
        (AppState::Quiz, KeyCode::Enter | KeyCode::Char(' ')) => app.submit_answer(),
        (AppState::Result, KeyCode::Down | KeyCode::Char('j')) => app.scroll_results_down(),
        (AppState::Result, KeyCode::Up | KeyCode::Char('k')) => app.scroll_results_up(),
        (AppState::Result, KeyCode::Char('r') | KeyCode::Char('R')) => app.restart(),
        _ => {}
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_input_flow() {
        let mut quiz = Quiz::from_text("1. Pick A. x B. y\n\nAnswer Key\n1. B");
        let app = quiz.app_mut();
        assert!(!handle_input(app, KeyCode::Char('j')));
        assert_eq!(app.state, AppState::Welcome);

        handle_input(app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Quiz);
        handle_input(app, KeyCode::Char('j'));
        handle_input(app, KeyCode::Enter);
        handle_input(app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.calculate_score(), 1);

        handle_input(app, KeyCode::Char('r'));
        assert_eq!(app.state, AppState::Welcome);
        assert!(handle_input(app, KeyCode::Char('q')));
    }

    #[test]
    fn test_config_disables_reveal() {
        let config = Config::from_toml("[preview]\nreveal_answers = false").unwrap();
        let mut quiz = Quiz::from_text("1. Pick A. x B. y").with_config(&config);
        let app = quiz.app_mut();
        app.start_quiz();
        app.submit_answer();
        assert_eq!(app.state, AppState::Result);
    }

    #[test]
    fn test_error_display() {
        let err = QuizError::from(LoadError::Empty);
        assert_eq!(err.to_string(), "Failed to load questions: no questions found");
    }
}
