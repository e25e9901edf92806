use crate::models::{AppState, QuizQuestion};

pub struct App {
    pub state: AppState,
    questions: Vec<QuizQuestion>,
    current_question_index: usize,
    selected_option: usize,
    answers: Vec<Option<usize>>,
    reveal_answers: bool,
    revealed: bool,
    result_scroll: usize,
}

impl App {
    pub fn with_questions(questions: Vec<QuizQuestion>) -> Self {
        let num_questions = questions.len();

        Self {
            state: AppState::Welcome,
            questions,
            current_question_index: 0,
            selected_option: 0,
            answers: vec![None; num_questions],
            reveal_answers: true,
            revealed: false,
            result_scroll: 0,
        }
    }

    /// Whether the correct answer is shown after each submission.
    pub fn set_reveal_answers(&mut self, reveal: bool) {
        self.reveal_answers = reveal;
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Questions that can be scored; short answers are not.
    pub fn scored_questions(&self) -> usize {
        self.questions.iter().filter(|q| q.is_choice()).count()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 && !self.revealed {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 && !self.revealed {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn start_quiz(&mut self) {
        self.state = if self.questions.is_empty() {
            AppState::Result
        } else {
            AppState::Quiz
        };
    }

    /// Record the selection, then either reveal the answer or move on.
    /// While an answer is revealed this only moves on.
    pub fn submit_answer(&mut self) {
        if self.revealed {
            self.advance();
            return;
        }

        let Some(question) = self.current_question() else {
            return;
        };
        let answer = question.is_choice().then_some(self.selected_option);
        let show_answer = self.reveal_answers || !question.is_choice();
        self.answers[self.current_question_index] = answer;

        if show_answer {
            self.revealed = true;
        } else {
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.revealed = false;
        self.current_question_index += 1;
        self.selected_option = 0;

        if self.current_question_index >= self.questions.len() {
            self.state = AppState::Result;
        }
    }

    pub fn calculate_score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| question.is_choice() && **answer == Some(question.correct_index))
            .count()
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.questions.len() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.current_question_index = 0;
        self.selected_option = 0;
        self.revealed = false;
        self.result_scroll = 0;
        self.answers = vec![None; self.questions.len()];
    }
}
