use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{option_letter, QuestionKind, QuizQuestion};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app, question.kind);
    render_question_text(frame, chunks[1], &question.text);

    if question.is_choice() {
        render_options(frame, chunks[2], question, app.selected_option(), app.is_revealed());
    } else {
        render_sample_answer(frame, chunks[2], question, app.is_revealed());
    }

    render_controls(frame, chunks[3], app.is_revealed());
}

fn kind_label(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::MultipleChoice => "multiple choice",
        QuestionKind::TrueFalse => "true / false",
        QuestionKind::YesNo => "yes / no",
        QuestionKind::ShortAnswer => "short answer",
    }
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, kind: QuestionKind) {
    let progress = format!(
        "{}  ·  {}/{}",
        kind_label(kind),
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_style(index: usize, question: &QuizQuestion, selected: usize, revealed: bool) -> Style {
    if revealed && index == question.correct_index {
        Style::default().fg(Color::Green).bold()
    } else if revealed && index == selected {
        Style::default().fg(Color::Red).bold()
    } else if index == selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &QuizQuestion,
    selected: usize,
    revealed: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let style = option_style(index, question, selected, revealed);
        let marker = if index == selected { ">" } else { " " };
        let text = if option.is_empty() { "(empty)" } else { option.as_str() };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_letter(index)), style),
            Span::styled(text, style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_sample_answer(frame: &mut Frame, area: Rect, question: &QuizQuestion, revealed: bool) {
    let content = if !revealed {
        Line::from("Think of your answer, then press enter.".fg(Color::DarkGray))
    } else if question.sample_answer.is_empty() {
        Line::from("No sample answer.".fg(Color::DarkGray))
    } else {
        Line::from(Span::styled(
            question.sample_answer.as_str(),
            Style::default().fg(Color::Green),
        ))
    };

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title("sample answer")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, revealed: bool) {
    let hint = if revealed {
        "enter next  ·  q quit"
    } else {
        "j/k navigate  ·  enter select  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
