use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::view::{OptionStatus, OptionView, QuestionView};

use super::{render_controls, theme_color};

const CORRECT_COLOR: Color = Color::Rgb(0x5c, 0xe1, 0xe6);
const WRONG_COLOR: Color = Color::Rgb(0xff, 0x7e, 0x38);

pub fn render(frame: &mut Frame, area: Rect, app: &App, question: &QuestionView<'_>) {
    let primary = theme_color(&question.quiz.theme.primary);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Quiz title
        Constraint::Length(1), // Progress
        Constraint::Length(1),
        Constraint::Min(12),   // Question card
        Constraint::Length(1), // Advance
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(question.quiz.title.as_str())
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(title, chunks[0]);

    render_progress(frame, chunks[1], question, primary);
    render_card(frame, chunks[3], app, question, primary);
    render_advance(frame, chunks[4], question);

    let controls = if question.answer_checked {
        "enter continue  ·  q quit"
    } else {
        "j/k choose  ·  enter or a-d answer  ·  q quit"
    };
    render_controls(frame, chunks[5], controls);
}

fn render_progress(frame: &mut Frame, area: Rect, question: &QuestionView<'_>, color: Color) {
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio(question.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(widget, area);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    question: &QuestionView<'_>,
    primary: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(primary))
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Caption
        Constraint::Length(4), // Prompt
        Constraint::Min(4),    // Options
        Constraint::Length(3), // Explanation
    ])
    .split(inner);

    let caption = Paragraph::new(format!("Question {} / {}", question.number, question.total))
        .fg(Color::DarkGray)
        .bold();
    frame.render_widget(caption, chunks[0]);

    let prompt = Paragraph::new(question.prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(prompt, chunks[1]);

    render_options(frame, chunks[2], question, app.option_cursor());

    if let Some(explanation) = question.explanation {
        let widget = Paragraph::new(explanation)
            .wrap(Wrap { trim: true })
            .fg(Color::Gray)
            .italic();
        frame.render_widget(widget, chunks[3]);
    }
}

fn render_options(frame: &mut Frame, area: Rect, question: &QuestionView<'_>, cursor: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let highlighted = !question.answer_checked && index == cursor;
        lines.push(option_line(option, question.answer_checked, highlighted));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_line<'a>(option: &OptionView<'a>, checked: bool, highlighted: bool) -> Line<'a> {
    let (style, mark) = match option.status {
        OptionStatus::SelectedCorrect | OptionStatus::RevealedCorrect => {
            (Style::default().fg(CORRECT_COLOR).bold(), " ✓")
        }
        OptionStatus::SelectedIncorrect => (Style::default().fg(WRONG_COLOR).bold(), " ✗"),
        OptionStatus::Unselected if checked => (Style::default().fg(Color::DarkGray), ""),
        OptionStatus::Unselected if highlighted => (Style::default().fg(Color::White).bold(), ""),
        OptionStatus::Unselected => (Style::default().fg(Color::Gray), ""),
    };
    let marker = if highlighted { ">" } else { " " };

    Line::from(vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled(format!("{}. ", option.label), style),
        Span::styled(option.text, style),
        Span::styled(mark, style),
    ])
}

fn render_advance(frame: &mut Frame, area: Rect, question: &QuestionView<'_>) {
    if !question.answer_checked {
        return;
    }

    let accent = theme_color(&question.quiz.theme.accent);
    let button = Line::from(Span::styled(
        format!("  {} ›  ", question.advance_label()),
        Style::default().fg(Color::White).bg(accent).bold(),
    ));
    frame.render_widget(Paragraph::new(button).alignment(Alignment::Right), area);
}
