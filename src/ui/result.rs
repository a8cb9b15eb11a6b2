use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::view::ResultView;

use super::{render_controls, theme_color};

const TROPHY_COLOR: Color = Color::Rgb(0xff, 0xe0, 0x45);
const CALENDAR_COLOR: Color = Color::Rgb(0xff, 0x7e, 0x38);

pub fn render(frame: &mut Frame, area: Rect, result: &ResultView<'_>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(6),  // Score
        Constraint::Length(7),  // Call to action
        Constraint::Length(3),  // Restart
        Constraint::Fill(1),
        Constraint::Length(1),  // Controls
    ])
    .horizontal_margin(6)
    .split(area);

    render_score(frame, chunks[1], result);
    render_call_to_action(frame, chunks[2], result);
    render_restart(frame, chunks[3]);
    render_controls(frame, chunks[5], "r restart  ·  q quit");
}

fn render_score(frame: &mut Frame, area: Rect, result: &ResultView<'_>) {
    let content = vec![
        Line::from(Span::styled("★", Style::default().fg(TROPHY_COLOR).bold())),
        Line::from(""),
        Line::from(Span::styled(
            result.headline(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("You scored ", Style::default().fg(Color::Gray)),
            Span::styled(result.score.to_string(), Style::default().fg(Color::White).bold()),
            Span::styled(format!(" / {}", result.total), Style::default().fg(Color::Gray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_call_to_action(frame: &mut Frame, area: Rect, result: &ResultView<'_>) {
    let highlight = theme_color(&result.quiz.theme.primary);
    let content = vec![
        Line::from(Span::styled(
            "NEXT SESSION",
            Style::default().fg(CALENDAR_COLOR).bold(),
        )),
        Line::from(Span::styled(
            result.event_date(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            result.call_to_action(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            result.description(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(highlight))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_restart(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Line::from(vec![
        Span::styled("Take Quiz Again", Style::default().fg(Color::White).bold()),
        Span::styled("  [r]", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(widget, area);
}
