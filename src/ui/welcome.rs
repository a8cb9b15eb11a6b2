use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::view::AudienceChoice;

use super::{render_controls, theme_color};

const CARD_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, app: &App, choices: &[AudienceChoice]) {
    let mut constraints = vec![Constraint::Fill(1), Constraint::Length(6)];
    constraints.extend(choices.iter().map(|_| Constraint::Length(CARD_HEIGHT)));
    constraints.extend([Constraint::Fill(1), Constraint::Length(1)]);

    let chunks = Layout::vertical(constraints)
        .horizontal_margin(4)
        .split(area);

    render_headline(frame, chunks[1]);

    for (index, choice) in choices.iter().enumerate() {
        let highlighted = index == app.audience_cursor();
        let color = theme_color(&app.session().catalog().quiz(choice.audience).theme.primary);
        render_choice(frame, chunks[2 + index], index, choice, highlighted, color);
    }

    render_controls(
        frame,
        chunks[chunks.len() - 1],
        "j/k choose  ·  enter start  ·  1/2 quick start  ·  q quit",
    );
}

fn render_headline(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled("Test Your", Style::default().fg(Color::White).bold())),
        Line::from(vec![
            Span::styled("AI ", Style::default().fg(Color::Rgb(0x5c, 0xe1, 0xe6)).bold()),
            Span::styled("Knowledge", Style::default().fg(Color::Rgb(0xff, 0x7e, 0x38)).bold()),
        ]),
        Line::from(""),
        Line::from("Select your experience level to begin the challenge.".fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_choice(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    choice: &AudienceChoice,
    highlighted: bool,
    color: Color,
) {
    let (border, marker) = if highlighted {
        (Style::default().fg(color).bold(), "›")
    } else {
        (Style::default().fg(Color::DarkGray), " ")
    };

    let content = vec![
        Line::from(vec![
            Span::styled(format!("{} {}  ", marker, index + 1), border),
            Span::styled(choice.title, Style::default().fg(Color::White).bold()),
        ]),
        Line::from(Span::styled(
            format!("     {}", choice.tagline),
            Style::default().fg(Color::Gray),
        )),
    ];

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
