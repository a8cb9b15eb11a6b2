mod confetti;
mod quiz;
mod result;
mod welcome;

use std::str::FromStr;
use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::view::View;

const FALLBACK_COLOR: Color = Color::Cyan;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.session().view() {
        View::Welcome { choices } => welcome::render(frame, area, app, &choices),
        View::Question(question) => quiz::render(frame, area, app, &question),
        View::Finished(result) => result::render(frame, area, &result),
    }

    confetti::render(frame, area, &app.session().feedback().sparks(now));
}

/// Terminal colour for a `#rrggbb` theme string.
fn theme_color(hex: &str) -> Color {
    Color::from_str(hex).unwrap_or(FALLBACK_COLOR)
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
