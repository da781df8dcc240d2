//! TUI rendering with ratatui
//!
//! Draws the guess grid, the paged keyboard and the status line from the
//! controller's latest render update.

use super::app::App;
use crate::core::Classification;
use crate::grid::Cell;
use crate::scores::ScoreSink;
use crate::session::{ControlKind, ControlView, KeyColor, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: ScoreSink>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Grid
            Constraint::Length(6),  // Keyboard
            Constraint::Length(4),  // Status
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE ARCADE")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_grid<S: ScoreSink>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let mut lines = Vec::new();
    for row in app.update.grid.rows() {
        let mut spans = Vec::new();
        for cell in row {
            spans.push(cell_span(*cell));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Grid ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Some((letter, classification)) => {
            let label = format!(" {} ", letter.to_ascii_uppercase() as char);
            Span::styled(
                label,
                Style::default()
                    .fg(Color::White)
                    .bg(classification_color(classification))
                    .add_modifier(Modifier::BOLD),
            )
        }
        None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
    }
}

fn classification_color(classification: Classification) -> Color {
    match classification {
        Classification::Correct => Color::Green,
        Classification::Present => Color::Yellow,
        Classification::Absent => Color::DarkGray,
        Classification::Empty => Color::Gray,
    }
}

fn render_keyboard<S: ScoreSink>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let letters: Vec<&ControlView> = app
        .update
        .layout
        .iter()
        .filter(|c| c.kind == ControlKind::Letter)
        .collect();
    let actions: Vec<&ControlView> = app
        .update
        .layout
        .iter()
        .filter(|c| c.kind != ControlKind::Letter)
        .collect();

    let mut lines = Vec::new();

    let mut letter_spans = Vec::new();
    for control in &letters {
        letter_spans.push(control_span(control));
        letter_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(letter_spans).alignment(Alignment::Center));
    lines.push(Line::default());

    let mut action_spans = Vec::new();
    for control in &actions {
        action_spans.push(control_span(control));
        action_spans.push(Span::raw("  "));
    }
    lines.push(Line::from(action_spans).alignment(Alignment::Center));

    let title = match app.controller.phase() {
        Phase::Menu => " Menu ",
        _ => " Keyboard ",
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn control_span(control: &ControlView) -> Span<'static> {
    let mut style = Style::default().fg(Color::White);

    style = match control.color {
        KeyColor::Correct => style.bg(Color::Green),
        KeyColor::Present => style.bg(Color::Yellow),
        KeyColor::Absent => style.bg(Color::DarkGray),
        KeyColor::Default => style,
    };

    if control.enabled {
        style = style.add_modifier(Modifier::BOLD);
    } else {
        style = style.add_modifier(Modifier::DIM);
    }

    Span::styled(format!("[{}]", control.label), style)
}

fn render_status<S: ScoreSink>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let hint = match app.controller.phase() {
        Phase::Menu => "Enter: start  Esc: cancel",
        Phase::Playing => "a-z: type  Enter: submit  Backspace: clear  ←/→: page  Esc: cancel",
        Phase::Won | Phase::Lost | Phase::Cancelled => "Press any key to exit",
    };

    let mut lines: Vec<Line> = app
        .update
        .text
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}
