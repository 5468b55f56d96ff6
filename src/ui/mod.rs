mod catalog;
mod filters;
mod help;
mod progress;
mod summary;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Width of the filter sidebar.
const SIDEBAR_WIDTH: u16 = 32;
/// Height of the selection summary panel.
const SUMMARY_HEIGHT: u16 = 12;

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Layout: progress(3) + title(3) + body(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    progress::render(frame, chunks[0]);

    if app.loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::NONE));
        let middle = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Length(1),
                Constraint::Percentage(45),
            ])
            .split(chunks[2]);
        frame.render_widget(loading, middle[1]);
        render_status(app, frame, chunks[3]);
        return;
    }

    // ── Title ──
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            " Choose Your Skip Size",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Select the skip size that best suits your needs",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(title, chunks[1]);

    // ── Body: filters | catalog (+ summary) ──
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[2]);

    filters::render(app, frame, body[0]);

    if let Some(selected) = app.selection.current() {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(SUMMARY_HEIGHT)])
            .split(body[1]);
        catalog::render(app, frame, right[0]);
        summary::render(selected, frame, right[1]);
    } else {
        catalog::render(app, frame, body[1]);
    }

    render_status(app, frame, chunks[3]);

    // Render help overlay on top if active
    if app.show_help {
        help::render(frame);
    }
}

fn render_status(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut spans = vec![
        Span::styled(" ↑↓", key),
        Span::raw(" Navigate  "),
        Span::styled("Tab", key),
        Span::raw(" Filters  "),
        Span::styled("Enter", key),
        Span::raw(" Select  "),
    ];
    if app.selection.current().is_some() {
        spans.push(Span::styled("c", key));
        spans.push(Span::raw(" Continue  "));
    }
    spans.extend([
        Span::styled("?", key),
        Span::raw(" Help  "),
        Span::styled("q", key),
        Span::raw(" Quit  "),
        Span::styled(app.status_msg.as_str(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Truncate a string to `max_width` terminal columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if unicode_width::UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push('…');
    result
}
