use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Booking steps shown across the top. Only skip selection is live.
pub const STEPS: [&str; 6] = [
    "Postcode",
    "Waste Type",
    "Select Skip",
    "Permit Check",
    "Choose Date",
    "Payment",
];

pub const CURRENT_STEP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Pending,
}

pub fn step_state(index: usize) -> StepState {
    match index.cmp(&CURRENT_STEP) {
        std::cmp::Ordering::Less => StepState::Done,
        std::cmp::Ordering::Equal => StepState::Current,
        std::cmp::Ordering::Greater => StepState::Pending,
    }
}

pub fn render(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, label) in STEPS.iter().enumerate() {
        let (marker, style) = match step_state(i) {
            StepState::Done => ("●", Style::default().fg(Color::Blue)),
            StepState::Current => (
                "◉",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            StepState::Pending => ("○", Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(format!("{marker} {label}"), style));
        if i + 1 < STEPS.len() {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
    }

    let strip = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(strip, area);
}
