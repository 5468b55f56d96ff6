use crate::catalog::{SkipOption, format_gbp, total_price, vat_amount};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const DISCLAIMER: &str = "Imagery and information shown throughout this website may not \
reflect the exact shape or size specification, colours may vary, options and/or accessories \
may be featured at additional cost.";

/// Price breakdown for the chosen skip, with the (inert) Continue button.
pub fn render(option: &SkipOption, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Your Selection ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(inner);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} Yard Skip", option.size),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                " Continue ",
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" (c)", label),
        ]),
        Line::from(Span::styled(
            format!("Hire Period: {} days", option.hire_period_days),
            label,
        )),
        Line::from(vec![
            Span::styled(format!("{:<16}", "Base Price"), label),
            Span::styled(format_gbp(option.price_before_vat), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<16}", format!("VAT ({}%)", option.vat)), label),
            Span::styled(format_gbp(vat_amount(option)), value),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{:<16}", "Total Price"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_gbp(total_price(option)),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), rows[0]);

    let disclaimer = Paragraph::new(DISCLAIMER)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(disclaimer, rows[1]);
}
