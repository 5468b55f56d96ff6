use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("?", "Toggle this help"),
            ("q", "Quit application"),
            ("Tab", "Switch between skips and filters"),
        ],
    ),
    (
        "Skips",
        &[
            ("↑/k ↓/j", "Move between skips"),
            ("g/G", "Jump to first/last skip"),
            ("Enter", "Select skip"),
            ("c", "Continue with selected skip"),
        ],
    ),
    (
        "Filters",
        &[
            ("↑/↓", "Choose filter"),
            ("←/h →/l", "Lower/raise price, or toggle"),
            ("PgUp/PgDn", "Move price by ten steps"),
            ("Space", "Toggle checkbox"),
        ],
    ),
];

pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let mut help_text = vec![Line::from("")];
    for (title, keys) in SECTIONS {
        help_text.push(Line::from(Span::styled(
            format!("  {title}"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for (key, action) in keys.iter() {
            help_text.push(Line::from(vec![
                Span::styled(format!("    {key:<12}"), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ]));
        }
        help_text.push(Line::from(""));
    }

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help: Keybindings ")
                .title_bottom(Line::from(" Press any key to close ").style(Style::default().fg(Color::DarkGray))),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}

/// Create a centered rectangle using percentage of parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
