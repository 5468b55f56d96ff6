use crate::app::{App, FilterField, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Width of the textual slider track.
const TRACK_WIDTH: usize = 20;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Filters;
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let mut lines = vec![
        Line::from(Span::styled(
            "Price Range",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for field in FilterField::ALL {
        let cursor = focused && app.filter_field == field;
        let style = if cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let pointer = if cursor { "▸ " } else { "  " };

        match field {
            FilterField::MinPrice | FilterField::MaxPrice => {
                let (name, value) = if field == FilterField::MinPrice {
                    ("Min Price", app.filters.min_price)
                } else {
                    ("Max Price", app.filters.max_price)
                };
                lines.push(Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(format!("{name}: £{value}"), style),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", slider_track(value, app.bounds.min_price, app.bounds.max_price)),
                    Style::default().fg(Color::Blue),
                )));
                lines.push(Line::from(""));
            }
            FilterField::RoadOnly | FilterField::HeavyWaste => {
                let (name, checked) = if field == FilterField::RoadOnly {
                    ("Road Placement Only", app.filters.show_road_only)
                } else {
                    ("Heavy Waste Compatible", app.filters.show_heavy_waste)
                };
                lines.push(Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(if checked { "[x] " } else { "[ ] " }, style),
                    Span::styled(name, style),
                ]));
            }
        }
    }

    if focused {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "←/→ adjust  Space toggle",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Filters "),
    );
    frame.render_widget(panel, area);
}

/// `[=====●------]` style track for a value inside `[min, max]`.
pub fn slider_track(value: f64, min: f64, max: f64) -> String {
    let span = (max - min).max(f64::EPSILON);
    let ratio = ((value - min) / span).clamp(0.0, 1.0);
    let knob = (ratio * (TRACK_WIDTH - 1) as f64).round() as usize;
    let mut track = String::with_capacity(TRACK_WIDTH + 2);
    track.push('[');
    for i in 0..TRACK_WIDTH {
        track.push(match i.cmp(&knob) {
            std::cmp::Ordering::Less => '=',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '-',
        });
    }
    track.push(']');
    track
}
