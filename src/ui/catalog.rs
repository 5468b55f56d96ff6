use crate::app::{App, Focus};
use crate::catalog::{SkipArt, SkipOption, format_gbp, is_most_efficient, total_price, vat_amount};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// One card per visible skip, in catalog order.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .visible
        .iter()
        .map(|option| ListItem::new(card_lines(option, app.selection.is_selected(option), width)))
        .collect();

    let border = if app.focus == Focus::Catalog {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let count = format!(" {} of {} ", app.visible.len(), app.skips.len());

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Skips ")
                .title_bottom(Line::from(count).alignment(Alignment::Right)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(31, 41, 55)))
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    if !app.visible.is_empty() {
        state.select(Some(app.highlighted));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_lines(option: &SkipOption, selected: bool, width: usize) -> Vec<Line<'static>> {
    let title_style = if selected {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Gray);

    let mut title = vec![
        Span::styled(
            format!("{:<6} ", SkipArt::for_size(option.size).glyph()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(format!("{} Yard Skip", option.size), title_style),
    ];
    if selected {
        title.push(Span::styled("  ✓ selected", Style::default().fg(Color::Blue)));
    }
    if is_most_efficient(option) {
        title.push(Span::raw("  "));
        title.push(Span::styled(
            " Most Efficient ",
            Style::default().fg(Color::Green).bg(Color::Rgb(20, 83, 45)),
        ));
    }

    let mut badges = Vec::new();
    if option.allowed_on_road {
        badges.push(Span::styled(
            " Road Placement ",
            Style::default().fg(Color::LightBlue).bg(Color::Rgb(30, 58, 138)),
        ));
        badges.push(Span::raw(" "));
    }
    if option.allows_heavy_waste {
        badges.push(Span::styled(
            " Heavy Waste ",
            Style::default().fg(Color::LightMagenta).bg(Color::Rgb(88, 28, 135)),
        ));
    }

    let vat_label = format!("VAT ({}%)", option.vat);
    vec![
        Line::from(title),
        Line::from(Span::styled(
            super::truncate_str(&format!("Hire Period: {} days", option.hire_period_days), width),
            label,
        )),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Base Price"), label),
            Span::styled(format!("{:>10}", format_gbp(option.price_before_vat)), value),
            Span::styled(format!("   {:<10}", vat_label), label),
            Span::styled(format!("{:>10}", format_gbp(vat_amount(option))), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Total Price"), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:>10}", format_gbp(total_price(option))),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(badges),
        Line::from(""),
    ]
}
