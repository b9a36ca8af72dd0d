use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::prayer_times::NextPrayer;
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    next: Option<&NextPrayer>,
    countdown: Option<&str>,
) {
    let block = Block::default()
        .title(Span::styled(" Next Prayer ", theme::emerald()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let content: Vec<Line> = match next {
        None => vec![
            Line::from(""),
            Line::from(Span::styled("  No data yet", theme::dim())),
        ],
        Some(next) => {
            let name = next.name.display_name().to_uppercase();
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", name),
                    theme::emerald().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(format!("  at {}", next.time), theme::dim())),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  in  ", theme::dim()),
                    Span::styled(
                        countdown.unwrap_or("—").to_string(),
                        theme::amber().add_modifier(Modifier::BOLD),
                    ),
                ]),
            ]
        }
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
