use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::models::Location;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, location: &Location, advisory: Option<&str>) {
    let block = Block::default()
        .title(Span::styled(" Location ", theme::emerald()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", theme::dim()),
            Span::styled(&location.city, theme::bold()),
            Span::styled(", ", theme::dim()),
            Span::styled(&location.country, theme::dim()),
        ]),
        Line::from(Span::styled(
            format!("  {:.4}, {:.4}", location.latitude, location.longitude),
            theme::dim(),
        )),
    ];

    if let Some(advisory) = advisory {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", advisory),
            theme::amber(),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
