use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, date_line: &str, clock: &str) {
    let title_line = Line::from(vec![
        Span::styled("  إيمان  ", theme::emerald().add_modifier(Modifier::BOLD)),
        Span::styled("emaan", theme::emerald()),
    ]);

    let date_clock = Line::from(vec![
        Span::styled(date_line, theme::dim()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(clock, theme::amber().add_modifier(Modifier::BOLD)),
    ]);

    let text = vec![title_line, Line::from(""), date_clock];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::emerald().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
