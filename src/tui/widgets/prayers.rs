use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::models::{PrayerStatus, PrayerTime};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, prayers: &[PrayerTime]) {
    let block = Block::default()
        .title(Span::styled(" Today ", theme::emerald()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let items: Vec<ListItem> = prayers
        .iter()
        .map(|prayer| {
            let (icon, icon_style) = match prayer.status {
                PrayerStatus::Completed => ("●", theme::dim()),
                PrayerStatus::Current => ("◉", theme::amber()),
                PrayerStatus::Upcoming => ("○", theme::teal()),
            };

            let name_style = if prayer.next {
                theme::amber().add_modifier(Modifier::BOLD)
            } else if prayer.status == PrayerStatus::Completed {
                theme::dim()
            } else {
                theme::bold()
            };

            let trailer = if prayer.next { "  next" } else { "" };

            let line = Line::from(vec![
                Span::styled(format!("  {:<8}", prayer.name.display_name()), name_style),
                Span::styled(format!("{:<7}", prayer.time), theme::dim()),
                Span::styled(icon, icon_style),
                Span::styled(trailer, theme::amber()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
