use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(14, 20, 18);
pub const SURFACE: Color = Color::Rgb(20, 30, 27);
pub const BORDER: Color = Color::Rgb(38, 58, 52);
pub const TEXT: Color = Color::Rgb(212, 226, 220);
pub const TEXT_DIM: Color = Color::Rgb(110, 132, 124);
pub const EMERALD: Color = Color::Rgb(52, 168, 124);
pub const TEAL: Color = Color::Rgb(64, 152, 150);
pub const AMBER: Color = Color::Rgb(214, 158, 70);
pub const RED: Color = Color::Rgb(186, 86, 70);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn emerald() -> Style {
    Style::default().fg(EMERALD)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}
