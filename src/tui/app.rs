use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::config::AppConfig;
use crate::models::Location;
use crate::prayer_times::CountdownScheduler;
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{header, location as location_card, next_prayer, prayers, statusbar};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

pub struct App {
    pub config: AppConfig,
    pub view: View,
    pub should_quit: bool,

    // Timekeeping state, replaced wholesale on every tick/refresh
    pub scheduler: CountdownScheduler,
    pub clock: String,
    pub date_line: String,
    pub advisory: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, location: Location, advisory: Option<String>) -> Self {
        let now = config.local_now();
        let mut scheduler = CountdownScheduler::new(location);
        scheduler.refresh(now);

        App {
            view: View::Dashboard,
            should_quit: false,
            scheduler,
            clock: now.format("%H:%M:%S").to_string(),
            date_line: now.format("%A, %b %d, %Y").to_string(),
            advisory,
            config,
        }
    }

    /// 1 Hz tick: refresh the displayed clock and drive the countdown.
    pub fn tick(&mut self) {
        let now = self.config.local_now();
        self.clock = now.format("%H:%M:%S").to_string();
        self.date_line = now.format("%A, %b %d, %Y").to_string();
        self.scheduler.tick(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('r') => {
                let now = self.config.local_now();
                self.scheduler.refresh(now);
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], &self.date_line, &self.clock);
        statusbar::render(frame, outer_chunks[2]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(outer_chunks[1]);

        // Left column: the five prayers
        prayers::render(frame, columns[0], self.scheduler.prayers());

        // Right column: countdown + location
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // next prayer
                Constraint::Min(0),    // location
            ])
            .split(columns[1]);

        next_prayer::render(
            frame,
            right_chunks[0],
            self.scheduler.next(),
            self.scheduler.countdown(),
        );
        location_card::render(
            frame,
            right_chunks[1],
            self.scheduler.location(),
            self.advisory.as_deref(),
        );
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::emerald().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [r]    ", theme::emerald()),
                Span::styled("Recompute prayer times", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]    ", theme::emerald()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc]  ", theme::emerald()),
                Span::styled("Quit", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::emerald()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::emerald())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop. The 1-second tick drives the countdown; the
/// terminal is restored on exit so the interval thread cannot outlive the
/// view.
pub fn run(config: AppConfig, location: Location, advisory: Option<String>) -> Result<()> {
    let mut app = App::new(config, location, advisory);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(Duration::from_secs(1));

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.tick();
            }
        }
    }

    ratatui::restore();
    Ok(())
}
