use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

use crate::search::SearchSession;
use crate::tui::grid::GridState;
use crate::tui::search::SearchBox;
use crate::tui::ui;
use crate::{catalog, logging, AppConfig};

pub struct App {
    // Data
    pub session: SearchSession,

    // Sub-states
    pub search: SearchBox,
    pub grid: GridState,

    pub status_message: String,
    pub base_origin: String,
    tick_rate: Duration,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    /// Load the catalog (once per screen lifetime) and set up the screen
    /// state. A failed load shows up here as an empty session, nothing else.
    pub fn new(config: AppConfig) -> Self {
        let records = catalog::load(&config.source);
        let status_message = if records.is_empty() {
            "No recipes".to_string()
        } else {
            format!("{} recipes loaded", records.len())
        };

        let session = SearchSession::new(records);
        let mut grid = GridState::default();
        grid.reset(session.visible_len());

        Self {
            session,
            search: SearchBox::default(),
            grid,
            status_message,
            base_origin: config.base_origin,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend<Error = std::io::Error>>) -> crate::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                if self.search.needs_search {
                    self.apply_search();
                    self.search.needs_search = false;
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Forward the edited query into the session and rederive the visible
    /// set; the grid selection resets to the first card.
    fn apply_search(&mut self) {
        self.session.set_query(self.search.query.clone());
        self.grid.reset(self.session.visible_len());
        self.status_message = format!(
            "{} of {} recipes",
            self.session.visible_len(),
            self.session.catalog_len()
        );
    }

    fn open_selected(&mut self) {
        let Some(n) = self.grid.selected else {
            return;
        };
        let Some(record) = self.session.visible_record(n) else {
            return;
        };

        if record.link.is_empty() {
            self.status_message = format!("'{}' has no recipe page", record.title);
            return;
        }

        let url = format!("{}{}", self.base_origin, record.link);
        match open::that(&url) {
            Ok(()) => {
                logging::info("OPEN", &format!("Opened '{}' -> {}", record.title, url));
                self.status_message = format!("Opened {}", url);
            }
            Err(e) => {
                logging::error("OPEN", &format!("Failed to open {}: {}", url, e));
                self.status_message = format!("Failed to open browser: {}", e);
            }
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.search.query.is_empty() {
                    self.search.clear();
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_grid_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.search.insert(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_home(),
            KeyCode::End => self.search.move_end(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        let total = self.session.visible_len();
        match key.code {
            KeyCode::Up => self.grid.select_up(total),
            KeyCode::Down | KeyCode::Char('j') => self.grid.select_down(total),
            KeyCode::Char('k') => self.grid.select_up(total),
            KeyCode::Left | KeyCode::Char('h') => self.grid.select_prev(total),
            KeyCode::Right | KeyCode::Char('l') => self.grid.select_next(total),
            KeyCode::PageUp => self.grid.page_up(total),
            KeyCode::PageDown => self.grid.page_down(total),
            KeyCode::Home => self.grid.select_first(total),
            KeyCode::End => self.grid.select_last(total),

            KeyCode::Enter => self.open_selected(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.move_end();
                self.search.insert(c);
            }

            _ => {}
        }
    }
}
