//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::feed::NewsSource;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    state: AppState,
    source: Box<dyn NewsSource>,
    should_quit: bool,
}

impl App {
    /// Creates a new App over prepared state and a news source.
    pub fn new(state: AppState, source: Box<dyn NewsSource>) -> Self {
        Self {
            state,
            source,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Prime the feed so the news tab is populated on first render.
        self.load_more_news();
        info!("Started fintrack TUI");

        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => {}
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::LoadMoreNews => self.load_more_news(),
                    KeyAction::None => {}
                },
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Fetches the next news page and surfaces any fetch error in the footer.
    fn load_more_news(&mut self) {
        if !self.state.feed.has_more() {
            return;
        }
        self.state.feed.load_more(self.source.as_mut());
        self.state.status_message = self
            .state
            .feed
            .last_error()
            .map(|e| format!("news: {}", e));
    }
}
