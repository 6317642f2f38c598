//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Fetch the next page of news.
    LoadMoreNews,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
    }
}

/// Handles keys while typing into the currency search box.
fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => state.pop_search_char(),
        KeyCode::Char(c) => state.push_search_char(c),
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }

        // Tab navigation. Digit shortcuts stay out of the converter tab,
        // where digits edit the amount.
        KeyCode::Tab => state.current_tab = state.current_tab.next(),
        KeyCode::BackTab => state.current_tab = state.current_tab.prev(),
        KeyCode::Char('1') if state.current_tab != Tab::Converter => {
            state.current_tab = Tab::Converter;
        }
        KeyCode::Char('2') if state.current_tab != Tab::Converter => {
            state.current_tab = Tab::Currencies;
        }
        KeyCode::Char('3') if state.current_tab != Tab::Converter => {
            state.current_tab = Tab::News;
        }

        _ => {
            return match state.current_tab {
                Tab::Converter => handle_converter_key(state, key),
                Tab::Currencies => handle_currencies_key(state, key),
                Tab::News => handle_news_key(state, key),
            };
        }
    }
    KeyAction::None
}

fn handle_converter_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char(c @ ('0'..='9' | '.')) => state.push_amount_char(c),
        KeyCode::Backspace => state.pop_amount_char(),
        KeyCode::Char('f') | KeyCode::Char('F') => state.cycle_from(),
        KeyCode::Char('t') | KeyCode::Char('T') => state.cycle_to(),
        _ => {}
    }
    KeyAction::None
}

fn handle_currencies_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('/') => state.input_mode = InputMode::Search,
        KeyCode::Char('s') | KeyCode::Char('S') => state.cycle_sort(),
        KeyCode::Left | KeyCode::Char('p') => {
            state.table.prev_page();
        }
        KeyCode::Right | KeyCode::Char('n') => {
            state.table.next_page();
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_news_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.news_selected = state.news_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = state.feed.len();
            if state.news_selected + 1 < len {
                state.news_selected += 1;
            }
            // Nearing the end of the list is the scroll threshold that
            // requests the next page.
            if state.feed.has_more() && state.news_selected + 2 >= len {
                return KeyAction::LoadMoreNews;
            }
        }
        _ => {}
    }
    KeyAction::None
}
