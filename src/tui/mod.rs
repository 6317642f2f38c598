//! Terminal user interface for the fintrack client.
//!
//! Tabbed frontend over the pure state in `view`, `convert` and `feed`:
//! a currency converter, the searchable/paginated rate table, and the
//! news feed.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;

pub use app::App;
pub use state::{AppState, InputMode, Tab};
