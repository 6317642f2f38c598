//! UI-agnostic view state.
//!
//! The table model here owns the filtered/sorted/paginated view of the
//! currency list. The TUI (or any other frontend) renders whatever
//! [`table::CurrencyTable::visible_slice`] reports; it never reaches into the
//! model's internals.

mod table;

pub use table::{CurrencyTable, SortDirection, SortField, VisibleSlice, ITEMS_PER_PAGE};
