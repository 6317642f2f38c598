//! Application state for the TUI.

use crate::convert::convert;
use crate::feed::NewsFeed;
use crate::rates::{CurrencyRow, RateBook};
use crate::view::{CurrencyTable, SortDirection, SortField};

/// Available tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Converter,
    Currencies,
    News,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Converter, Tab::Currencies, Tab::News]
    }

    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Converter => "CNV",
            Tab::Currencies => "CUR",
            Tab::News => "NWS",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Converter => Tab::Currencies,
            Tab::Currencies => Tab::News,
            Tab::News => Tab::Converter,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Converter => Tab::News,
            Tab::Currencies => Tab::Converter,
            Tab::News => Tab::Currencies,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the currency search box.
    Search,
}

/// Sort options offered on the currencies tab, cycled with `s`.
pub const SORT_OPTIONS: &[(SortField, SortDirection)] = &[
    (SortField::Code, SortDirection::Ascending),
    (SortField::Code, SortDirection::Descending),
    (SortField::Rate, SortDirection::Ascending),
    (SortField::Rate, SortDirection::Descending),
];

/// Short label for a sort option, shown in the table title.
pub fn sort_option_label(option: (SortField, SortDirection)) -> &'static str {
    match option {
        (SortField::Code, SortDirection::Ascending) => "code asc",
        (SortField::Code, SortDirection::Descending) => "code desc",
        (SortField::Rate, SortDirection::Ascending) => "rate asc",
        (SortField::Rate, SortDirection::Descending) => "rate desc",
    }
}

/// State for the converter tab.
#[derive(Debug, Default)]
pub struct ConverterState {
    /// Raw amount as typed (digits and at most one dot).
    pub amount_input: String,
    /// Index into the code list for the source currency.
    pub from: usize,
    /// Index into the code list for the target currency.
    pub to: usize,
    /// Last computed result, `None` when a code is unknown.
    pub result: Option<f64>,
}

impl ConverterState {
    /// Parses the typed amount; empty input counts as zero.
    pub fn amount(&self) -> f64 {
        if self.amount_input.is_empty() {
            0.0
        } else {
            self.amount_input.parse().unwrap_or(0.0)
        }
    }
}

/// Main application state.
pub struct AppState {
    pub current_tab: Tab,
    pub input_mode: InputMode,
    /// Currency table model (search, sort, pagination).
    pub table: CurrencyTable,
    /// Search text as typed, before trimming/lower-casing.
    pub search_input: String,
    /// Index into `SORT_OPTIONS` of the active sort, if any.
    pub sort_option: Option<usize>,
    pub converter: ConverterState,
    pub rate_book: RateBook,
    /// Currency codes in original row order, for converter cycling.
    pub codes: Vec<String>,
    pub feed: NewsFeed,
    /// Selected article index on the news tab.
    pub news_selected: usize,
    /// Temporary message shown in the footer.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(rows: Vec<CurrencyRow>) -> Self {
        let rate_book = RateBook::from_rows(&rows);
        let codes: Vec<String> = rows.iter().map(|r| r.code.clone()).collect();
        let mut state = Self {
            current_tab: Tab::default(),
            input_mode: InputMode::default(),
            table: CurrencyTable::new(rows),
            search_input: String::new(),
            sort_option: None,
            converter: ConverterState {
                amount_input: "1".to_string(),
                from: 0,
                to: if codes.len() > 1 { 1 } else { 0 },
                result: None,
            },
            rate_book,
            codes,
            feed: NewsFeed::new(),
            news_selected: 0,
            status_message: None,
        };
        state.recompute_conversion();
        state
    }

    /// Recomputes the converter result from the current inputs.
    pub fn recompute_conversion(&mut self) {
        let (Some(from), Some(to)) = (
            self.codes.get(self.converter.from),
            self.codes.get(self.converter.to),
        ) else {
            self.converter.result = None;
            return;
        };
        self.converter.result = convert(self.converter.amount(), from, to, &self.rate_book);
    }

    /// Cycles the converter source currency.
    pub fn cycle_from(&mut self) {
        if !self.codes.is_empty() {
            self.converter.from = (self.converter.from + 1) % self.codes.len();
            self.recompute_conversion();
        }
    }

    /// Cycles the converter target currency.
    pub fn cycle_to(&mut self) {
        if !self.codes.is_empty() {
            self.converter.to = (self.converter.to + 1) % self.codes.len();
            self.recompute_conversion();
        }
    }

    /// Appends a character to the amount if it keeps the input numeric.
    pub fn push_amount_char(&mut self, c: char) {
        let valid = c.is_ascii_digit() || (c == '.' && !self.converter.amount_input.contains('.'));
        if valid {
            self.converter.amount_input.push(c);
            self.recompute_conversion();
        }
    }

    pub fn pop_amount_char(&mut self) {
        self.converter.amount_input.pop();
        self.recompute_conversion();
    }

    /// Advances to the next sort option and applies it to the table.
    pub fn cycle_sort(&mut self) {
        let idx = match self.sort_option {
            Some(i) => (i + 1) % SORT_OPTIONS.len(),
            None => 0,
        };
        self.sort_option = Some(idx);
        let (field, direction) = SORT_OPTIONS[idx];
        self.table.sort(field, direction);
    }

    /// Appends a character to the search box and re-filters immediately,
    /// mirroring an input-as-you-type search field.
    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.apply_search();
    }

    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
        self.apply_search();
    }

    fn apply_search(&mut self) {
        // Filtering rebuilds the view in original order, so the sort
        // indicator no longer describes it.
        self.sort_option = None;
        self.table.search(&self.search_input);
    }
}
