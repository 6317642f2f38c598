//! Paginated currency table model: search, sort, page cursor.

use crate::rates::CurrencyRow;

/// Rows shown per page in the application.
pub const ITEMS_PER_PAGE: usize = 5;

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Code,
    Rate,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The current page of the filtered view, plus everything a frontend needs
/// to drive pager controls.
#[derive(Debug)]
pub struct VisibleSlice<'a> {
    pub rows: Vec<&'a CurrencyRow>,
    pub current_page: usize,
    pub total_pages: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

/// In-memory table state for the currency list.
///
/// Holds the source rows, the derived filtered/sorted view (as indices into
/// the source list), and the 1-based page cursor. All inputs are clamped to
/// safe values rather than rejected.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    rows: Vec<CurrencyRow>,
    /// Indices into `rows`, in filtered and sorted display order.
    filtered: Vec<usize>,
    query: String,
    current_page: usize,
    items_per_page: usize,
}

impl CurrencyTable {
    /// Creates a table over `rows` with the default page size.
    pub fn new(rows: Vec<CurrencyRow>) -> Self {
        Self::with_page_size(rows, ITEMS_PER_PAGE)
    }

    /// Creates a table with an explicit page size (clamped to at least 1).
    pub fn with_page_size(rows: Vec<CurrencyRow>, items_per_page: usize) -> Self {
        let mut table = Self {
            rows: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
        };
        table.load(rows);
        table
    }

    /// Replaces the source list, resets the view to the full list, page 1.
    pub fn load(&mut self, rows: Vec<CurrencyRow>) {
        self.rows = rows;
        self.query.clear();
        self.filtered = (0..self.rows.len()).collect();
        self.current_page = 1;
    }

    /// Filters rows whose code contains `query` (case-insensitive substring).
    ///
    /// The filtered view is rebuilt from the source list in original order,
    /// discarding any previous sort. Resets the page cursor to 1.
    pub fn search(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        let q = &self.query;
        self.filtered = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.code.to_lowercase().contains(q))
            .map(|(idx, _)| idx)
            .collect();
        self.current_page = 1;
    }

    /// Stable-sorts the filtered view in place; ties keep their prior
    /// relative order. Resets the page cursor to 1.
    pub fn sort(&mut self, field: SortField, direction: SortDirection) {
        let rows = &self.rows;
        self.filtered.sort_by(|&a, &b| {
            let cmp = match field {
                SortField::Code => rows[a].code.cmp(&rows[b].code),
                SortField::Rate => rows[a]
                    .rate
                    .partial_cmp(&rows[b].rate)
                    .unwrap_or(std::cmp::Ordering::Equal),
            };
            match direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
        self.current_page = 1;
    }

    /// Advances one page. Returns `false` (and leaves the cursor unchanged)
    /// when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Retreats one page. Returns `false` when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Total pages for the current filtered view, never less than 1.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.items_per_page).max(1)
    }

    /// Current 1-based page number.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Active search query (trimmed, lower-cased).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of rows in the filtered view.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Returns the current page of rows and pager info.
    pub fn visible_slice(&self) -> VisibleSlice<'_> {
        let total_pages = self.total_pages();
        // The cursor only moves through clamped operations, but a shrinking
        // filter can leave it past the end.
        let current_page = self.current_page.min(total_pages);
        let start = (current_page - 1) * self.items_per_page;
        let rows = self
            .filtered
            .iter()
            .skip(start)
            .take(self.items_per_page)
            .map(|&idx| &self.rows[idx])
            .collect();
        VisibleSlice {
            rows,
            current_page,
            total_pages,
            can_go_prev: current_page > 1,
            can_go_next: current_page < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, rate: f64) -> CurrencyRow {
        CurrencyRow {
            code: code.to_string(),
            rate,
        }
    }

    fn sample_rows() -> Vec<CurrencyRow> {
        vec![row("USD", 1.0), row("EUR", 0.9), row("EUR", 0.91)]
    }

    fn codes<'a>(slice: &'a VisibleSlice<'a>) -> Vec<&'a str> {
        slice.rows.iter().map(|r| r.code.as_str()).collect()
    }

    #[test]
    fn first_page_shows_page_sized_prefix() {
        let table = CurrencyTable::with_page_size(sample_rows(), 2);
        let slice = table.visible_slice();
        assert_eq!(codes(&slice), vec!["USD", "EUR"]);
        assert_eq!(slice.rows[1].rate, 0.9);
        assert_eq!(slice.total_pages, 2);
        assert!(!slice.can_go_prev);
        assert!(slice.can_go_next);
    }

    #[test]
    fn search_keeps_original_order_and_resets_page() {
        let mut table = CurrencyTable::with_page_size(sample_rows(), 2);
        table.next_page();
        table.search("eu");
        let slice = table.visible_slice();
        assert_eq!(codes(&slice), vec!["EUR", "EUR"]);
        assert_eq!(slice.rows[0].rate, 0.9);
        assert_eq!(slice.rows[1].rate, 0.91);
        assert_eq!(slice.current_page, 1);
        assert_eq!(slice.total_pages, 1);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let mut table = CurrencyTable::new(sample_rows());
        table.search("  Eu ");
        assert_eq!(table.filtered_len(), 2);
        assert_eq!(table.query(), "eu");
    }

    #[test]
    fn search_with_no_matches_yields_empty_single_page() {
        let mut table = CurrencyTable::new(sample_rows());
        table.search("xyz");
        let slice = table.visible_slice();
        assert!(slice.rows.is_empty());
        assert_eq!(slice.current_page, 1);
        assert_eq!(slice.total_pages, 1);
        assert!(!slice.can_go_prev);
        assert!(!slice.can_go_next);
    }

    #[test]
    fn sort_by_code_descending_keeps_equal_codes_in_prior_order() {
        let mut table = CurrencyTable::new(sample_rows());
        table.sort(SortField::Code, SortDirection::Descending);
        let slice = table.visible_slice();
        assert_eq!(codes(&slice), vec!["USD", "EUR", "EUR"]);
        // Stable: the two EUR rows keep their original relative order.
        assert_eq!(slice.rows[1].rate, 0.9);
        assert_eq!(slice.rows[2].rate, 0.91);
    }

    #[test]
    fn sort_by_rate_ascending_orders_numerically() {
        let mut table = CurrencyTable::new(vec![row("EUR", 0.91), row("EUR", 0.9)]);
        table.sort(SortField::Rate, SortDirection::Ascending);
        let slice = table.visible_slice();
        assert_eq!(slice.rows[0].rate, 0.9);
        assert_eq!(slice.rows[1].rate, 0.91);
    }

    #[test]
    fn sort_applies_to_filtered_view_and_resets_page() {
        let mut table = CurrencyTable::with_page_size(
            vec![row("USD", 1.0), row("GBP", 0.79), row("EUR", 0.9)],
            1,
        );
        table.search("u");
        table.next_page();
        assert_eq!(table.current_page(), 2);
        table.sort(SortField::Rate, SortDirection::Descending);
        assert_eq!(table.current_page(), 1);
        let slice = table.visible_slice();
        // Only USD and EUR match "u"; USD has the higher rate.
        assert_eq!(codes(&slice), vec!["USD"]);
        assert_eq!(slice.total_pages, 2);
    }

    #[test]
    fn page_cursor_is_clamped_at_both_ends() {
        let mut table = CurrencyTable::with_page_size(sample_rows(), 2);
        assert!(!table.prev_page());
        assert_eq!(table.current_page(), 1);
        assert!(table.next_page());
        assert_eq!(table.current_page(), 2);
        assert!(!table.next_page());
        assert_eq!(table.current_page(), 2);
        assert!(table.prev_page());
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn second_page_reports_pager_flags() {
        let mut table = CurrencyTable::with_page_size(sample_rows(), 2);
        table.next_page();
        let slice = table.visible_slice();
        assert_eq!(codes(&slice), vec!["EUR"]);
        assert_eq!(slice.current_page, 2);
        assert!(slice.can_go_prev);
        assert!(!slice.can_go_next);
    }

    #[test]
    fn load_replaces_rows_and_clears_filter() {
        let mut table = CurrencyTable::new(sample_rows());
        table.search("eu");
        table.next_page();
        table.load(vec![row("JPY", 147.3)]);
        assert_eq!(table.query(), "");
        assert_eq!(table.current_page(), 1);
        let slice = table.visible_slice();
        assert_eq!(codes(&slice), vec!["JPY"]);
    }

    #[test]
    fn empty_table_is_safe() {
        let mut table = CurrencyTable::new(Vec::new());
        let slice = table.visible_slice();
        assert!(slice.rows.is_empty());
        assert_eq!(slice.total_pages, 1);
        assert!(!table.next_page());
        assert!(!table.prev_page());
        table.sort(SortField::Rate, SortDirection::Ascending);
        table.search("");
        assert_eq!(table.visible_slice().total_pages, 1);
    }
}
