//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table};

use super::state::{AppState, InputMode, SORT_OPTIONS, Tab, sort_option_label};
use super::style::Styles;

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Main layout: header, content, footer
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_content(frame, chunks[1], state);
    render_footer(frame, chunks[2], state);
}

/// Renders the header bar: app name plus tab labels.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(" fintrack ", Styles::header())];
    for tab in Tab::all() {
        spans.push(Span::raw(" "));
        let style = if *tab == state.current_tab {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(format!("[{}]", tab.name()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders content based on the current tab.
fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    match state.current_tab {
        Tab::Converter => render_converter(frame, area, state),
        Tab::Currencies => render_currencies(frame, area, state),
        Tab::News => render_news(frame, area, state),
    }
}

fn render_converter(frame: &mut Frame, area: Rect, state: &AppState) {
    let from = state
        .codes
        .get(state.converter.from)
        .map(String::as_str)
        .unwrap_or("---");
    let to = state
        .codes
        .get(state.converter.to)
        .map(String::as_str)
        .unwrap_or("---");

    let result_line = match state.converter.result {
        Some(value) => Line::from(vec![
            Span::raw("Result: "),
            Span::styled(format!("{} {}", value, to), Styles::accent()),
        ]),
        None => Line::from(vec![
            Span::raw("Result: "),
            Span::styled("unavailable (unknown currency)", Styles::error()),
        ]),
    };

    let lines = vec![
        Line::from(format!("Amount: {}_", state.converter.amount_input)),
        Line::from(format!("From:   {}  (f to change)", from)),
        Line::from(format!("To:     {}  (t to change)", to)),
        Line::from(""),
        result_line,
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Currency converter");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_currencies(frame: &mut Frame, area: Rect, state: &AppState) {
    let slice = state.table.visible_slice();

    let filter_info = if state.table.query().is_empty() {
        String::new()
    } else {
        format!(" [filter: {}]", state.table.query())
    };
    let sort_info = state
        .sort_option
        .map(|i| format!(", sort: {}", sort_option_label(SORT_OPTIONS[i])))
        .unwrap_or_default();
    let title = format!(
        "Currencies ({} rows{}){}",
        state.table.filtered_len(),
        sort_info,
        filter_info,
    );

    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    let header = Row::new(vec![Cell::from("CODE"), Cell::from("RATE (USD)")])
        .style(Styles::header());
    let rows: Vec<Row> = slice
        .rows
        .iter()
        .map(|r| Row::new(vec![Cell::from(r.code.clone()), Cell::from(r.rate.to_string())]))
        .collect();

    let table = Table::new(rows, [Constraint::Length(8), Constraint::Min(10)])
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, chunks[0]);

    // Pager line: "Page X of Y" with prev/next hints dimmed when disabled.
    let prev_style = if slice.can_go_prev {
        Styles::default()
    } else {
        Styles::dim()
    };
    let next_style = if slice.can_go_next {
        Styles::default()
    } else {
        Styles::dim()
    };
    let pager = Line::from(vec![
        Span::styled("  ← prev [p]", prev_style),
        Span::raw(format!(
            "   Page {} of {}   ",
            slice.current_page, slice.total_pages
        )),
        Span::styled("next [n] →", next_style),
    ]);
    frame.render_widget(Paragraph::new(pager), chunks[1]);
}

fn render_news(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let mut items: Vec<ListItem> = state
        .feed
        .articles()
        .iter()
        .map(|article| {
            let title_style = if article.featured {
                Styles::featured()
            } else {
                Styles::default()
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled(article.title.clone(), title_style),
                    Span::styled(format!("  {}", article.date), Styles::dim()),
                ]),
                Line::from(Span::styled(article.content.clone(), Styles::dim())),
            ];
            ListItem::new(lines)
        })
        .collect();

    let tail = if state.feed.has_more() {
        "· scroll down to load more ·"
    } else {
        "· end of news ·"
    };
    items.push(ListItem::new(Line::from(Span::styled(tail, Styles::dim()))));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("News ({} articles)", state.feed.len()));
    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default();
    if !state.feed.is_empty() {
        list_state.select(Some(state.news_selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Renders the footer: search box or key hints, plus status message.
fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.input_mode == InputMode::Search {
        let line = Line::from(vec![
            Span::styled(" Search: ", Styles::header()),
            Span::raw(format!(" {}_", state.search_input)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints = match state.current_tab {
        Tab::Converter => " 0-9. amount | f/t currency | Tab switch | q quit",
        Tab::Currencies => " / search | s sort | p/n page | Tab switch | q quit",
        Tab::News => " j/k scroll | Tab switch | q quit",
    };
    let mut spans = vec![Span::styled(hints, Styles::dim())];
    if let Some(ref msg) = state.status_message {
        spans.push(Span::styled(format!("  {}", msg), Styles::error()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
