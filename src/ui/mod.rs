// UI module for rendering the TUI.
// Contains the menu bar, trending grid, search view, and status bar.

mod list;
mod menu;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, MENU, Tab};
use crate::storage::Storage;

/// Main draw function that renders the entire UI.
pub fn draw<P: Storage>(frame: &mut Frame, app: &mut App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Menu bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    menu::draw_menu(frame, app.active_tab, chunks[0]);

    match app.active_tab {
        Tab::Trending => draw_trending_tab(frame, app, chunks[1]),
        Tab::Search => draw_search_tab(frame, app, chunks[1]),
    }

    draw_status_bar(frame, app, chunks[2]);
}

/// Draw the Trending tab: the grouped grid plus pagination state.
fn draw_trending_tab<P: Storage>(frame: &mut Frame, app: &App<P>, area: Rect) {
    let groups = app.store.trending_groups();
    list::render_trending(
        frame,
        area,
        &groups,
        app.trending_scroll,
        app.store.is_trending_loading(),
        app.store.trending_page(),
    );
}

/// Draw the Search tab: history menu, input line, and results.
fn draw_search_tab<P: Storage>(frame: &mut Frame, app: &App<P>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(1)])
        .split(area);

    let keys = app.sorted_history_keys();
    list::render_history_keys(frame, columns[0], &keys, app.history_selected);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(columns[1]);

    list::render_search_input(frame, rows[0], &app.search_input, app.searches_pending);

    let title = match &app.shown_query {
        Some(query) => format!(" Results: {} ", query),
        None => " Results ".to_string(),
    };
    list::render_gif_list(frame, rows[1], &app.search_results, &title);
}

/// Draw the status bar with key hints, refresh time, and last error.
fn draw_status_bar<P: Storage>(frame: &mut Frame, app: &App<P>, area: Rect) {
    if let Some(error) = app.store.last_error() {
        let text = Paragraph::new(format!(" ❌ {}", error))
            .style(Style::default().fg(Color::Red).bg(Color::Black));
        frame.render_widget(text, area);
        return;
    }

    let hints = match app.active_tab {
        Tab::Trending => " ↑/↓ scroll · Tab switch · q quit",
        Tab::Search => " type + Enter search · ↑/↓ history · Esc clear · Tab switch",
    };

    let sub_label = MENU
        .iter()
        .find(|option| option.tab == app.active_tab)
        .map(|option| option.sub_label)
        .unwrap_or_default();

    let refreshed = match &app.last_refreshed {
        Some(at) => format!("refreshed {} ", at.format("%H:%M:%S")),
        None => String::new(),
    };

    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(sub_label, Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(refreshed, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
