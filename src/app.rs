// App state and main event loop.
// Manages the two views, keyboard input, and background fetch tasks.

use std::io;
use std::time::Duration;

use chrono::{DateTime, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::error::GifgridError;
use crate::gifs::{Gif, GifStore, PAGE_SIZE, mapper};
use crate::giphy::GiphyClient;
use crate::storage::Storage;
use crate::ui;

/// Active view in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Trending,
    Search,
}

impl Tab {
    pub fn next(&self) -> Self {
        match self {
            Tab::Trending => Tab::Search,
            Tab::Search => Tab::Trending,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Trending => Tab::Search,
            Tab::Search => Tab::Trending,
        }
    }
}

/// Static navigation menu entry.
pub struct MenuOption {
    pub icon: &'static str,
    pub label: &'static str,
    pub sub_label: &'static str,
    pub tab: Tab,
}

/// The hardcoded two-entry navigation menu.
pub const MENU: [MenuOption; 2] = [
    MenuOption {
        icon: "📈",
        label: "Trending",
        sub_label: "Trending GIFs",
        tab: Tab::Trending,
    },
    MenuOption {
        icon: "🔍",
        label: "Search",
        sub_label: "Search GIFs",
        tab: Tab::Search,
    },
];

/// Completion message from a spawned fetch task.
pub enum FetchEvent {
    TrendingLoaded(Result<Vec<Gif>, GifgridError>),
    SearchCompleted {
        query: String,
        result: Result<Vec<Gif>, GifgridError>,
    },
}

/// Main application state.
pub struct App<P: Storage> {
    /// Gif state store (trending, search history, persistence).
    pub store: GifStore<P>,
    /// Giphy client, cloned into fetch tasks.
    client: GiphyClient,
    /// Currently active view.
    pub active_tab: Tab,
    /// First visible group row in the trending grid.
    pub trending_scroll: usize,
    /// Search input buffer.
    pub search_input: String,
    /// Results currently shown in the search view.
    pub search_results: Vec<Gif>,
    /// Query the shown results belong to, if any.
    pub shown_query: Option<String>,
    /// Number of searches still in flight.
    pub searches_pending: usize,
    /// Selected index into the (sorted) history key list.
    pub history_selected: Option<usize>,
    /// When trending last refreshed, for the status bar.
    pub last_refreshed: Option<DateTime<Utc>>,
    /// Whether the app should exit.
    pub should_quit: bool,
    tx: mpsc::UnboundedSender<FetchEvent>,
    rx: mpsc::UnboundedReceiver<FetchEvent>,
}

impl<P: Storage> App<P> {
    pub fn new(store: GifStore<P>, client: GiphyClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            store,
            client,
            active_tab: Tab::default(),
            trending_scroll: 0,
            search_input: String::new(),
            search_results: Vec::new(),
            shown_query: None,
            searches_pending: 0,
            history_selected: None,
            last_refreshed: None,
            should_quit: false,
            tx,
            rx,
        }
    }

    /// Main event loop: drain fetch completions, draw, handle input.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        // First trending page loads on startup.
        self.request_trending_load();

        while !self.should_quit {
            while let Ok(fetch) = self.rx.try_recv() {
                self.apply(fetch);
            }
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Apply a completed fetch to the store.
    fn apply(&mut self, fetch: FetchEvent) {
        match fetch {
            FetchEvent::TrendingLoaded(result) => {
                if result.is_ok() {
                    self.last_refreshed = Some(Utc::now());
                }
                self.store.finish_trending_load(result);
            }
            FetchEvent::SearchCompleted { query, result } => {
                self.searches_pending = self.searches_pending.saturating_sub(1);
                match result {
                    Ok(gifs) => {
                        // Last resolved search wins its history slot.
                        self.store.record_search(&query, gifs.clone());
                        self.search_results = gifs;
                        self.shown_query = Some(query.to_lowercase());
                        self.history_selected = None;
                    }
                    Err(e) => self.store.note_error(e.to_string()),
                }
            }
        }
    }

    /// Kick off the next trending page fetch unless one is in flight.
    fn request_trending_load(&mut self) {
        let Some(request) = self.store.begin_trending_load() else {
            return;
        };
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client
                .get_trending(request.limit, request.offset)
                .await
                .map(mapper::map_items);
            let _ = tx.send(FetchEvent::TrendingLoaded(result));
        });
    }

    /// Kick off a search for the current input. Concurrent searches are
    /// allowed; completions apply in resolution order.
    fn start_search(&mut self) {
        let query = self.search_input.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.searches_pending += 1;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.search(&query, PAGE_SIZE).await.map(mapper::map_items);
            let _ = tx.send(FetchEvent::SearchCompleted { query, result });
        });
    }

    /// History keys sorted for stable menu display.
    pub fn sorted_history_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .store
            .history_keys()
            .into_iter()
            .map(str::to_string)
            .collect();
        keys.sort();
        keys
    }

    /// Recall the selected history entry into the results pane.
    fn recall_selected_history(&mut self) {
        let keys = self.sorted_history_keys();
        if let Some(key) = self.history_selected.and_then(|i| keys.get(i)) {
            self.search_results = self.store.history_gifs(key).to_vec();
            self.shown_query = Some(key.clone());
            self.search_input = key.clone();
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match self.active_tab {
                        Tab::Trending => self.handle_trending_key(key.code),
                        Tab::Search => self.handle_search_key(key.code),
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_trending_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.active_tab = self.active_tab.next(),
            KeyCode::BackTab => self.active_tab = self.active_tab.prev(),
            KeyCode::Up => self.trending_scroll = self.trending_scroll.saturating_sub(1),
            KeyCode::Down => {
                let rows = self.store.trending_groups().len();
                if self.trending_scroll + 1 < rows {
                    self.trending_scroll += 1;
                }
                // Nearing the bottom pulls the next page in.
                if self.trending_scroll + 6 >= rows {
                    self.request_trending_load();
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => self.active_tab = self.active_tab.next(),
            KeyCode::BackTab => self.active_tab = self.active_tab.prev(),
            KeyCode::Esc => {
                self.search_input.clear();
                self.history_selected = None;
            }
            KeyCode::Enter => {
                if self.history_selected.is_some() {
                    self.recall_selected_history();
                } else {
                    self.start_search();
                }
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Up => {
                let len = self.store.history_len();
                if len > 0 {
                    self.history_selected = Some(match self.history_selected {
                        Some(0) | None => 0,
                        Some(i) => i - 1,
                    });
                }
            }
            KeyCode::Down => {
                let len = self.store.history_len();
                if len > 0 {
                    self.history_selected = Some(match self.history_selected {
                        None => 0,
                        Some(i) => (i + 1).min(len - 1),
                    });
                }
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.history_selected = None;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Trending.next(), Tab::Search);
        assert_eq!(Tab::Search.next(), Tab::Trending);
        assert_eq!(Tab::default(), Tab::Trending);
    }

    #[test]
    fn test_menu_entries() {
        assert_eq!(MENU.len(), 2);
        assert_eq!(MENU[0].label, "Trending");
        assert_eq!(MENU[0].sub_label, "Trending GIFs");
        assert_eq!(MENU[1].label, "Search");
        assert_eq!(MENU[1].sub_label, "Search GIFs");
    }
}
