// Gif state store.
// Owns trending pagination, the search history cache, and the
// persist-on-mutation hook that keeps the history snapshot durable.

use std::collections::HashMap;

use crate::error::Result;
use crate::storage::Storage;

use super::mapper;
use super::source::GifSource;
use super::types::Gif;

/// Items requested per trending or search fetch.
pub const PAGE_SIZE: u32 = 20;

/// Display groups GIFs in rows of this many.
pub const GROUP_SIZE: usize = 3;

/// Storage key holding the serialized search history.
pub const HISTORY_KEY: &str = "search_history";

/// Parameters for a trending page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingRequest {
    pub limit: u32,
    pub offset: u32,
}

/// In-memory state for trending GIFs and the persisted search history.
///
/// All mutations happen on the owning task; a trending fetch is guarded
/// against overlap by a loading flag. Searches carry no such guard: if two
/// searches for the same normalized query are in flight, whichever resolves
/// last wins that history slot.
pub struct GifStore<P: Storage> {
    trending: Vec<Gif>,
    trending_page: u32,
    trending_loading: bool,
    search_history: HashMap<String, Vec<Gif>>,
    last_error: Option<String>,
    storage: P,
}

impl<P: Storage> GifStore<P> {
    /// Create a store, hydrating the search history from storage.
    /// Absent or unparseable snapshots hydrate as an empty history.
    pub fn new(storage: P) -> Self {
        let search_history = storage
            .read(HISTORY_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self {
            trending: Vec::new(),
            trending_page: 0,
            trending_loading: false,
            search_history,
            last_error: None,
            storage,
        }
    }

    // --- Trending ---

    /// Start a trending page load. Returns the request to issue, or None if
    /// a load is already in flight (the call is then a no-op).
    pub fn begin_trending_load(&mut self) -> Option<TrendingRequest> {
        if self.trending_loading {
            return None;
        }
        self.trending_loading = true;
        Some(TrendingRequest {
            limit: PAGE_SIZE,
            offset: self.trending_page * PAGE_SIZE,
        })
    }

    /// Apply the outcome of a trending fetch. Success appends the page in
    /// arrival order (no de-duplication across pages) and advances the
    /// cursor; failure leaves the list and cursor untouched so the next
    /// load retries the same page. The loading flag clears either way.
    pub fn finish_trending_load(&mut self, result: Result<Vec<Gif>>) {
        self.trending_loading = false;
        match result {
            Ok(gifs) => {
                self.trending.extend(gifs);
                self.trending_page += 1;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    /// Fetch the next trending page from the source. No-op while a previous
    /// load is still in flight.
    pub async fn load_trending_gifs<S: GifSource>(&mut self, source: &S) {
        let Some(request) = self.begin_trending_load() else {
            return;
        };
        let result = source
            .fetch_trending(request.limit, request.offset)
            .await
            .map(mapper::map_items);
        self.finish_trending_load(result);
    }

    pub fn trending(&self) -> &[Gif] {
        &self.trending
    }

    pub fn trending_page(&self) -> u32 {
        self.trending_page
    }

    pub fn is_trending_loading(&self) -> bool {
        self.trending_loading
    }

    /// Trending list grouped for display in rows of three. Recomputed from
    /// the canonical list on every call; the final group may be shorter.
    pub fn trending_groups(&self) -> Vec<&[Gif]> {
        self.trending.chunks(GROUP_SIZE).collect()
    }

    // --- Search ---

    /// Search the source and cache the results under the lowercased query.
    /// Returns the mapped results so the caller can render them without
    /// going back through the history cache.
    pub async fn search_gifs<S: GifSource>(
        &mut self,
        source: &S,
        query: &str,
    ) -> Result<Vec<Gif>> {
        match source.fetch_search(query, PAGE_SIZE).await {
            Ok(items) => {
                let gifs = mapper::map_items(items);
                self.record_search(query, gifs.clone());
                Ok(gifs)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Insert or overwrite the history entry for a query and persist the
    /// whole snapshot. Keys are always the lowercased form of the query.
    pub fn record_search(&mut self, query: &str, gifs: Vec<Gif>) {
        self.search_history.insert(query.to_lowercase(), gifs);
        self.last_error = None;
        self.persist_history();
    }

    /// Exact-key lookup into the search history. Misses are empty, not
    /// errors.
    pub fn history_gifs(&self, query: &str) -> &[Gif] {
        self.search_history
            .get(query)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keys of the search history, for menu rendering. Order unspecified.
    pub fn history_keys(&self) -> Vec<&str> {
        self.search_history.keys().map(String::as_str).collect()
    }

    pub fn history_len(&self) -> usize {
        self.search_history.len()
    }

    // --- Errors ---

    /// Most recent request or persistence failure, for the status bar.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Record a failure observed outside the store (e.g. a spawned fetch
    /// task) so it surfaces in the status bar.
    pub fn note_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Serialize the full history map and write it through the storage
    /// port. Failures are recorded, never propagated.
    fn persist_history(&mut self) {
        match serde_json::to_string(&self.search_history) {
            Ok(json) => {
                if let Err(e) = self.storage.write(HISTORY_KEY, &json) {
                    self.last_error = Some(e.to_string());
                }
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }
}
