// Remote GIF source abstraction.
// The store fetches through this trait so its logic is testable without
// touching the network. GiphyClient is the production implementation.

use crate::error::Result;
use crate::giphy::{GiphyClient, GiphyItem};

/// Read-only remote source of raw GIF items.
#[allow(async_fn_in_trait)]
pub trait GifSource {
    async fn fetch_trending(&self, limit: u32, offset: u32) -> Result<Vec<GiphyItem>>;
    async fn fetch_search(&self, query: &str, limit: u32) -> Result<Vec<GiphyItem>>;
}

impl GifSource for GiphyClient {
    async fn fetch_trending(&self, limit: u32, offset: u32) -> Result<Vec<GiphyItem>> {
        self.get_trending(limit, offset).await
    }

    async fn fetch_search(&self, query: &str, limit: u32) -> Result<Vec<GiphyItem>> {
        self.search(query, limit).await
    }
}
