// Giphy API endpoint functions.
// Provides typed methods for fetching data from the Giphy REST API.

use crate::error::Result;

use super::client::GiphyClient;
use super::types::{GiphyItem, GiphyResponse};

impl GiphyClient {
    /// Get a page of trending GIFs.
    pub async fn get_trending(&self, limit: u32, offset: u32) -> Result<Vec<GiphyItem>> {
        let params = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        let response = self.get_with_params("/gifs/trending", &params).await?;
        let wrapper: GiphyResponse = response.json().await?;
        Ok(wrapper.data)
    }

    /// Search GIFs by free-text query.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<GiphyItem>> {
        let params = [("q", query.to_string()), ("limit", limit.to_string())];
        let response = self.get_with_params("/gifs/search", &params).await?;
        let wrapper: GiphyResponse = response.json().await?;
        Ok(wrapper.data)
    }
}
