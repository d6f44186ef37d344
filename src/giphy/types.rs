// Giphy API response types.
// Defines structs for deserializing Giphy REST API responses.
// Raw items exist only to feed the mapper; nothing here is retained in state.

use serde::Deserialize;

/// Top-level envelope for Giphy list responses.
#[derive(Debug, Deserialize)]
pub struct GiphyResponse {
    pub data: Vec<GiphyItem>,
    #[serde(default)]
    pub pagination: Option<GiphyPagination>,
    #[serde(default)]
    pub meta: Option<GiphyMeta>,
}

/// A single GIF as the Giphy API represents it.
#[derive(Debug, Clone, Deserialize)]
pub struct GiphyItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub images: GiphyImages,
}

/// Rendition variants for a GIF. Only the original rendition is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct GiphyImages {
    pub original: GiphyRendition,
}

/// One rendition of a GIF.
#[derive(Debug, Clone, Deserialize)]
pub struct GiphyRendition {
    pub url: String,
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GiphyPagination {
    #[serde(default)]
    pub total_count: u64,
    pub count: u64,
    pub offset: u64,
}

/// Response metadata (status echo).
#[derive(Debug, Clone, Deserialize)]
pub struct GiphyMeta {
    pub status: u16,
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_response() {
        let json = r#"{
            "data": [
                {
                    "id": "abc123",
                    "title": "Dancing Cat GIF",
                    "images": { "original": { "url": "https://media.giphy.com/abc123.gif" } }
                }
            ],
            "pagination": { "total_count": 5000, "count": 1, "offset": 20 },
            "meta": { "status": 200, "msg": "OK" }
        }"#;

        let response: GiphyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "abc123");
        assert_eq!(response.data[0].title, "Dancing Cat GIF");
        assert_eq!(
            response.data[0].images.original.url,
            "https://media.giphy.com/abc123.gif"
        );
        assert_eq!(response.pagination.unwrap().offset, 20);
        assert_eq!(response.meta.unwrap().status, 200);
    }

    #[test]
    fn test_deserialize_missing_title() {
        // Giphy occasionally omits titles; default to empty.
        let json = r#"{
            "data": [
                {
                    "id": "xyz",
                    "images": { "original": { "url": "https://media.giphy.com/xyz.gif" } }
                }
            ]
        }"#;

        let response: GiphyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data[0].title, "");
        assert!(response.pagination.is_none());
    }
}
