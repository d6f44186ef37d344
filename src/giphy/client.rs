// Giphy API HTTP client.
// Handles API key injection and request/response processing.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{GifgridError, Result};

const GIPHY_API_BASE: &str = "https://api.giphy.com/v1";

/// Giphy API client. The API key is appended to every request.
#[derive(Clone)]
pub struct GiphyClient {
    client: Client,
    api_key: String,
}

impl GiphyClient {
    /// Create a new Giphy client with the given API key.
    pub fn new(api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("gifgrid-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GifgridError::Api)?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    /// Create a client from the GIPHY_API_KEY environment variable.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var("GIPHY_API_KEY").map_err(|_| GifgridError::MissingApiKey)?;
        Self::new(&key)
    }

    /// Make a GET request with query parameters. The API key is added
    /// alongside the caller's params.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", GIPHY_API_BASE, endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(GifgridError::Api)?;

        self.check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GifgridError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(GifgridError::NotFound(url))
            }
            StatusCode::TOO_MANY_REQUESTS => Err(GifgridError::RateLimited),
            status => Err(GifgridError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}
