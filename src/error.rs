// Error types for the gifgrid application.
// Covers Giphy API errors, storage errors, and general application errors.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GifgridError {
    #[error("Giphy API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or missing API key")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Missing GIPHY_API_KEY environment variable")]
    MissingApiKey,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GifgridError>;
