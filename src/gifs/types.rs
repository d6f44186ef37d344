// Normalized GIF record.
// The shape the rest of the application (and the persisted history) works with.

use serde::{Deserialize, Serialize};

/// A single GIF, normalized from the Giphy wire format.
/// Created once by the mapper and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gif {
    pub id: String,
    pub title: String,
    pub url: String,
}
