// Local storage module.
// Persists the search history snapshot between sessions.

#![allow(dead_code, unused_imports)]

pub mod paths;
pub mod store;

pub use paths::data_dir;
pub use store::{FileStorage, MemoryStorage, Storage};
