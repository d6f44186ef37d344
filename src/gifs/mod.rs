// Gif domain module.
// Normalized records, the raw-to-normalized mapper, the remote source
// abstraction, and the state store.

#![allow(dead_code, unused_imports)]

pub mod mapper;
pub mod source;
pub mod store;
pub mod types;

pub use source::GifSource;
pub use store::{GROUP_SIZE, GifStore, HISTORY_KEY, PAGE_SIZE, TrendingRequest};
pub use types::Gif;
