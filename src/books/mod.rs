pub mod client;
pub mod mapper;
pub mod source;
pub mod types;

pub use client::GoogleBooksClient;
pub use source::{BookSource, SearchError};
pub use types::{BookRecord, ImageLinks, SearchPage, SearchResponse, VolumeInfo};
