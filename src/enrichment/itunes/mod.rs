//! iTunes Search API integration
//!
//! Used for high-resolution artwork and the primary genre.
//! API docs: https://performance-partners.apple.com/search-api

mod adapter;
mod client;
pub mod dto;

pub use adapter::{to_track, upscale_artwork};
pub use client::{DEFAULT_BASE_URL, ItunesClient};
