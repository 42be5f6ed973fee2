//! Deezer API integration
//!
//! Deezer's public search needs no API key and is our source for structural
//! metadata: ISRC, track/disc position, album title and artist pictures.
//!
//! API docs: https://developers.deezer.com/api/search

mod adapter;
mod client;
pub mod dto;

pub use adapter::to_track;
pub use client::{DEFAULT_BASE_URL, DeezerClient};
