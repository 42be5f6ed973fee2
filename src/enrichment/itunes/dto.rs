//! iTunes Search API Data Transfer Objects
//!
//! These types match what `https://itunes.apple.com/search` returns.
//! DO NOT use these types outside the itunes module - convert to domain types.

use serde::{Deserialize, Serialize};

/// Search response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<Track>,
}

/// A song result (`entity=song`)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Always "track" for songs
    pub wrapper_type: Option<String>,
    pub track_id: Option<u64>,
    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub collection_name: Option<String>,
    /// 100x100 artwork URL, e.g. `.../source/100x100bb.jpg`
    pub artwork_url100: Option<String>,
    pub primary_genre_name: Option<String>,
    /// ISO 8601 release timestamp
    pub release_date: Option<String>,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
}
