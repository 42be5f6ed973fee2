//! Deezer API Data Transfer Objects
//!
//! These types match what the Deezer `/search` endpoint returns.
//! DO NOT use these types outside the deezer module - convert to domain types.
//!
//! API Reference: https://developers.deezer.com/api/search

use serde::{Deserialize, Serialize};

/// Search response
///
/// Deezer reports some failures (quota, bad parameters) with HTTP 200 and an
/// `error` object instead of `data`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Matching tracks, best match first
    #[serde(default)]
    pub data: Vec<Track>,
    /// Total number of matches
    pub total: Option<u64>,
    /// Error object (present instead of data on failure)
    pub error: Option<ApiError>,
}

/// Track entry in search results
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub id: Option<u64>,
    pub title: Option<String>,
    /// ISRC (full track objects)
    pub isrc: Option<String>,
    /// ISRC under its alternate key
    pub isrc_code: Option<String>,
    /// Position on the disc
    pub track_position: Option<u32>,
    /// Disc number
    pub disk_number: Option<u32>,
    /// Duration in seconds
    pub duration: Option<u32>,
    pub explicit_lyrics: Option<bool>,
    pub artist: Option<Artist>,
    pub album: Option<Album>,
}

/// Artist summary
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: Option<u64>,
    pub name: Option<String>,
    /// 250x250 picture
    pub picture_medium: Option<String>,
    /// 1000x1000 picture
    pub picture_xl: Option<String>,
}

/// Album summary
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub cover_medium: Option<String>,
    pub cover_xl: Option<String>,
}

/// Error object returned in the body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub message: Option<String>,
    pub code: Option<i64>,
}

/// Deezer's error code for exceeded request quota
pub const QUOTA_EXCEEDED: i64 = 4;

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "data": [{
                "id": 3135556,
                "readable": true,
                "title": "Harder, Better, Faster, Stronger",
                "duration": 224,
                "rank": 956167,
                "explicit_lyrics": false,
                "isrc": "GBDUW0000059",
                "track_position": 4,
                "disk_number": 1,
                "artist": {
                    "id": 27,
                    "name": "Daft Punk",
                    "picture_medium": "https://e-cdns-images.dzcdn.net/images/artist/x/250x250-000000-80-0-0.jpg",
                    "picture_xl": "https://e-cdns-images.dzcdn.net/images/artist/x/1000x1000-000000-80-0-0.jpg",
                    "type": "artist"
                },
                "album": {
                    "id": 302127,
                    "title": "Discovery",
                    "cover_xl": "https://e-cdns-images.dzcdn.net/images/cover/y/1000x1000-000000-80-0-0.jpg",
                    "type": "album"
                },
                "type": "track"
            }],
            "total": 1
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");

        assert_eq!(response.data.len(), 1);
        let track = &response.data[0];
        assert_eq!(track.isrc.as_deref(), Some("GBDUW0000059"));
        assert_eq!(track.track_position, Some(4));
        assert_eq!(track.disk_number, Some(1));
        assert_eq!(
            track.album.as_ref().and_then(|a| a.title.as_deref()),
            Some("Discovery")
        );
        assert!(response.error.is_none());
    }

    #[test]
    fn test_parse_search_summary_without_positions() {
        // Plain search hits omit isrc and positions
        let json = r#"{
            "data": [{"id": 1, "title": "Song", "artist": {"id": 2, "name": "A"}}],
            "total": 1
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let track = &response.data[0];
        assert!(track.isrc.is_none());
        assert!(track.track_position.is_none());
        assert!(track.album.is_none());
    }

    #[test]
    fn test_parse_empty_results() {
        let response: SearchResponse = serde_json::from_str(r#"{"data": [], "total": 0}"#).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_parse_error_body() {
        let json = r#"{
            "error": {
                "type": "Exception",
                "message": "Quota limit exceeded",
                "code": 4
            }
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.is_empty());
        let error = response.error.expect("error object");
        assert_eq!(error.code, Some(QUOTA_EXCEEDED));
    }
}
