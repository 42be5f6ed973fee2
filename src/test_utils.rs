//! Test utilities and fixtures for song-enricher tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{bare_track, full_track};
//!
//! let custom = TrackRecord {
//!     isrc: Some("USRC17607839".to_string()),
//!     ..bare_track()
//! };
//! ```

use crate::model::TrackRecord;

/// A record as the upstream source hands it over when it knows nothing
/// beyond artist and title.
pub fn bare_track() -> TrackRecord {
    TrackRecord::new("Daft Punk", "One More Time")
}

/// A record with every field set to a non-default value.
///
/// Enrichment may only change `cover_url` and `genres` on this record.
pub fn full_track() -> TrackRecord {
    TrackRecord {
        artist: "Daft Punk".to_string(),
        name: "One More Time".to_string(),
        isrc: Some("GBDUW0000053".to_string()),
        track_number: Some(1),
        tracks_count: Some(14),
        disc_number: Some(1),
        disc_count: Some(1),
        album_name: Some("Discovery".to_string()),
        album_artist: Some("Daft Punk".to_string()),
        album_id: Some("2noRn2Aes5aoNVsU6iWThc".to_string()),
        cover_url: Some("https://i.scdn.co/image/discovery".to_string()),
        artist_cover_url: Some("https://i.scdn.co/image/daftpunk".to_string()),
        genres: Some(vec!["french house".to_string(), "filter house".to_string()]),
        year: Some(2001),
        date: Some("2001-03-12".to_string()),
        publisher: Some("Parlophone".to_string()),
        copyright_text: Some("2001 Daft Life Ltd.".to_string()),
        popularity: Some(78),
        explicit: Some(false),
        extra: serde_json::Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_track_is_complete() {
        assert!(full_track().is_complete());
    }

    #[test]
    fn test_bare_track_only_has_query_fields() {
        let track = bare_track();
        assert!(!track.artist.is_empty());
        assert!(!track.name.is_empty());
        assert!(track.isrc.is_none());
    }
}
