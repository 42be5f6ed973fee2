//! Core data model: the song metadata record that enrichment fills in.
//!
//! A [`TrackRecord`] is produced upstream (from the primary song source) with
//! many fields still empty. Enrichment mutates it in place and guarantees that
//! afterwards every optional field is `Some` - see [`TrackRecord::is_complete`].
//!
//! # JSON shape
//!
//! Records are read and written as flat JSON objects using the field names
//! below. Keys this crate doesn't know about are kept in [`TrackRecord::extra`]
//! and written back untouched.

use serde::{Deserialize, Serialize};

/// Metadata for a single song, subject to enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Primary artist name (query input, never overwritten)
    pub artist: String,
    /// Song title (query input, never overwritten)
    pub name: String,

    /// International Standard Recording Code
    #[serde(default)]
    pub isrc: Option<String>,
    /// Position on the disc (0 = unknown)
    #[serde(default)]
    pub track_number: Option<u32>,
    /// Number of tracks on the album (0 = unknown)
    #[serde(default)]
    pub tracks_count: Option<u32>,
    /// Disc number (0 = unknown)
    #[serde(default)]
    pub disc_number: Option<u32>,
    /// Number of discs (0 = unknown)
    #[serde(default)]
    pub disc_count: Option<u32>,

    #[serde(default)]
    pub album_name: Option<String>,
    #[serde(default)]
    pub album_artist: Option<String>,
    #[serde(default)]
    pub album_id: Option<String>,

    /// Album artwork URL
    #[serde(default)]
    pub cover_url: Option<String>,
    /// Artist picture URL
    #[serde(default)]
    pub artist_cover_url: Option<String>,

    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub year: Option<i32>,
    /// Release date, usually `YYYY-MM-DD` but only the year prefix is relied on
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub copyright_text: Option<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub explicit: Option<bool>,

    /// Upstream fields enrichment doesn't touch
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TrackRecord {
    /// Create a bare record with only the query fields set.
    pub fn new(artist: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Free-text search query shared by every provider: `"<artist> - <name>"`.
    pub fn search_query(&self) -> String {
        format!("{} - {}", self.artist, self.name)
    }

    /// True once every optional field holds a value.
    ///
    /// This is the state [`crate::enrichment::normalize`] guarantees, and what
    /// strict consumers such as tag writers expect.
    pub fn is_complete(&self) -> bool {
        self.isrc.is_some()
            && self.track_number.is_some()
            && self.tracks_count.is_some()
            && self.disc_number.is_some()
            && self.disc_count.is_some()
            && self.album_name.is_some()
            && self.album_artist.is_some()
            && self.album_id.is_some()
            && self.genres.is_some()
            && self.year.is_some()
            && self.date.is_some()
            && self.publisher.is_some()
            && self.copyright_text.is_some()
            && self.popularity.is_some()
            && self.explicit.is_some()
    }
}

/// A string field counts as unset when absent or empty.
pub(crate) fn is_unset_str(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// A numeric position/count counts as unset when absent or zero.
pub(crate) fn is_unset_num(value: Option<u32>) -> bool {
    value.is_none_or(|n| n == 0)
}
