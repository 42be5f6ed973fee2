//! Internal domain models for provider lookups.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

use std::fmt;

/// External metadata provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Deezer,
    Itunes,
    YtMusic,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Deezer => "Deezer",
            Provider::Itunes => "iTunes",
            Provider::YtMusic => "YouTube Music",
        };
        f.write_str(name)
    }
}

/// Best Deezer match: structural metadata (ISRC, positions, album, artist picture)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeezerTrack {
    /// ISRC (from `isrc`, falling back to `isrc_code`)
    pub isrc: Option<String>,
    /// Track position on the disc, if Deezer reported one
    pub track_position: Option<u32>,
    /// Disc number, if Deezer reported one
    pub disc_number: Option<u32>,
    /// Album title (None when the result has no album object)
    pub album_title: Option<String>,
    /// Artist picture URL, extra-large preferred over medium
    pub artist_picture: Option<String>,
}

/// Best iTunes match: artwork and genre
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItunesTrack {
    /// Artwork URL already rewritten to the 1000x1000 variant
    pub artwork_url: Option<String>,
    pub primary_genre: Option<String>,
}

/// An image in one of several sizes, as YouTube Music returns them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
    /// Width in pixels (0 when the provider omitted it)
    pub width: u32,
}

/// Best YouTube Music song match
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YtMusicTrack {
    pub thumbnails: Vec<Thumbnail>,
    /// Channel id of the first credited artist, used for [`ArtistProfile`] lookups
    pub artist_id: Option<String>,
}

/// YouTube Music artist page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistProfile {
    pub thumbnails: Vec<Thumbnail>,
}

/// Pick the widest thumbnail. On ties the earliest one wins.
pub fn best_thumbnail(thumbnails: &[Thumbnail]) -> Option<&Thumbnail> {
    thumbnails
        .iter()
        .reduce(|best, t| if t.width > best.width { t } else { best })
}

/// Errors that can occur during a provider lookup
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No matches found")]
    NoMatches,

    #[error("Rate limited - try again later")]
    RateLimited,
}
