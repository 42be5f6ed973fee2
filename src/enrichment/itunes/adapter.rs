//! Adapter layer: Convert iTunes DTOs to domain models

use super::dto;
use crate::enrichment::domain::{EnrichmentError, ItunesTrack};

/// Size token at the end of the 100x100 artwork URL
const LOW_RES_TOKEN: &str = "100x100bb.jpg";
/// Same artwork served at 1000x1000
const HIGH_RES_TOKEN: &str = "1000x1000bb.jpg";

/// Convert a search response into its best (first) match
pub fn to_track(response: dto::SearchResponse) -> Result<ItunesTrack, EnrichmentError> {
    let track = response
        .results
        .into_iter()
        .next()
        .ok_or(EnrichmentError::NoMatches)?;

    Ok(ItunesTrack {
        artwork_url: track
            .artwork_url100
            .filter(|url| !url.is_empty())
            .map(|url| upscale_artwork(&url)),
        primary_genre: track.primary_genre_name.filter(|g| !g.is_empty()),
    })
}

/// Rewrite a 100x100 artwork URL to its 1000x1000 variant.
///
/// URLs without the low-res token are returned unchanged.
pub fn upscale_artwork(url: &str) -> String {
    url.replace(LOW_RES_TOKEN, HIGH_RES_TOKEN)
}
