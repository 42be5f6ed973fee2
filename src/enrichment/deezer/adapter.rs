//! Adapter layer: Convert Deezer DTOs to domain models
//!
//! This is the ONLY place where Deezer DTO types are converted to domain types.

use super::dto;
use crate::enrichment::domain::{DeezerTrack, EnrichmentError};

/// Convert a search response into its best (first) match
pub fn to_track(response: dto::SearchResponse) -> Result<DeezerTrack, EnrichmentError> {
    if let Some(error) = response.error {
        if error.code == Some(dto::QUOTA_EXCEEDED) {
            return Err(EnrichmentError::RateLimited);
        }
        return Err(EnrichmentError::ApiError(
            error.message.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }

    let track = response
        .data
        .into_iter()
        .next()
        .ok_or(EnrichmentError::NoMatches)?;

    Ok(convert_track(track))
}

fn convert_track(track: dto::Track) -> DeezerTrack {
    let isrc = non_empty(track.isrc).or_else(|| non_empty(track.isrc_code));

    let album_title = track.album.and_then(|album| non_empty(album.title));

    let artist_picture = track
        .artist
        .and_then(|artist| non_empty(artist.picture_xl).or_else(|| non_empty(artist.picture_medium)));

    DeezerTrack {
        isrc,
        track_position: track.track_position,
        disc_number: track.disk_number,
        album_title,
        artist_picture,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
