//! Adapter layer: Convert YouTube Music DTOs to domain models
//!
//! Walks the renderer trees down to the first song row and the artist header.

use super::dto;
use crate::enrichment::domain::{ArtistProfile, EnrichmentError, Thumbnail, YtMusicTrack};

/// Artist channel ids start with this prefix
const ARTIST_ID_PREFIX: &str = "UC";

/// Convert a song search response into its first result
pub fn to_track(response: dto::SearchResponse) -> Result<YtMusicTrack, EnrichmentError> {
    let item = first_song(response).ok_or(EnrichmentError::NoMatches)?;

    let thumbnails = convert_thumbnails(item.thumbnail);

    // Column 0 is the title, column 1 holds artists, album and duration
    let artist_id = item
        .flex_columns
        .into_iter()
        .nth(1)
        .and_then(|col| col.music_responsive_list_item_flex_column_renderer)
        .and_then(|col| col.text)
        .and_then(first_artist_id);

    Ok(YtMusicTrack {
        thumbnails,
        artist_id,
    })
}

/// Convert an artist browse response into a profile
pub fn to_artist_profile(response: dto::BrowseResponse) -> Result<ArtistProfile, EnrichmentError> {
    let header = response
        .header
        .and_then(|h| h.music_immersive_header_renderer.or(h.music_visual_header_renderer))
        .ok_or_else(|| EnrichmentError::Parse("artist page has no header".to_string()))?;

    Ok(ArtistProfile {
        thumbnails: convert_thumbnails(header.thumbnail),
    })
}

fn first_song(response: dto::SearchResponse) -> Option<dto::ListItem> {
    response
        .contents?
        .tabbed_search_results_renderer?
        .tabs
        .into_iter()
        .filter_map(|tab| tab.tab_renderer?.content?.section_list_renderer)
        .flat_map(|list| list.contents)
        .filter_map(|section| section.music_shelf_renderer)
        .flat_map(|shelf| shelf.contents)
        .find_map(|item| item.music_responsive_list_item_renderer)
}

fn first_artist_id(text: dto::Text) -> Option<String> {
    text.runs
        .into_iter()
        .filter_map(|run| run.navigation_endpoint?.browse_endpoint)
        .map(|endpoint| endpoint.browse_id)
        .find(|id| id.starts_with(ARTIST_ID_PREFIX))
}

fn convert_thumbnails(renderer: Option<dto::ThumbnailRenderer>) -> Vec<Thumbnail> {
    renderer
        .and_then(|r| r.music_thumbnail_renderer)
        .and_then(|r| r.thumbnail)
        .map(|list| {
            list.thumbnails
                .into_iter()
                .filter(|t| !t.url.is_empty())
                .map(|t| Thumbnail {
                    url: t.url,
                    width: t.width.unwrap_or(0),
                })
                .collect()
        })
        .unwrap_or_default()
}
