//! YouTube Music (innertube) Data Transfer Objects
//!
//! The innertube API returns deeply nested "renderer" trees. These types only
//! model the path down to the fields we consume; everything else is ignored.
//! Every level is optional because the layout varies between responses.
//! DO NOT use these types outside the ytmusic module - convert to domain types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Search (/youtubei/v1/search)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub contents: Option<SearchContents>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContents {
    pub tabbed_search_results_renderer: Option<TabbedSearchResults>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TabbedSearchResults {
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub tab_renderer: Option<TabRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TabRenderer {
    pub content: Option<TabContent>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContent {
    pub section_list_renderer: Option<SectionList>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SectionList {
    #[serde(default)]
    pub contents: Vec<Section>,
}

/// One section of results; song searches put songs in a music shelf
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub music_shelf_renderer: Option<MusicShelf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MusicShelf {
    #[serde(default)]
    pub contents: Vec<ShelfItem>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfItem {
    pub music_responsive_list_item_renderer: Option<ListItem>,
}

/// A song row: thumbnail plus text columns (title, then artists/album/duration)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub thumbnail: Option<ThumbnailRenderer>,
    #[serde(default)]
    pub flex_columns: Vec<FlexColumn>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexColumn {
    pub music_responsive_list_item_flex_column_renderer: Option<FlexColumnRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FlexColumnRenderer {
    pub text: Option<Text>,
}

// ============================================================================
// Artist page (/youtubei/v1/browse)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BrowseResponse {
    pub header: Option<ArtistHeader>,
}

/// Artists with a banner use the immersive header, others the visual header
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistHeader {
    pub music_immersive_header_renderer: Option<HeaderRenderer>,
    pub music_visual_header_renderer: Option<HeaderRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HeaderRenderer {
    pub thumbnail: Option<ThumbnailRenderer>,
}

// ============================================================================
// Shared pieces
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRenderer {
    pub music_thumbnail_renderer: Option<MusicThumbnail>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MusicThumbnail {
    pub thumbnail: Option<ThumbnailList>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThumbnailList {
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Formatted text split into runs; runs may link somewhere
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Text {
    #[serde(default)]
    pub runs: Vec<Run>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub text: String,
    pub navigation_endpoint: Option<NavigationEndpoint>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEndpoint {
    pub browse_endpoint: Option<BrowseEndpoint>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseEndpoint {
    /// `UC...` for artist channels, `MPRE...` for albums
    pub browse_id: String,
}
