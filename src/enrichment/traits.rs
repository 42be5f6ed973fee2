//! Trait definitions for the provider clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use song_enricher::enrichment::{EnrichmentService, traits::mocks::*};
//!
//! let service = EnrichmentService::with_providers(
//!     Box::new(MockDeezer::no_matches()),
//!     Box::new(MockItunes::with_artwork("https://x/100x100bb.jpg", "Rock")),
//!     None,
//! );
//! ```

use async_trait::async_trait;

use super::domain::{ArtistProfile, DeezerTrack, EnrichmentError, ItunesTrack, YtMusicTrack};

/// Discography-style provider: structural metadata.
#[async_trait]
pub trait DeezerApi: Send + Sync {
    /// Search for a track and return the best match.
    async fn search(&self, query: &str) -> Result<DeezerTrack, EnrichmentError>;
}

/// Storefront-style provider: high-resolution artwork and genre.
#[async_trait]
pub trait ItunesApi: Send + Sync {
    /// Search for a track and return the best match.
    async fn search(&self, query: &str) -> Result<ItunesTrack, EnrichmentError>;
}

/// Streaming-catalog provider: fallback artwork and artist pictures.
#[async_trait]
pub trait YtMusicApi: Send + Sync {
    /// Search for a song and return the first result.
    async fn search(&self, query: &str) -> Result<YtMusicTrack, EnrichmentError>;

    /// Fetch an artist page by its channel id.
    async fn artist_profile(&self, artist_id: &str) -> Result<ArtistProfile, EnrichmentError>;
}

// Implement traits for real clients

#[async_trait]
impl DeezerApi for super::deezer::DeezerClient {
    async fn search(&self, query: &str) -> Result<DeezerTrack, EnrichmentError> {
        self.search(query).await
    }
}

#[async_trait]
impl ItunesApi for super::itunes::ItunesClient {
    async fn search(&self, query: &str) -> Result<ItunesTrack, EnrichmentError> {
        self.search(query).await
    }
}

#[async_trait]
impl YtMusicApi for super::ytmusic::YtMusicClient {
    async fn search(&self, query: &str) -> Result<YtMusicTrack, EnrichmentError> {
        self.search(query).await
    }

    async fn artist_profile(&self, artist_id: &str) -> Result<ArtistProfile, EnrichmentError> {
        self.artist_profile(artist_id).await
    }
}
