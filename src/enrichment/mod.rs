//! Metadata enrichment - fills gaps in a [`TrackRecord`](crate::model::TrackRecord)
//! from external providers.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`deezer/dto.rs`, `itunes/dto.rs`, `ytmusic/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Merge** - Which provider may write which field, and when
//! - **Normalize** - Defaults for whatever no provider supplied
//! - **Service** - High-level orchestration of the enrichment flow
//!
//! Providers and their roles:
//! - Deezer: ISRC, track/disc position, album title, artist picture (fill gaps only)
//! - iTunes: 1000x1000 artwork and primary genre (always wins when present)
//! - YouTube Music: artwork and artist picture of last resort (optional)
//!
//! # Usage
//!
//! ```ignore
//! use song_enricher::enrichment::{EnrichmentService, EnrichmentConfig};
//! use song_enricher::model::TrackRecord;
//!
//! let service = EnrichmentService::new(EnrichmentConfig::default())?;
//!
//! let mut track = TrackRecord::new("Daft Punk", "One More Time");
//! service.enrich(&mut track).await;
//! assert!(track.is_complete());
//! ```

pub mod deezer;
pub mod domain;
pub mod http;
pub mod itunes;
pub mod merge;
pub mod normalize;
pub mod service;
pub mod traits;
pub mod ytmusic;

pub use domain::{EnrichmentError, Provider};
pub use normalize::normalize;
pub use service::{EnrichmentConfig, EnrichmentService};
