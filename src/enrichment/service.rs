//! Enrichment service - orchestrates provider lookups and the merge pipeline
//!
//! This is the high-level API for enriching records:
//! 1. Build the `"<artist> - <name>"` query
//! 2. Search Deezer, iTunes and (optionally) YouTube Music concurrently
//! 3. Merge results in precedence order: Deezer, then iTunes, then YouTube Music
//! 4. Fetch the YouTube Music artist page if an artist picture is still missing
//! 5. Normalize so no field is left unset
//!
//! Provider failures never escape: they are logged and treated as "no data".

use crate::enrichment::{
    deezer::{self, DeezerClient},
    domain::{EnrichmentError, Provider},
    http,
    itunes::{self, ItunesClient},
    merge,
    normalize::normalize,
    traits::{DeezerApi, ItunesApi, YtMusicApi},
    ytmusic::{self, YtMusicClient},
};
use crate::model::{TrackRecord, is_unset_str};

/// Configuration for the enrichment service
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentConfig {
    /// Deezer API root
    pub deezer_url: String,
    /// iTunes Search API root
    pub itunes_url: String,
    /// Whether to consult YouTube Music as a last resort
    pub use_ytmusic: bool,
    /// YouTube Music innertube root
    pub ytmusic_url: String,
    /// Interface language for YouTube Music results
    pub ytmusic_language: String,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            deezer_url: deezer::DEFAULT_BASE_URL.to_string(),
            itunes_url: itunes::DEFAULT_BASE_URL.to_string(),
            use_ytmusic: true,
            ytmusic_url: ytmusic::DEFAULT_BASE_URL.to_string(),
            ytmusic_language: "en".to_string(),
        }
    }
}

/// Service for enriching track records from external providers
///
/// Construct once and reuse: the provider clients (and their connection
/// pools) live as long as the service.
pub struct EnrichmentService {
    deezer: Box<dyn DeezerApi>,
    itunes: Box<dyn ItunesApi>,
    ytmusic: Option<Box<dyn YtMusicApi>>,
}

impl EnrichmentService {
    /// Create a service with real HTTP clients
    pub fn new(config: EnrichmentConfig) -> Result<Self, EnrichmentError> {
        let http_client = http::build_client()?;

        let ytmusic: Option<Box<dyn YtMusicApi>> = if config.use_ytmusic {
            Some(Box::new(
                YtMusicClient::with_http_client(http_client.clone(), config.ytmusic_url)
                    .with_language(config.ytmusic_language),
            ))
        } else {
            None
        };

        Ok(Self {
            deezer: Box::new(DeezerClient::with_http_client(
                http_client.clone(),
                config.deezer_url,
            )),
            itunes: Box::new(ItunesClient::with_http_client(http_client, config.itunes_url)),
            ytmusic,
        })
    }

    /// Create a service from arbitrary provider implementations
    pub fn with_providers(
        deezer: Box<dyn DeezerApi>,
        itunes: Box<dyn ItunesApi>,
        ytmusic: Option<Box<dyn YtMusicApi>>,
    ) -> Self {
        Self {
            deezer,
            itunes,
            ytmusic,
        }
    }

    /// Enrich a record in place.
    ///
    /// Never fails: afterwards [`TrackRecord::is_complete`] holds, even if
    /// every provider was unreachable.
    pub async fn enrich(&self, track: &mut TrackRecord) {
        let query = track.search_query();

        let ytmusic_search = async {
            match &self.ytmusic {
                Some(client) => Some(client.search(&query).await),
                None => None,
            }
        };

        // Lookups only depend on the query; assignments below keep precedence order
        let (deezer_result, itunes_result, ytmusic_result) = futures::join!(
            self.deezer.search(&query),
            self.itunes.search(&query),
            ytmusic_search
        );

        if let Some(found) = degrade(Provider::Deezer, &query, deezer_result) {
            merge::apply_deezer(track, &found);
        }

        if let Some(found) = degrade(Provider::Itunes, &query, itunes_result) {
            merge::apply_itunes(track, &found);
        }

        if let Some(found) = ytmusic_result.and_then(|r| degrade(Provider::YtMusic, &query, r)) {
            merge::apply_ytmusic(track, &found);

            if is_unset_str(&track.artist_cover_url)
                && let (Some(client), Some(artist_id)) = (&self.ytmusic, &found.artist_id)
            {
                match client.artist_profile(artist_id).await {
                    Ok(profile) => merge::apply_artist_profile(track, &profile),
                    Err(e) => {
                        tracing::debug!(artist_id = %artist_id, "Ignoring artist page failure: {}", e);
                    }
                }
            }
        }

        normalize(track);
    }

    /// Enrich records one after another
    pub async fn enrich_all(&self, tracks: &mut [TrackRecord]) {
        let total = tracks.len();

        for (i, track) in tracks.iter_mut().enumerate() {
            self.enrich(track).await;

            if (i + 1) % 10 == 0 {
                tracing::info!("Enriched {}/{} tracks", i + 1, total);
            }
        }
    }
}

/// Turn a provider error into "no data", logging why
fn degrade<T>(provider: Provider, query: &str, result: Result<T, EnrichmentError>) -> Option<T> {
    match result {
        Ok(found) => Some(found),
        Err(EnrichmentError::NoMatches) => {
            tracing::debug!(%provider, query, "No matches");
            None
        }
        Err(e) => {
            tracing::warn!(%provider, query, "Lookup failed: {}", e);
            None
        }
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use crate::enrichment::domain::{ArtistProfile, DeezerTrack, ItunesTrack, Thumbnail, YtMusicTrack};
    use crate::enrichment::traits::mocks::{MockDeezer, MockItunes, MockYtMusic};
    use proptest::prelude::*;

    fn opt_text() -> impl Strategy<Value = Option<String>> {
        proptest::option::of(prop_oneof![Just(String::new()), "[a-zA-Z0-9 :/.-]{1,20}"])
    }

    fn opt_count() -> impl Strategy<Value = Option<u32>> {
        proptest::option::of(0u32..30)
    }

    prop_compose! {
        fn arbitrary_track()(
            artist in "[a-zA-Z ]{0,12}",
            name in "[a-zA-Z ]{0,12}",
            isrc in opt_text(),
            counts in (opt_count(), opt_count(), opt_count(), opt_count()),
            album in (opt_text(), opt_text(), opt_text()),
            urls in (opt_text(), opt_text()),
            genres in proptest::option::of(proptest::collection::vec("[a-z]{1,8}", 0..3)),
            year in proptest::option::of(-5i32..3000),
            date in proptest::option::of(prop_oneof![
                Just("1987-03-02".to_string()),
                Just("not-a-date".to_string()),
                "[0-9a-z-]{0,10}",
            ]),
            strings in (opt_text(), opt_text()),
            scalars in (proptest::option::of(0u32..100), proptest::option::of(any::<bool>())),
        ) -> TrackRecord {
            TrackRecord {
                artist,
                name,
                isrc,
                track_number: counts.0,
                tracks_count: counts.1,
                disc_number: counts.2,
                disc_count: counts.3,
                album_name: album.0,
                album_artist: album.1,
                album_id: album.2,
                cover_url: urls.0,
                artist_cover_url: urls.1,
                genres,
                year,
                date,
                publisher: strings.0,
                copyright_text: strings.1,
                popularity: scalars.0,
                explicit: scalars.1,
                extra: serde_json::Map::new(),
            }
        }
    }

    fn failure() -> impl Strategy<Value = EnrichmentError> {
        prop_oneof![
            Just(EnrichmentError::NoMatches),
            Just(EnrichmentError::RateLimited),
            Just(EnrichmentError::Network("timed out".to_string())),
            Just(EnrichmentError::Parse("eof".to_string())),
        ]
    }

    fn thumbnails() -> impl Strategy<Value = Vec<Thumbnail>> {
        proptest::collection::vec(
            ("[a-z]{1,6}", 0u32..2000).prop_map(|(url, width)| Thumbnail { url, width }),
            0..4,
        )
    }

    fn deezer_result() -> impl Strategy<Value = Result<DeezerTrack, EnrichmentError>> {
        prop_oneof![
            failure().prop_map(Err::<DeezerTrack, EnrichmentError>),
            (opt_text(), opt_count(), opt_count(), opt_text(), opt_text()).prop_map(
                |(isrc, track_position, disc_number, album_title, artist_picture)| {
                    Ok(DeezerTrack {
                        isrc: isrc.filter(|s| !s.is_empty()),
                        track_position,
                        disc_number,
                        album_title: album_title.filter(|s| !s.is_empty()),
                        artist_picture: artist_picture.filter(|s| !s.is_empty()),
                    })
                }
            ),
        ]
    }

    fn itunes_result() -> impl Strategy<Value = Result<ItunesTrack, EnrichmentError>> {
        prop_oneof![
            failure().prop_map(Err::<ItunesTrack, EnrichmentError>),
            (opt_text(), opt_text()).prop_map(|(artwork_url, primary_genre)| Ok(ItunesTrack {
                artwork_url: artwork_url.filter(|s| !s.is_empty()),
                primary_genre: primary_genre.filter(|s| !s.is_empty()),
            })),
        ]
    }

    fn ytmusic_mock() -> impl Strategy<Value = Option<MockYtMusic>> {
        let search = prop_oneof![
            failure().prop_map(Err::<YtMusicTrack, EnrichmentError>),
            (thumbnails(), proptest::option::of("UC[a-z]{4}"))
                .prop_map(|(thumbnails, artist_id)| Ok(YtMusicTrack { thumbnails, artist_id })),
        ];
        let profile = prop_oneof![
            failure().prop_map(Err::<ArtistProfile, EnrichmentError>),
            thumbnails().prop_map(|thumbnails| Ok(ArtistProfile { thumbnails })),
        ];
        proptest::option::of((search, profile).prop_map(|(s, p)| MockYtMusic::new(s, p)))
    }

    fn run(service: &EnrichmentService, track: &mut TrackRecord) {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(service.enrich(track));
    }

    proptest! {
        /// Whatever the input and whatever the providers do, every field ends up set
        #[test]
        fn enrich_is_total(
            track in arbitrary_track(),
            deezer in deezer_result(),
            itunes in itunes_result(),
            ytmusic in ytmusic_mock(),
        ) {
            let service = EnrichmentService::with_providers(
                Box::new(MockDeezer { result: deezer }),
                Box::new(MockItunes { result: itunes }),
                ytmusic.map(|m| Box::new(m) as Box<dyn YtMusicApi>),
            );

            let mut enriched = track.clone();
            run(&service, &mut enriched);

            prop_assert!(enriched.is_complete());
            prop_assert_eq!(&enriched.artist, &track.artist);
            prop_assert_eq!(&enriched.name, &track.name);
            prop_assert!(enriched.track_number.unwrap() >= 1);
            prop_assert!(enriched.tracks_count.unwrap() >= 1);
            prop_assert!(enriched.disc_number.unwrap() >= 1);
            prop_assert!(enriched.disc_count.unwrap() >= 1);
        }

        /// A non-empty ISRC on input survives any Deezer response
        #[test]
        fn existing_isrc_survives(
            isrc in "[A-Z]{2}[A-Z0-9]{3}[0-9]{7}",
            deezer in deezer_result(),
        ) {
            let service = EnrichmentService::with_providers(
                Box::new(MockDeezer { result: deezer }),
                Box::new(MockItunes::no_matches()),
                None,
            );

            let mut track = TrackRecord {
                isrc: Some(isrc.clone()),
                ..TrackRecord::new("a", "b")
            };
            run(&service, &mut track);

            prop_assert_eq!(track.isrc, Some(isrc));
        }
    }
}
