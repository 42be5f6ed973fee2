//! Field-precedence rules for folding provider results into a [`TrackRecord`].
//!
//! Most fields are fallback-only: written when unset (absent, empty string or
//! zero) and left alone otherwise. Two fields break that rule: iTunes artwork
//! and genre overwrite whatever is there, because iTunes is the preferred
//! source for both. Callers must apply Deezer, then iTunes, then YouTube Music.

use crate::enrichment::domain::{ArtistProfile, DeezerTrack, ItunesTrack, YtMusicTrack, best_thumbnail};
use crate::model::{TrackRecord, is_unset_num, is_unset_str};

/// Structural metadata from Deezer. Every field is fallback-only.
pub fn apply_deezer(track: &mut TrackRecord, deezer: &DeezerTrack) {
    if is_unset_str(&track.isrc) && deezer.isrc.is_some() {
        track.isrc = deezer.isrc.clone();
    }

    // A match without positions still implies position 1
    if is_unset_num(track.track_number) {
        track.track_number = Some(deezer.track_position.unwrap_or(1));
    }
    if is_unset_num(track.disc_number) {
        track.disc_number = Some(deezer.disc_number.unwrap_or(1));
    }

    if is_unset_str(&track.album_name) && deezer.album_title.is_some() {
        track.album_name = deezer.album_title.clone();
    }
    if is_unset_str(&track.artist_cover_url) && deezer.artist_picture.is_some() {
        track.artist_cover_url = deezer.artist_picture.clone();
    }
}

/// Artwork and genre from iTunes. Both overwrite when iTunes has a value.
pub fn apply_itunes(track: &mut TrackRecord, itunes: &ItunesTrack) {
    if let Some(artwork) = &itunes.artwork_url {
        track.cover_url = Some(artwork.clone());
    }
    if let Some(genre) = &itunes.primary_genre {
        track.genres = Some(vec![genre.clone()]);
    }
}

/// Song artwork from YouTube Music, only if nothing earlier supplied one.
pub fn apply_ytmusic(track: &mut TrackRecord, ytmusic: &YtMusicTrack) {
    if is_unset_str(&track.cover_url)
        && let Some(best) = best_thumbnail(&ytmusic.thumbnails)
    {
        track.cover_url = Some(best.url.clone());
    }
}

/// Artist picture from a YouTube Music artist page, only if still unset.
pub fn apply_artist_profile(track: &mut TrackRecord, profile: &ArtistProfile) {
    if is_unset_str(&track.artist_cover_url)
        && let Some(best) = best_thumbnail(&profile.thumbnails)
    {
        track.artist_cover_url = Some(best.url.clone());
    }
}
