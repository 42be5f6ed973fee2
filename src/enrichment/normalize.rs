//! Final pass that replaces every remaining `None` with a fixed default.
//!
//! Runs after all provider lookups regardless of their outcome, so a record
//! always leaves enrichment safe for strict consumers such as tag writers.

use crate::model::{TrackRecord, is_unset_num};

/// Year used when neither `year` nor a parsable `date` is available
pub const FALLBACK_YEAR: i32 = 2024;

/// `album_id` used when the upstream source didn't provide one
pub const UNKNOWN_ALBUM_ID: &str = "0";

/// Fill every unset field with its default. Idempotent.
pub fn normalize(track: &mut TrackRecord) {
    track.genres.get_or_insert_with(Vec::new);

    // Positions and counts: absent and 0 both mean unknown
    for field in [
        &mut track.track_number,
        &mut track.tracks_count,
        &mut track.disc_number,
        &mut track.disc_count,
    ] {
        if is_unset_num(*field) {
            *field = Some(1);
        }
    }

    if track.year.is_none_or(|y| y == 0) {
        track.year = Some(year_from_date(track.date.as_deref()).unwrap_or(FALLBACK_YEAR));
    }

    track.date.get_or_insert_with(String::new);
    track.publisher.get_or_insert_with(String::new);
    track.copyright_text.get_or_insert_with(String::new);
    track.isrc.get_or_insert_with(String::new);
    track.album_id.get_or_insert_with(|| UNKNOWN_ALBUM_ID.to_string());
    if track.album_artist.is_none() {
        track.album_artist = Some(track.artist.clone());
    }
    track.album_name.get_or_insert_with(String::new);

    track.popularity.get_or_insert(0);
    track.explicit.get_or_insert(false);
}

/// Parse the year from the first four characters of a date string
///
/// Whitespace is trimmed only after taking the prefix, so `" 1987"` yields 198.
fn year_from_date(date: Option<&str>) -> Option<i32> {
    let prefix: String = date?.chars().take(4).collect();
    prefix.trim().parse().ok()
}
