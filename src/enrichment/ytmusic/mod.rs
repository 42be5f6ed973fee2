//! YouTube Music integration
//!
//! Talks to the same internal ("innertube") JSON API the music.youtube.com web
//! client uses. Only consulted as a last resort for artwork and artist pictures.

mod adapter;
mod client;
pub mod dto;

pub use adapter::{to_artist_profile, to_track};
pub use client::{DEFAULT_BASE_URL, YtMusicClient};
