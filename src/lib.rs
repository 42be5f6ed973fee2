//! Song Enricher - fills gaps in song metadata records from public providers.
//!
//! Records come from an upstream source with only some fields known. The
//! [`enrichment`] module queries Deezer, iTunes and optionally YouTube Music,
//! merges what they return under fixed precedence rules, and normalizes the
//! result so no field is left empty.

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod model;
pub mod records;
#[cfg(test)]
pub mod test_utils;
