//! Command-line interface for song-enricher.
//!
//! A thin host around the library: reads records, runs them through the
//! [`EnrichmentService`](crate::enrichment::EnrichmentService), writes them back.

mod commands;

pub use commands::{Cli, Commands, run_command};
