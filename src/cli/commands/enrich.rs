//! Metadata enrichment commands.

use std::path::Path;
use tokio::runtime::Runtime;

use crate::enrichment::{EnrichmentConfig, EnrichmentService};
use crate::error::Result;
use crate::model::TrackRecord;
use crate::{config, records};

/// Provider settings from the config file, with command-line overrides applied
fn enrichment_config(config_path: Option<&Path>, no_ytmusic: bool) -> EnrichmentConfig {
    let file = config_path.map(config::load_from).unwrap_or_else(config::load);

    let mut enrichment_config = EnrichmentConfig::from(file.providers);
    if no_ytmusic {
        enrichment_config.use_ytmusic = false;
    }
    enrichment_config
}

fn build_service(config_path: Option<&Path>, no_ytmusic: bool) -> Result<EnrichmentService> {
    Ok(EnrichmentService::new(enrichment_config(config_path, no_ytmusic))?)
}

/// Enrich every record in a JSON file
pub fn cmd_enrich(
    rt: &Runtime,
    config_path: Option<&Path>,
    input: &Path,
    output: Option<&Path>,
    no_ytmusic: bool,
) -> anyhow::Result<()> {
    let mut set = records::read(input)?;
    let service = build_service(config_path, no_ytmusic)?;

    tracing::info!("Enriching {} record(s) from {:?}", set.len(), input);
    rt.block_on(service.enrich_all(set.tracks_mut()));

    records::write(&set, output)?;
    if let Some(path) = output {
        eprintln!("✓ Wrote {} record(s) to {:?}", set.len(), path);
    }
    Ok(())
}

/// Enrich a bare artist/title pair and show the result
pub fn cmd_lookup(
    rt: &Runtime,
    config_path: Option<&Path>,
    artist: &str,
    title: &str,
    no_ytmusic: bool,
    json: bool,
) -> anyhow::Result<()> {
    let service = build_service(config_path, no_ytmusic)?;

    let mut track = TrackRecord::new(artist, title);
    rt.block_on(service.enrich(&mut track));

    if json {
        println!("{}", serde_json::to_string_pretty(&track)?);
    } else {
        print_summary(&track);
    }
    Ok(())
}

fn print_summary(track: &TrackRecord) {
    let text = |value: &Option<String>| match value.as_deref() {
        Some("") | None => "-".to_string(),
        Some(s) => s.to_string(),
    };

    println!("{} - {}", track.artist, track.name);
    println!();
    println!("  ISRC:     {}", text(&track.isrc));
    println!("  Album:    {}", text(&track.album_name));
    println!(
        "  Track:    {}/{}  (disc {}/{})",
        track.track_number.unwrap_or(1),
        track.tracks_count.unwrap_or(1),
        track.disc_number.unwrap_or(1),
        track.disc_count.unwrap_or(1)
    );
    println!("  Year:     {}", track.year.map(|y| y.to_string()).unwrap_or_default());
    println!(
        "  Genres:   {}",
        track
            .genres
            .as_ref()
            .filter(|g| !g.is_empty())
            .map(|g| g.join(", "))
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  Cover:    {}", text(&track.cover_url));
    println!("  Artist:   {}", text(&track.artist_cover_url));
}
