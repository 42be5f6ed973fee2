//! Configuration commands.

use std::path::Path;

use crate::config;
use crate::error::Result;

/// Write the default config so users have something to edit
pub fn cmd_init_config(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let target = config::resolve_path(path)?;

    if target.exists() && !force {
        println!("Config already exists at {:?}", target);
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    write_defaults(&target)?;
    println!("✓ Wrote default config to {:?}", target);
    Ok(())
}

fn write_defaults(target: &Path) -> Result<()> {
    config::save_to(&config::Config::default(), target)?;
    Ok(())
}
