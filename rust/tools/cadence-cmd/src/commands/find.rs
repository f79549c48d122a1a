//! Find command implementation

use std::{io::Write, path::Path};

use anyhow::{Result, bail};
use cadence_catalog::CatalogConfig;

use crate::commands::open_catalog;

pub fn run(file: &Path, config: CatalogConfig, title: &str, out: &mut impl Write) -> Result<()> {
    let catalog = open_catalog(file, config)?;
    let Some(song) = catalog.find_song(title) else {
        bail!("Song not found: {title}");
    };
    writeln!(out, "{song}")?;
    Ok(())
}
