//! Search command implementation

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use cadence_catalog::CatalogConfig;

use crate::commands::{open_catalog, write_songs};

pub fn run(file: &Path, config: CatalogConfig, keyword: &str, out: &mut impl Write) -> Result<()> {
    let mut catalog = open_catalog(file, config)?;
    let hits = catalog
        .search(keyword)
        .with_context(|| format!("Search for {keyword:?} failed"))?;
    log::debug!(
        "{} hits for {keyword:?} across {} words",
        hits.len(),
        catalog.index().word_count()
    );
    if hits.is_empty() {
        writeln!(out, "No songs match \"{keyword}\".")?;
        return Ok(());
    }
    writeln!(out, "{} song(s) match \"{keyword}\":\n", hits.len())?;
    write_songs(out, hits.iter().map(|song| song.as_ref()))
}
