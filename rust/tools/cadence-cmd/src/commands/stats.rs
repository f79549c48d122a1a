//! Stats command implementation

use std::{io::Write, path::Path};

use anyhow::Result;
use cadence_catalog::CatalogConfig;

use crate::commands::open_catalog;

pub fn run(file: &Path, config: CatalogConfig, out: &mut impl Write) -> Result<()> {
    let catalog = open_catalog(file, config)?;
    writeln!(out, "{}", catalog.stats())?;
    Ok(())
}
