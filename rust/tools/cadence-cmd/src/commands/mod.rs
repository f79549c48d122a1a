//! Command implementations for cadence-cmd

use std::{io::Write, path::Path};

use anyhow::{Context, Result, ensure};
use cadence_catalog::{Catalog, CatalogConfig, Song};
use clap::{Args, ValueEnum};

pub mod edit;
pub mod find;
pub mod list;
pub mod search;
pub mod stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Title,
    Year,
}

/// Fields of a song given on the command line.
#[derive(Debug, Clone, Args)]
pub struct SongArgs {
    /// Song title
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "N/A")]
    pub album: String,

    /// Length as MM:SS
    #[arg(long, default_value = "00:00")]
    pub length: String,

    /// Release year
    #[arg(long, default_value_t = 0)]
    pub year: i32,

    #[arg(long, default_value_t = 0)]
    pub plays: u64,

    #[arg(long, default_value = "")]
    pub lyrics: String,
}

impl SongArgs {
    pub fn into_song(self) -> Result<Song> {
        ensure!(!self.name.trim().is_empty(), "Song title must not be blank");
        let length_secs = Song::parse_length(&self.length)
            .with_context(|| format!("Invalid song length: {}", self.length))?;
        Ok(Song::new(
            self.name,
            self.album,
            length_secs,
            self.year,
            self.plays,
            self.lyrics,
        ))
    }
}

pub fn open_catalog(file: &Path, config: CatalogConfig) -> Result<Catalog> {
    Catalog::load(file, config)
        .with_context(|| format!("Failed to load catalog from {}", file.display()))
}

/// Saves `catalog` to `output`, or back to `file` when no output is given.
pub fn save_catalog(catalog: &Catalog, file: &Path, output: Option<&Path>) -> Result<()> {
    let target = output.unwrap_or(file);
    catalog
        .save(target)
        .with_context(|| format!("Failed to write catalog to {}", target.display()))?;
    log::info!("wrote {} songs to {}", catalog.len(), target.display());
    Ok(())
}

pub fn write_songs<'a>(out: &mut impl Write, songs: impl IntoIterator<Item = &'a Song>) -> Result<()> {
    for song in songs {
        writeln!(out, "{song}\n")?;
    }
    Ok(())
}
