//! List command implementation

use std::{io::Write, path::Path};

use anyhow::Result;
use cadence_catalog::CatalogConfig;

use crate::commands::{SortKey, open_catalog, write_songs};

pub fn run(file: &Path, config: CatalogConfig, by: SortKey, out: &mut impl Write) -> Result<()> {
    let catalog = open_catalog(file, config)?;
    let songs = match by {
        SortKey::Title => catalog.songs(),
        SortKey::Year => catalog.songs_by_year(),
    };
    write_songs(out, songs.iter().map(|song| song.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output_text, sample_file};

    fn listed_titles(by: SortKey) -> Vec<String> {
        let (_dir, path) = sample_file();
        let mut out = Vec::new();
        run(&path, CatalogConfig::default(), by, &mut out).unwrap();
        output_text(out)
            .split("\n\n")
            .filter(|record| !record.trim().is_empty())
            .map(|record| record.lines().next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_list_by_title() {
        assert_eq!(
            listed_titles(SortKey::Title),
            vec!["Harbor Lights", "Morning Glow", "Nonsense"]
        );
    }

    #[test]
    fn test_list_by_year() {
        assert_eq!(
            listed_titles(SortKey::Year),
            vec!["Morning Glow", "Harbor Lights", "Nonsense"]
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = run(
            &dir.path().join("nope.txt"),
            CatalogConfig::default(),
            SortKey::Title,
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Failed to load catalog from"));
    }
}
