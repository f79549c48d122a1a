//! Add, remove and modify command implementations

use std::{io::Write, path::Path};

use anyhow::{Result, bail};
use cadence_catalog::CatalogConfig;

use crate::commands::{SongArgs, open_catalog, save_catalog};

pub fn add(
    file: &Path,
    config: CatalogConfig,
    song: SongArgs,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let song = song.into_song()?;
    let mut catalog = open_catalog(file, config)?;
    let added = catalog.add_song(song)?;
    save_catalog(&catalog, file, output)?;
    writeln!(out, "Added \"{}\".", added.title)?;
    Ok(())
}

pub fn remove(
    file: &Path,
    config: CatalogConfig,
    title: &str,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let mut catalog = open_catalog(file, config)?;
    let Some(removed) = catalog.remove_song(title) else {
        bail!("Song not found: {title}");
    };
    save_catalog(&catalog, file, output)?;
    writeln!(out, "Removed \"{}\".", removed.title)?;
    Ok(())
}

pub fn modify(
    file: &Path,
    config: CatalogConfig,
    title: &str,
    song: SongArgs,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let replacement = song.into_song()?;
    let mut catalog = open_catalog(file, config)?;
    let Some(previous) = catalog.modify_song(title, replacement)? else {
        bail!("Song not found: {title}");
    };
    save_catalog(&catalog, file, output)?;
    writeln!(out, "Modified \"{}\".", previous.title)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use cadence_catalog::song_file;

    use super::*;
    use crate::commands::test_support::{output_text, sample_file, sample_songs};

    fn song_args(name: &str, length: &str) -> SongArgs {
        SongArgs {
            name: name.to_string(),
            album: "Deep Field".to_string(),
            length: length.to_string(),
            year: 2020,
            plays: 12,
            lyrics: "pulsing light".to_string(),
        }
    }

    fn titles(path: &Path) -> Vec<String> {
        song_file::load(path)
            .unwrap()
            .into_iter()
            .map(|song| song.title)
            .collect()
    }

    #[test]
    fn test_remove_in_place() {
        let (_dir, path) = sample_file();
        let mut out = Vec::new();
        remove(&path, CatalogConfig::default(), "NONSENSE", None, &mut out).unwrap();
        assert_eq!(output_text(out), "Removed \"Nonsense\".\n");
        assert_eq!(titles(&path), vec!["Harbor Lights", "Morning Glow"]);
    }

    #[test]
    fn test_remove_to_output() {
        let (dir, path) = sample_file();
        let target = dir.path().join("trimmed.txt");
        let mut out = Vec::new();
        remove(&path, CatalogConfig::default(), "Harbor Lights", Some(target.as_path()), &mut out)
            .unwrap();
        assert_eq!(titles(&target), vec!["Morning Glow", "Nonsense"]);
        assert_eq!(song_file::load(&path).unwrap().len(), sample_songs().len());
    }

    #[test]
    fn test_remove_missing_leaves_file() {
        let (_dir, path) = sample_file();
        let before = std::fs::read_to_string(&path).unwrap();
        let mut out = Vec::new();
        assert!(remove(&path, CatalogConfig::default(), "Ghost", None, &mut out).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_add_and_modify() {
        let (_dir, path) = sample_file();
        let mut out = Vec::new();
        add(&path, CatalogConfig::default(), song_args("Quasar", "05:00"), None, &mut out).unwrap();
        assert_eq!(
            titles(&path),
            vec!["Harbor Lights", "Morning Glow", "Nonsense", "Quasar"]
        );

        modify(
            &path,
            CatalogConfig::default(),
            "quasar",
            song_args("Pulsar", "04:10"),
            None,
            &mut out,
        )
        .unwrap();
        let songs = song_file::load(&path).unwrap();
        let pulsar = songs.iter().find(|song| song.title == "Pulsar").unwrap();
        assert_eq!(pulsar.length_secs, 250);
        assert!(songs.iter().all(|song| song.title != "Quasar"));
        assert_eq!(
            output_text(out),
            "Added \"Quasar\".\nModified \"Quasar\".\n"
        );
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let (_dir, path) = sample_file();
        let mut out = Vec::new();
        for name in ["", "   "] {
            let err = add(&path, CatalogConfig::default(), song_args(name, "05:00"), None, &mut out)
                .unwrap_err();
            assert_eq!(err.to_string(), "Song title must not be blank");
        }
        assert_eq!(titles(&path).len(), 3);
        assert!(out.is_empty());
    }

    #[test]
    fn test_add_trims_padded_title() {
        let (_dir, path) = sample_file();
        let mut out = Vec::new();
        add(&path, CatalogConfig::default(), song_args("  Quasar  ", "05:00"), None, &mut out)
            .unwrap();
        assert_eq!(output_text(out), "Added \"Quasar\".\n");
        assert!(titles(&path).contains(&"Quasar".to_string()));
    }

    #[test]
    fn test_add_rejects_bad_length() {
        let (_dir, path) = sample_file();
        let mut out = Vec::new();
        let err = add(&path, CatalogConfig::default(), song_args("Quasar", "5m"), None, &mut out)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid song length: 5m");
        assert_eq!(titles(&path).len(), 3);
    }
}
