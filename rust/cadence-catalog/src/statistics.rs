use std::{borrow::Borrow, fmt};

use num_format::{Locale, ToFormattedString};

use crate::song::Song;

/// Summary figures for a set of songs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_songs: usize,
    pub total_plays: u64,
    /// Integer average; `None` without songs.
    pub average_plays: Option<u64>,
    /// Title and plays of the first song with the strictly highest play count.
    /// Songs that were never played do not qualify.
    pub most_played: Option<(String, u64)>,
}

impl CatalogStats {
    pub fn compute<S: Borrow<Song>>(songs: impl IntoIterator<Item = S>) -> CatalogStats {
        let mut total_songs = 0usize;
        let mut total_plays = 0u64;
        let mut most_played: Option<(String, u64)> = None;

        for song in songs {
            let song = song.borrow();
            total_songs += 1;
            total_plays = total_plays.saturating_add(song.plays);
            let best = most_played.as_ref().map_or(0, |(_, plays)| *plays);
            if song.plays > best {
                most_played = Some((song.title.clone(), song.plays));
            }
        }

        CatalogStats {
            total_songs,
            total_plays,
            average_plays: (total_songs > 0).then(|| total_plays / total_songs as u64),
            most_played,
        }
    }
}

impl fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Catalog Statistics ---")?;
        writeln!(f, "Total songs: {}", self.total_songs.to_formatted_string(&Locale::en))?;
        write!(f, "Total plays: {}", self.total_plays.to_formatted_string(&Locale::en))?;
        if let Some(average) = self.average_plays {
            write!(
                f,
                "\nAverage plays per song: {}",
                average.to_formatted_string(&Locale::en)
            )?;
        }
        if let Some((title, plays)) = &self.most_played {
            write!(
                f,
                "\nMost played song: \"{title}\" with {} plays",
                plays.to_formatted_string(&Locale::en)
            )?;
        }
        Ok(())
    }
}
