use std::{
    borrow::{Borrow, Cow},
    cmp::Ordering,
    fmt,
};

use cadence_collections::Comparator;
use cadence_common::{Result, error::Error, verify_arg, verify_data};
use cadence_text_index::{Collation, TextRecord};
use num_format::{Locale, ToFormattedString};

/// Album shown for songs created from a title alone.
pub const UNKNOWN_ALBUM: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub album: String,
    pub length_secs: u32,
    pub release_year: i32,
    pub plays: u64,
    pub lyrics: String,
}

impl Song {
    /// Creates a song. Surrounding whitespace is trimmed from the text fields, as the
    /// song file would on read.
    pub fn new(
        title: impl Into<String>,
        album: impl Into<String>,
        length_secs: u32,
        release_year: i32,
        plays: u64,
        lyrics: impl Into<String>,
    ) -> Song {
        Song {
            title: trimmed(title.into()),
            album: trimmed(album.into()),
            length_secs,
            release_year,
            plays,
            lyrics: trimmed(lyrics.into()),
        }
    }

    /// Checks that the song reads back unchanged after a write to the song file.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for a blank title, or for a text field that
    /// spans lines or carries surrounding whitespace.
    pub fn validate(&self) -> Result<()> {
        let title = self.title.as_str();
        verify_arg!(title, !title.trim().is_empty());
        for (name, text) in [
            ("title", title),
            ("album", self.album.as_str()),
            ("lyrics", self.lyrics.as_str()),
        ] {
            if text.contains(['\n', '\r']) || text.trim() != text {
                return Err(Error::invalid_arg(
                    name,
                    format!("{text:?} does not fit on a single trimmed line"),
                ));
            }
        }
        Ok(())
    }

    /// A song carrying only a title, used as a lookup key.
    pub fn with_title(title: impl Into<String>) -> Song {
        Song::new(title, UNKNOWN_ALBUM, 0, 0, 0, "")
    }

    /// Length formatted as zero-padded `MM:SS`.
    pub fn length_string(&self) -> String {
        format!("{:02}:{:02}", self.length_secs / 60, self.length_secs % 60)
    }

    /// Parses an `MM:SS` length into seconds.
    pub fn parse_length(text: &str) -> Result<u32> {
        let invalid = || Error::invalid_format("length", format!("expected MM:SS, got {text:?}"));
        let (minutes, seconds) = text.trim().split_once(':').ok_or_else(invalid)?;
        let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;
        let seconds: u32 = seconds.trim().parse().map_err(|_| invalid())?;
        verify_data!(length, seconds < 60);
        minutes
            .checked_mul(60)
            .and_then(|secs| secs.checked_add(seconds))
            .ok_or_else(invalid)
    }

    pub fn formatted_plays(&self) -> String {
        self.plays.to_formatted_string(&Locale::en)
    }
}

fn trimmed(text: String) -> String {
    if text.trim().len() == text.len() {
        text
    } else {
        text.trim().to_string()
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Album: {}", self.album)?;
        writeln!(f, "Length: {}", self.length_string())?;
        writeln!(f, "Release Date: {}", self.release_year)?;
        writeln!(f, "Plays: {}", self.formatted_plays())?;
        write!(f, "Lyrics: {}", self.lyrics)
    }
}

impl TextRecord for Song {
    fn text_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.lyrics.as_str()),
            Cow::Borrowed(self.album.as_str()),
            Cow::Owned(self.release_year.to_string()),
        ]
    }
}

/// Orders songs by title, case-insensitively.
pub fn by_title<S: Borrow<Song>>(left: &S, right: &S) -> Ordering {
    SongOrder::default().compare(left, right)
}

/// Orders songs by release year.
pub fn by_year<S: Borrow<Song>>(left: &S, right: &S) -> Ordering {
    left.borrow().release_year.cmp(&right.borrow().release_year)
}

/// Title order under a configurable [`Collation`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SongOrder {
    collation: Collation,
}

impl SongOrder {
    pub fn new(collation: Collation) -> SongOrder {
        SongOrder { collation }
    }

    pub fn collation(&self) -> Collation {
        self.collation
    }

    /// Compares a bare title against a song's title.
    pub fn compare_title(&self, title: &str, song: &Song) -> Ordering {
        self.collation.compare(title, &song.title)
    }
}

impl<S: Borrow<Song>> Comparator<S> for SongOrder {
    fn compare(&self, left: &S, right: &S) -> Ordering {
        self.collation
            .compare(&left.borrow().title, &right.borrow().title)
    }
}
