//! Plain-text song file.
//!
//! A file is a sequence of six-line records separated by blank lines:
//!
//! ```text
//! Nonsense
//! Album: Babble
//! Length: 03:05
//! Release Date: 2011
//! Plays: 1,234,567
//! Lyrics: la la echo
//! ```
//!
//! The `Lyrics: ` prefix is optional on read and commas in the play count are
//! ignored. Fields cannot span lines, and songs that would not read back unchanged
//! (see [`Song::validate`]) are refused by the writer.

use std::{
    borrow::Borrow,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Lines, Write},
    path::Path,
};

use cadence_common::{Result, error::Error, try_or_ret_some_err};
use log::debug;

use crate::song::Song;

/// Streams songs out of a reader, one record at a time.
///
/// The first error ends the stream: later calls to `next` return `None`.
pub struct SongReader<R> {
    lines: Lines<R>,
    line_no: usize,
    failed: bool,
}

impl<R: BufRead> SongReader<R> {
    pub fn new(reader: R) -> SongReader<R> {
        SongReader {
            lines: reader.lines(),
            line_no: 0,
            failed: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    fn next_line(&mut self) -> Option<Result<String>> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line.map_err(|e| Error::io(format!("line {}", self.line_no), e)))
    }

    /// Reads the next line of a started record, which must exist.
    fn expect_line(&mut self, field: &str) -> Result<String> {
        match self.next_line() {
            Some(line) => line,
            None => Err(Error::invalid_format(
                format!("line {}", self.line_no + 1),
                format!("unexpected end of input, expected {field}"),
            )),
        }
    }

    fn labeled_field(&mut self, label: &str) -> Result<String> {
        let line = self.expect_line(label)?;
        let value = line
            .trim()
            .strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| self.format_error(format!("expected '{label}: <value>', got {line:?}")))?;
        Ok(value.trim().to_string())
    }

    fn format_error(&self, message: String) -> Error {
        Error::invalid_format(format!("line {}", self.line_no), message)
    }

    fn read_record(&mut self, title: String) -> Result<Song> {
        let album = self.labeled_field("Album")?;

        let length = self.labeled_field("Length")?;
        let length_secs = Song::parse_length(&length)
            .map_err(|e| self.format_error(e.to_string()))?;

        let year = self.labeled_field("Release Date")?;
        let release_year: i32 = year
            .parse()
            .map_err(|_| self.format_error(format!("invalid release year {year:?}")))?;

        let plays = self.labeled_field("Plays")?;
        let plays: u64 = plays
            .replace(',', "")
            .parse()
            .map_err(|_| self.format_error(format!("invalid play count {plays:?}")))?;

        let lyrics = self.expect_line("Lyrics")?;
        let lyrics = lyrics.trim();
        let lyrics = lyrics.strip_prefix("Lyrics:").unwrap_or(lyrics).trim();

        Ok(Song::new(title, album, length_secs, release_year, plays, lyrics))
    }

    fn next_record(&mut self) -> Option<Result<Song>> {
        loop {
            let line = try_or_ret_some_err!(self.next_line()?);
            let title = line.trim();
            if !title.is_empty() {
                return Some(self.read_record(title.to_string()));
            }
        }
    }
}

impl<R: BufRead> Iterator for SongReader<R> {
    type Item = Result<Song>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let record = self.next_record();
        if matches!(record, Some(Err(_))) {
            self.failed = true;
        }
        record
    }
}

/// Reads every song from `reader`.
pub fn read_songs(reader: impl BufRead) -> Result<Vec<Song>> {
    SongReader::new(reader).collect()
}

/// Collects `songs`, failing on the first one [`Song::validate`] rejects.
fn validated<S: Borrow<Song>>(songs: impl IntoIterator<Item = S>) -> Result<Vec<S>> {
    songs
        .into_iter()
        .map(|song| song.borrow().validate().map(|()| song))
        .collect()
}

/// Writes each song followed by a blank line.
///
/// # Errors
///
/// Every song is validated before the first byte is written, so an invalid song
/// leaves `writer` untouched.
pub fn write_songs<S: Borrow<Song>>(
    mut writer: impl Write,
    songs: impl IntoIterator<Item = S>,
) -> Result<()> {
    for song in validated(songs)? {
        writeln!(writer, "{}\n", song.borrow()).map_err(|e| Error::io("write songs", e))?;
    }
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<Song>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path.display().to_string(), e))?;
    let songs = read_songs(BufReader::new(file))?;
    debug!("read {} songs from {}", songs.len(), path.display());
    Ok(songs)
}

pub fn save<S: Borrow<Song>>(path: impl AsRef<Path>, songs: impl IntoIterator<Item = S>) -> Result<()> {
    let path = path.as_ref();
    let songs = validated(songs)?;
    let file = File::create(path).map_err(|e| Error::io(path.display().to_string(), e))?;
    let mut writer = BufWriter::new(file);
    write_songs(&mut writer, songs)?;
    writer
        .flush()
        .map_err(|e| Error::io(path.display().to_string(), e))?;
    debug!("wrote songs to {}", path.display());
    Ok(())
}
