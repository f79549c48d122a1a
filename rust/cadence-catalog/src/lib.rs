//! Song catalog: the song record, its text file format, play statistics and a
//! searchable title-ordered collection.

pub mod catalog;
pub mod song;
pub mod song_file;
pub mod statistics;

pub use catalog::{Catalog, CatalogConfig};
pub use song::{Song, SongOrder, by_title, by_year};
pub use statistics::CatalogStats;
