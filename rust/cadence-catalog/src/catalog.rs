use std::{path::Path, sync::Arc};

use cadence_collections::OrderedTree;
use cadence_common::Result;
use cadence_text_index::{Collation, IndexState, InvertedIndex, InvertedIndexConfig};
use log::{debug, info};

use crate::{
    song::{Song, SongOrder, by_year},
    song_file,
    statistics::CatalogStats,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub index: InvertedIndexConfig,
    /// Collation ordering titles in the catalog and in posting lists.
    pub title_collation: Collation,
}

/// A title-ordered song collection with keyword search.
///
/// Songs are shared between the title tree and the posting lists of the index
/// through `Arc`. Any change to the collection leaves the index stale, and the next
/// [`search`](Catalog::search) rebuilds it from the current songs.
pub struct Catalog {
    order: SongOrder,
    songs: OrderedTree<Arc<Song>>,
    len: usize,
    index: InvertedIndex<Arc<Song>, SongOrder>,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Result<Catalog> {
        let order = SongOrder::new(config.title_collation);
        Ok(Catalog {
            order,
            songs: OrderedTree::new(),
            len: 0,
            index: InvertedIndex::with_config(config.index, order)?,
        })
    }

    /// Builds a catalog holding `songs`, with the index built.
    ///
    /// # Errors
    ///
    /// Fails on the first song [`Song::validate`] rejects.
    pub fn from_songs(songs: impl IntoIterator<Item = Song>, config: CatalogConfig) -> Result<Catalog> {
        let mut catalog = Catalog::new(config)?;
        for song in songs {
            song.validate()?;
            catalog.insert(Arc::new(song));
        }
        catalog.rebuild_index()?;
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>, config: CatalogConfig) -> Result<Catalog> {
        let catalog = Catalog::from_songs(song_file::load(path.as_ref())?, config)?;
        info!(
            "loaded {} songs from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Writes every song to `path` in title order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        song_file::save(path, self.songs.iter().map(|song| song.as_ref()))
    }

    /// Adds `song`, which must pass [`Song::validate`] so the catalog can be saved.
    pub fn add_song(&mut self, song: Song) -> Result<Arc<Song>> {
        song.validate()?;
        let song = Arc::new(song);
        self.insert(song.clone());
        self.index.mark_stale();
        Ok(song)
    }

    /// Removes the first song found with a title equal to `title` under the
    /// catalog's collation.
    pub fn remove_song(&mut self, title: &str) -> Option<Arc<Song>> {
        if self.songs.is_empty() {
            return None;
        }
        let order = self.order;
        let removed = self
            .songs
            .remove_by(title, |title: &str, song: &Arc<Song>| {
                order.compare_title(title, song)
            })
            .ok()
            .flatten()?;
        self.len -= 1;
        self.index.mark_stale();
        debug!("removed song {:?}", removed.title);
        Some(removed)
    }

    /// Replaces the song titled `title` with `replacement` and returns the old song.
    /// Nothing changes when no song has that title or `replacement` is invalid.
    pub fn modify_song(&mut self, title: &str, replacement: Song) -> Result<Option<Arc<Song>>> {
        replacement.validate()?;
        let Some(previous) = self.remove_song(title) else {
            return Ok(None);
        };
        self.add_song(replacement)?;
        Ok(Some(previous))
    }

    /// Songs containing `keyword`, in title order. A stale index is rebuilt first.
    pub fn search(&mut self, keyword: &str) -> Result<Vec<Arc<Song>>> {
        if self.index.is_stale() {
            self.rebuild_index()?;
        }
        Ok(self.index.search(keyword).iter().cloned().collect())
    }

    pub fn rebuild_index(&mut self) -> Result<()> {
        self.index.rebuild(self.songs.iter().cloned())
    }

    pub fn find_song(&self, title: &str) -> Option<Arc<Song>> {
        self.songs
            .search_by(title, |title: &str, song: &Arc<Song>| {
                self.order.compare_title(title, song)
            })
            .cloned()
    }

    /// Every song in title order.
    pub fn songs(&self) -> Vec<Arc<Song>> {
        self.songs.iter().cloned().collect()
    }

    /// Every song ordered by release year.
    pub fn songs_by_year(&self) -> Vec<Arc<Song>> {
        self.songs.copy_with(&by_year::<Arc<Song>>).into_sorted_vec()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(self.songs.iter().map(|song| song.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index_state(&self) -> IndexState {
        self.index.state()
    }

    pub fn index(&self) -> &InvertedIndex<Arc<Song>, SongOrder> {
        &self.index
    }

    fn insert(&mut self, song: Arc<Song>) {
        self.songs.insert(song, &self.order);
        self.len += 1;
    }
}
