use std::collections::BTreeSet;
use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::SongFormError;
use crate::filter::{filter_and_sort, FilterOptions};
use crate::stats::CatalogStats;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(pub String);

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SongId {
    fn from(id: &str) -> Self {
        SongId(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    /// Display string such as `"3:45"`. Not parsed.
    pub duration: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// The fields of a song before the catalog assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub duration: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Default for NewSong {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            genre: String::new(),
            duration: String::new(),
            year: chrono::Local::now().year(),
            image_url: None,
        }
    }
}

impl NewSong {
    fn with_id(self, id: SongId) -> Song {
        Song {
            id,
            title: self.title,
            artist: self.artist,
            album: self.album,
            genre: self.genre,
            duration: self.duration,
            year: self.year,
            image_url: self.image_url,
        }
    }
}

/// Raw text of the add-song form, before it becomes a [`NewSong`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongForm {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub duration: String,
    pub year: String,
}

impl Default for SongForm {
    /// Empty fields, with the year pre-filled to the current year.
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            genre: String::new(),
            duration: String::new(),
            year: NewSong::default().year.to_string(),
        }
    }
}

impl SongForm {
    /// Every field is required. Text is trimmed; the year must parse as an
    /// integer.
    pub fn validate(&self) -> Result<NewSong, SongFormError> {
        let required = |value: &str, name: &'static str| {
            let value = value.trim();
            if value.is_empty() {
                Err(SongFormError::Missing(name))
            } else {
                Ok(value.to_string())
            }
        };

        let title = required(&self.title, "Title")?;
        let artist = required(&self.artist, "Artist")?;
        let album = required(&self.album, "Album")?;
        let genre = required(&self.genre, "Genre")?;
        let duration = required(&self.duration, "Duration")?;
        let year = required(&self.year, "Year")?
            .parse()
            .map_err(|_| SongFormError::InvalidYear)?;

        Ok(NewSong {
            title,
            artist,
            album,
            genre,
            duration,
            year,
            image_url: None,
        })
    }
}

/// Hands out song ids derived from the wall clock in milliseconds, bumped
/// so that every id is strictly greater than the last one issued or seen.
#[derive(Debug, Default)]
struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    fn next(&mut self) -> SongId {
        let now = chrono::Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        SongId(self.last.to_string())
    }

    fn observe(&mut self, id: &SongId) {
        if let Ok(n) = id.0.parse::<i64>() {
            self.last = self.last.max(n);
        }
    }
}

/// Distinct values available to the artist, album and genre selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChoices {
    pub artists: Vec<String>,
    pub albums: Vec<String>,
    pub genres: Vec<String>,
}

/// The in-memory song collection and the active filter configuration.
///
/// Everything shown in the library view is derived from these two on
/// demand; nothing derived is stored.
#[derive(Debug, Default)]
pub struct Catalog {
    songs: Vec<Song>,
    filters: FilterOptions,
    ids: IdGenerator,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from existing songs, keeping the first song for any
    /// repeated id.
    pub fn with_songs(songs: impl IntoIterator<Item = Song>) -> Self {
        let mut catalog = Self::new();
        for song in songs {
            if catalog.get(&song.id).is_some() {
                tracing::warn!(id = %song.id, title = %song.title, "Skipping song with duplicate id");
                continue;
            }
            catalog.insert(song);
        }
        catalog
    }

    /// Append a song that already has an id. Returns false, leaving the
    /// catalog unchanged, if the id is taken.
    pub fn insert(&mut self, song: Song) -> bool {
        if self.get(&song.id).is_some() {
            return false;
        }
        self.ids.observe(&song.id);
        self.songs.push(song);
        true
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn get(&self, id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|song| &song.id == id)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    /// Replace the whole filter configuration.
    pub fn set_filters(&mut self, filters: FilterOptions) {
        self.filters = filters;
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterOptions::default();
    }

    /// Songs passing the current filters, in the configured order.
    pub fn filtered_sorted(&self) -> Vec<Song> {
        filter_and_sort(&self.songs, &self.filters)
    }

    /// Statistics over the whole collection, ignoring filters.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_songs(&self.songs)
    }

    /// Sorted distinct artists, albums and genres.
    pub fn filter_choices(&self) -> FilterChoices {
        let mut artists = BTreeSet::new();
        let mut albums = BTreeSet::new();
        let mut genres = BTreeSet::new();

        for song in &self.songs {
            artists.insert(song.artist.clone());
            albums.insert(song.album.clone());
            genres.insert(song.genre.clone());
        }

        FilterChoices {
            artists: artists.into_iter().collect(),
            albums: albums.into_iter().collect(),
            genres: genres.into_iter().collect(),
        }
    }

    /// Assign a fresh id and append the song.
    pub fn add_song(&mut self, new_song: NewSong) -> Song {
        let song = new_song.with_id(self.ids.next());
        tracing::info!(id = %song.id, title = %song.title, "Added song");
        self.songs.push(song.clone());
        song
    }

    /// Remove the song with this id. Unknown ids are ignored.
    pub fn delete_song(&mut self, id: &SongId) -> Option<Song> {
        let index = self.songs.iter().position(|song| &song.id == id)?;
        let song = self.songs.remove(index);
        tracing::info!(id = %song.id, title = %song.title, "Deleted song");
        Some(song)
    }
}
