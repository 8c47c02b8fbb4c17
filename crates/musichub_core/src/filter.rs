use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::library::Song;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Title,
    Artist,
    Album,
    Year,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Title, SortKey::Artist, SortKey::Album, SortKey::Year];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Artist => "Artist",
            SortKey::Album => "Album",
            SortKey::Year => "Year",
        }
    }

    /// The key after this one, wrapping around.
    pub fn next(&self) -> SortKey {
        match self {
            SortKey::Title => SortKey::Artist,
            SortKey::Artist => SortKey::Album,
            SortKey::Album => SortKey::Year,
            SortKey::Year => SortKey::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }
}

/// Search, exact-match selectors and sort order for the song list.
///
/// An empty string in `search`, `artist`, `album` or `genre` means "no
/// constraint" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub search: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub sort_by: SortKey,
    pub sort_order: SortDirection,
}

impl FilterOptions {
    /// True when the song passes every active constraint.
    ///
    /// Search is a case-insensitive substring match against title, artist or
    /// album. Artist, album and genre selectors must match exactly.
    pub fn matches(&self, song: &Song) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            song.title.to_lowercase().contains(&needle)
                || song.artist.to_lowercase().contains(&needle)
                || song.album.to_lowercase().contains(&needle)
        };

        matches_search
            && (self.artist.is_empty() || song.artist == self.artist)
            && (self.album.is_empty() || song.album == self.album)
            && (self.genre.is_empty() || song.genre == self.genre)
    }

    /// Order two songs by the configured key and direction.
    ///
    /// Only the comparison outcome is reversed for descending order, so a
    /// stable sort keeps ties in their original order either way.
    pub fn compare(&self, a: &Song, b: &Song) -> Ordering {
        let ordering = match self.sort_by {
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::Artist => a.artist.to_lowercase().cmp(&b.artist.to_lowercase()),
            SortKey::Album => a.album.to_lowercase().cmp(&b.album.to_lowercase()),
            SortKey::Year => a.year.cmp(&b.year),
        };

        match self.sort_order {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Whether any search or selector constraint is active.
    pub fn is_filtering(&self) -> bool {
        !(self.search.is_empty()
            && self.artist.is_empty()
            && self.album.is_empty()
            && self.genre.is_empty())
    }
}

/// Filter then stable-sort `songs`. A pure function of its inputs.
pub fn filter_and_sort(songs: &[Song], filters: &FilterOptions) -> Vec<Song> {
    let mut result: Vec<Song> = songs
        .iter()
        .filter(|song| filters.matches(song))
        .cloned()
        .collect();

    result.sort_by(|a, b| filters.compare(a, b));
    result
}
