use std::collections::{HashMap, HashSet};

use crate::library::Song;

/// Reported as the most popular artist of an empty catalog.
pub const NO_ARTIST: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_songs: usize,
    pub total_artists: usize,
    pub total_genres: usize,
    pub most_popular_artist: String,
}

impl CatalogStats {
    /// Aggregate counts over every song.
    ///
    /// The most popular artist is the one with the most songs; on a tie the
    /// artist that appears first in `songs` wins.
    pub fn from_songs(songs: &[Song]) -> Self {
        let mut artist_counts: HashMap<&str, usize> = HashMap::new();
        let mut genres: HashSet<&str> = HashSet::new();

        for song in songs {
            *artist_counts.entry(song.artist.as_str()).or_default() += 1;
            genres.insert(song.genre.as_str());
        }

        let mut most_popular: Option<(&str, usize)> = None;
        for song in songs {
            let count = artist_counts[song.artist.as_str()];
            match most_popular {
                Some((_, best)) if best >= count => {}
                _ => most_popular = Some((song.artist.as_str(), count)),
            }
        }

        Self {
            total_songs: songs.len(),
            total_artists: artist_counts.len(),
            total_genres: genres.len(),
            most_popular_artist: most_popular
                .map(|(artist, _)| artist.to_string())
                .unwrap_or_else(|| NO_ARTIST.to_string()),
        }
    }
}
