use std::path::Path;

use crate::error::SeedError;
use crate::library::{Catalog, Song};

const BUILTIN_SONGS: &str = include_str!("../data/songs.json");

/// The demo song list shipped with the app.
pub fn builtin_songs() -> Result<Vec<Song>, SeedError> {
    Ok(serde_json::from_str(BUILTIN_SONGS)?)
}

/// Read a JSON array of songs from disk.
pub fn load_songs(path: impl AsRef<Path>) -> Result<Vec<Song>, SeedError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&contents)?)
}

/// Build the starting catalog.
///
/// Uses the song list at `path` when given and readable, otherwise the
/// built-in demo songs. Songs with a repeated id are dropped after the first.
pub fn seed_catalog(path: Option<&Path>) -> Catalog {
    if let Some(path) = path {
        match load_songs(path) {
            Ok(songs) => {
                tracing::info!("Loaded {} songs from {}", songs.len(), path.display());
                return Catalog::with_songs(songs);
            }
            Err(e) => {
                tracing::error!("Failed to load songs from {}: {}", path.display(), e);
            }
        }
    }

    match builtin_songs() {
        Ok(songs) => Catalog::with_songs(songs),
        Err(e) => {
            tracing::error!("Built-in song list is invalid: {}", e);
            Catalog::new()
        }
    }
}
