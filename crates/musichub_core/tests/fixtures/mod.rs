#![allow(dead_code)]

use musichub_core::{NewSong, Song, SongId};

pub fn song(id: &str, title: &str, artist: &str, year: i32) -> Song {
    Song {
        id: SongId::from(id),
        title: title.to_string(),
        artist: artist.to_string(),
        album: format!("{title} (Single)"),
        genre: "Rock".to_string(),
        duration: "3:30".to_string(),
        year,
        image_url: None,
    }
}

pub fn song_in(id: &str, title: &str, artist: &str, album: &str, genre: &str) -> Song {
    Song {
        album: album.to_string(),
        genre: genre.to_string(),
        ..song(id, title, artist, 2000)
    }
}

pub fn new_song(title: &str, artist: &str) -> NewSong {
    NewSong {
        title: title.to_string(),
        artist: artist.to_string(),
        album: "Demo".to_string(),
        genre: "Pop".to_string(),
        duration: "2:45".to_string(),
        year: 2024,
        image_url: None,
    }
}

pub fn ids(songs: &[Song]) -> Vec<&str> {
    songs.iter().map(|song| song.id.0.as_str()).collect()
}
