use musichub_core::{builtin_songs, seed_catalog, SongId};

#[test]
fn builtin_songs_parse_with_unique_ids() {
    let songs = builtin_songs().unwrap();
    assert!(!songs.is_empty());

    let mut ids: Vec<&SongId> = songs.iter().map(|song| &song.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), songs.len());
}

#[test]
fn seed_catalog_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let catalog = seed_catalog(Some(missing.as_path()));
    assert_eq!(catalog.len(), builtin_songs().unwrap().len());

    let catalog = seed_catalog(None);
    assert_eq!(catalog.len(), builtin_songs().unwrap().len());
}

#[test]
fn seed_catalog_reads_song_file_and_drops_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("songs.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "a", "title": "One", "artist": "X", "album": "Y", "genre": "Z", "duration": "1:00", "year": 2001},
            {"id": "a", "title": "Dup", "artist": "X", "album": "Y", "genre": "Z", "duration": "1:00", "year": 2002},
            {"id": "b", "title": "Two", "artist": "X", "album": "Y", "genre": "Z", "duration": "2:00", "year": 2003, "imageUrl": "cover.png"}
        ]"#,
    )
    .unwrap();

    let catalog = seed_catalog(Some(path.as_path()));
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.songs()[0].title, "One");
    assert_eq!(catalog.songs()[1].image_url.as_deref(), Some("cover.png"));
}
