use serde::Serialize;
use std::path::{Path, PathBuf};

/// A directory directly under the scanned root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    pub name: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub songs: Vec<Song>,
}

impl Album {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            songs: Vec::new(),
        }
    }

    pub fn with_songs<I, S>(mut self, songs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.songs.extend(songs.into_iter().map(Song::new));
        self
    }
}

/// A regular file directly inside an album directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Song {
    pub name: String,
}

impl Song {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Albums in the order they were enumerated.
///
/// Built once by the scanner and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    albums: Vec<Album>,
}

impl Report {
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn song_count(&self) -> usize {
        self.albums.iter().map(|a| a.songs.len()).sum()
    }
}

/// File name of a path as an owned string, replacing invalid UTF-8
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
