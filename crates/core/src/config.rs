use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File written into the root when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "albums_list.txt";

/// Extensions accepted by `ScanOptions::audio_only` (compared lowercase)
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "wav", "m4a", "aac", "ogg"];

/// Order of albums and songs within the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryOrder {
    /// Whatever the file system yields
    #[default]
    Filesystem,
    /// Byte-wise by file name
    FileName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub order: EntryOrder,
    /// Ignore dot-prefixed albums and songs
    pub skip_hidden: bool,
    /// Only list songs with an extension in `AUDIO_EXTENSIONS`
    pub audio_only: bool,
}

impl ScanOptions {
    /// Whether an album-level entry name passes the filters
    pub fn accepts_album(&self, name: &str) -> bool {
        !(self.skip_hidden && is_hidden(name))
    }

    /// Whether a song-level entry name passes the filters
    pub fn accepts_song(&self, name: &str) -> bool {
        if self.skip_hidden && is_hidden(name) {
            return false;
        }
        !self.audio_only || is_audio_file(Path::new(name))
    }
}

/// Resolve the output path, defaulting to `<root>/albums_list.txt`
pub fn output_path(root: &Path, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| root.join(DEFAULT_OUTPUT_FILE))
}

/// Fail with `Error::NotFound` unless `root` is an existing directory.
///
/// Follows symlinks, so a link to a directory is an acceptable root.
pub fn ensure_root_dir(root: &Path) -> Result<()> {
    match root.metadata() {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotFound(root.to_path_buf())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::NotFound(root.to_path_buf()))
        }
        Err(err) => Err(err.into()),
    }
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_default() {
        let root = Path::new("/music/Jukebox songs");
        assert_eq!(
            output_path(root, None),
            PathBuf::from("/music/Jukebox songs/albums_list.txt")
        );
        assert_eq!(
            output_path(root, Some(PathBuf::from("out.txt"))),
            PathBuf::from("out.txt")
        );
    }

    #[test]
    fn test_is_audio_file_case_insensitive() {
        assert!(is_audio_file(Path::new("01 - Thunderstruck.mp3")));
        assert!(is_audio_file(Path::new("track.FLAC")));
        assert!(is_audio_file(Path::new("track.M4a")));
        assert!(!is_audio_file(Path::new("cover.jpg")));
        assert!(!is_audio_file(Path::new("README")));
    }

    #[test]
    fn test_scan_options_filters() {
        let all = ScanOptions::default();
        assert!(all.accepts_album(".cache"));
        assert!(all.accepts_song("cover.jpg"));

        let strict = ScanOptions {
            skip_hidden: true,
            audio_only: true,
            ..Default::default()
        };
        assert!(!strict.accepts_album(".cache"));
        assert!(strict.accepts_album("Back in Black"));
        assert!(!strict.accepts_song(".hidden.mp3"));
        assert!(!strict.accepts_song("cover.jpg"));
        assert!(strict.accepts_song("Hells Bells.mp3"));
    }

    #[test]
    fn test_ensure_root_dir() {
        let missing = Path::new("/definitely/not/a/real/album/root");
        assert!(matches!(ensure_root_dir(missing), Err(Error::NotFound(_))));
        assert!(ensure_root_dir(&std::env::temp_dir()).is_ok());
    }
}
