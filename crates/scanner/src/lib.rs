// Two-level album/song enumeration

use album_report_core::config::ensure_root_dir;
use album_report_core::{Album, EntryOrder, Report, Result, ScanOptions, Song, entry_name};
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Depth of album directories below the root
const ALBUM_DEPTH: usize = 1;
/// Depth of song files below the root
const SONG_DEPTH: usize = 2;

/// Enumerate the albums under `root` and the songs inside each album.
///
/// Only directories directly under `root` become albums, and only regular
/// files directly inside an album become songs. Symlinks are classified by
/// their target. Files under the root, directories nested inside an album,
/// dangling links and links back to an ancestor are skipped. Nothing below
/// `SONG_DEPTH` is read.
///
/// # Errors
///
/// - `Error::NotFound` if `root` is missing or not a directory
/// - `Error::Io` if any directory cannot be read during the walk
pub fn scan_albums(root: &Path, options: &ScanOptions) -> Result<Report> {
    ensure_root_dir(root)?;
    debug!(root = %root.display(), ?options, "scanning albums");

    let mut walker = WalkDir::new(root)
        .min_depth(ALBUM_DEPTH)
        .max_depth(SONG_DEPTH)
        .follow_links(true);
    if options.order == EntryOrder::FileName {
        walker = walker.sort_by_file_name();
    }

    let mut albums: Vec<Album> = Vec::new();

    // Walk is depth-first pre-order, so an album's songs directly follow it
    for entry in walker
        .into_iter()
        .filter_entry(|e| e.depth() != ALBUM_DEPTH || options.accepts_album(&dir_entry_name(e)))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_skippable_link_error(&err) => {
                debug!(path = ?err.path(), error = %err, "skipping unresolvable link");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        // Target's type when the entry is a link
        let file_type = entry.file_type();

        match entry.depth() {
            ALBUM_DEPTH if file_type.is_dir() => {
                let album = Album::new(dir_entry_name(&entry), entry.path());
                debug!(
                    album = %album.name,
                    path = %album.path.display(),
                    linked = entry.path_is_symlink(),
                    "found album"
                );
                albums.push(album);
            }
            SONG_DEPTH if file_type.is_file() => {
                let name = dir_entry_name(&entry);
                if !options.accepts_song(&name) {
                    debug!(path = %entry.path().display(), "filtered song");
                    continue;
                }
                if let Some(album) = albums.last_mut() {
                    album.songs.push(Song::new(name));
                }
            }
            _ => debug!(path = %entry.path().display(), "skipping entry"),
        }
    }

    let report = Report::new(albums);
    debug!(
        albums = report.album_count(),
        songs = report.song_count(),
        "scan complete"
    );
    Ok(report)
}

fn dir_entry_name(entry: &DirEntry) -> String {
    entry_name(entry.path())
}

/// Dangling symlinks and links that loop back to an ancestor
fn is_skippable_link_error(err: &walkdir::Error) -> bool {
    if err.loop_ancestor().is_some() {
        return true;
    }
    err.path().is_some_and(|path| {
        let is_link = fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        is_link && !path.exists()
    })
}
