use super::{OutputFormat, ScanArgs};
use album_report_core::Report;
use album_report_generator::render;
use album_report_scanner::scan_albums;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Print the album report for `root` to stdout
pub fn run(root: PathBuf, scan: ScanArgs, format: OutputFormat) -> Result<()> {
    let (report, listing) = build_listing(&root, scan, format)?;

    if report.is_empty() {
        eprintln!("⚠ No album folders found in {}", root.display());
    }

    print!("{}", listing);
    Ok(())
}

fn build_listing(root: &Path, scan: ScanArgs, format: OutputFormat) -> Result<(Report, String)> {
    let report = scan_albums(root, &scan.into())
        .with_context(|| format!("Failed to scan albums in {}", root.display()))?;
    let listing = render(&report, format.into())?;
    Ok((report, listing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sorted() -> ScanArgs {
        ScanArgs {
            sort: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_listing_text() {
        let root = TempDir::new().unwrap();
        let album = root.path().join("Pophits 00-24 Vol1");
        fs::create_dir(&album).unwrap();
        fs::write(album.join("02 - Second.mp3"), b"audio").unwrap();
        fs::write(album.join("01 - First.mp3"), b"audio").unwrap();

        let (report, listing) = build_listing(root.path(), sorted(), OutputFormat::Text).unwrap();
        assert_eq!(report.song_count(), 2);
        assert_eq!(
            listing,
            "Album: Pophits 00-24 Vol1\n    01 - First.mp3\n    02 - Second.mp3\n\n"
        );
    }

    #[test]
    fn test_run_empty_root_succeeds() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("loose.mp3"), b"audio").unwrap();

        let (report, listing) = build_listing(root.path(), sorted(), OutputFormat::Text).unwrap();
        assert!(report.is_empty());
        assert!(listing.is_empty());

        run(root.path().to_path_buf(), sorted(), OutputFormat::Text).unwrap();
    }

    #[test]
    fn test_run_missing_root_reports_path() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("Jukebox songs");

        let err = run(root.clone(), sorted(), OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("Failed to scan albums in"));
        assert!(err.to_string().contains("Jukebox songs"));
        assert!(format!("{:#}", err).contains("Not found or not a directory"));
    }
}
