// Report rendering and the scan-then-write pipeline

use album_report_core::{Report, ReportFormat, Result, ScanOptions};
use album_report_scanner::scan_albums;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Prefix of each album header line
pub const ALBUM_HEADER: &str = "Album: ";
/// Indentation of each song line
pub const SONG_INDENT: &str = "    ";

/// Scan `root` and write the report to `output`.
///
/// The root is scanned completely before `output` is opened, so a missing
/// root never creates or truncates the output file. An error while writing
/// leaves whatever was already written in place.
///
/// # Errors
///
/// - `Error::NotFound` if `root` is missing or not a directory
/// - `Error::Io` if the walk fails or `output` cannot be written
pub fn generate(
    root: &Path,
    output: &Path,
    options: &ScanOptions,
    format: ReportFormat,
) -> Result<Report> {
    let report = scan_albums(root, options)?;

    debug!(output = %output.display(), ?format, "writing report");
    let mut writer = BufWriter::new(File::create(output)?);
    write_report(&report, format, &mut writer)?;
    writer.flush()?;

    info!(
        output = %output.display(),
        albums = report.album_count(),
        songs = report.song_count(),
        "report written"
    );
    Ok(report)
}

pub fn write_report<W: Write>(
    report: &Report,
    format: ReportFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(report, writer),
        ReportFormat::Json => write_json(report, writer),
    }
}

/// Write the indented text report, one block per album:
///
/// ```text
/// Album: <album_name>
///     <song_name>
///
/// ```
pub fn write_text<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    for album in report.albums() {
        writeln!(writer, "{}{}", ALBUM_HEADER, album.name)?;
        for song in &album.songs {
            writeln!(writer, "{}{}", SONG_INDENT, song.name)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Render the report into a string (used for console listing)
pub fn render(report: &Report, format: ReportFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_report(report, format, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
