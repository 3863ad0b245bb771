use super::{OutputFormat, ScanArgs};
use album_report_core::ScanOptions;
use album_report_core::config::output_path;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write the album report for `root` to `output` (or `<root>/albums_list.txt`)
pub fn run(
    root: PathBuf,
    output: Option<PathBuf>,
    scan: ScanArgs,
    format: OutputFormat,
) -> Result<()> {
    let output = output_path(&root, output);
    debug!(root = %root.display(), output = %output.display(), "generating album report");
    write_report(&root, &output, scan.into(), format)?;

    println!("Album list saved to {}", output.display());
    Ok(())
}

fn write_report(
    root: &Path,
    output: &Path,
    options: ScanOptions,
    format: OutputFormat,
) -> Result<()> {
    album_report_generator::generate(root, output, &options, format.into()).with_context(|| {
        format!(
            "Failed to generate album report for {} into {}",
            root.display(),
            output.display()
        )
    })?;
    Ok(())
}
