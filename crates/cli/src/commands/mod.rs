pub mod generate;
pub mod list;

use album_report_core::{EntryOrder, ReportFormat, ScanOptions};
use clap::{Args, ValueEnum};

/// Flags shared by every command that scans a root
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Sort albums and songs by file name instead of file-system order
    #[arg(long)]
    pub sort: bool,

    /// Skip albums and songs whose names start with a dot
    #[arg(long)]
    pub skip_hidden: bool,

    /// Only list audio files (mp3, flac, wav, m4a, aac, ogg)
    #[arg(long)]
    pub audio_only: bool,
}

impl From<ScanArgs> for ScanOptions {
    fn from(args: ScanArgs) -> Self {
        ScanOptions {
            order: if args.sort {
                EntryOrder::FileName
            } else {
                EntryOrder::Filesystem
            },
            skip_hidden: args.skip_hidden,
            audio_only: args.audio_only,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}
