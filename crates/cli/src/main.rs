mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use commands::{OutputFormat, ScanArgs};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "album-report")]
#[command(version, about = "List album folders and their songs as a text report", long_about = None)]
struct Cli {
    /// Log scanning details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Write the album report to a file
    Generate {
        /// Directory whose subdirectories are albums
        root: PathBuf,

        /// Report file to create or overwrite [default: <ROOT>/albums_list.txt]
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        scan: ScanArgs,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the album report to stdout
    List {
        /// Directory whose subdirectories are albums
        root: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Generate {
            root,
            output,
            scan,
            format,
        } => commands::generate::run(root, output, scan, format),
        Command::List { root, scan, format } => commands::list::run(root, scan, format),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "album-report", &mut io::stdout());
            Ok(())
        }
    }
}

/// `RUST_LOG` takes precedence over `--verbose`
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["album-report", "generate", "/music"]).unwrap();
        match cli.command {
            Command::Generate {
                root,
                output,
                scan,
                format,
            } => {
                assert_eq!(root, PathBuf::from("/music"));
                assert!(output.is_none());
                assert!(!scan.sort && !scan.skip_hidden && !scan.audio_only);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected generate"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_list_with_flags() {
        let cli = Cli::try_parse_from([
            "album-report",
            "list",
            "/music",
            "--sort",
            "--audio-only",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::List { scan, format, .. } => {
                assert!(scan.sort);
                assert!(scan.audio_only);
                assert!(!scan.skip_hidden);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_generate_requires_root() {
        assert!(Cli::try_parse_from(["album-report", "generate"]).is_err());
    }
}
