//! `trellis`: build, check and re-format Trellis layout files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trellis_dsl::FormatOptions;
use trellis_ui::logging::{LoggingConfig, init_logging};
use trellis_ui::{BuildError, Hierarchy, build};

mod rewriter;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(version, about = "Build widget hierarchies from Trellis layout files", long_about = None)]
struct Cli {
    /// Log filter, e.g. "debug" or "trellis_ui=trace" (defaults to RUST_LOG, then "info")
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a file with the built-in toolkit and print its hierarchy
    Build {
        file: PathBuf,
    },

    /// Build each file and report whether it succeeded
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Realign the type-words of a file into one column
    Format {
        file: PathBuf,

        /// Overwrite the file instead of printing the result
        #[arg(long)]
        write: bool,

        /// Where to keep the previous version (with --write)
        #[arg(long, value_name = "DIR", requires = "write")]
        backup_dir: Option<PathBuf>,

        /// Minimum spaces between the longest name and its type-word
        #[arg(
            long,
            default_value_t = FormatOptions::default().min_gutter,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        gutter: usize,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    logging.env_filter = cli.log;
    init_logging(logging);

    match cli.command {
        Commands::Build { file } => {
            let hierarchy = build_file(&file)?;
            print!("{}", hierarchy.dump());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { files } => check(&files),
        Commands::Format { file, write, backup_dir, gutter } => {
            format_file(&file, write, backup_dir, FormatOptions { min_gutter: gutter })?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn build_file(path: &Path) -> Result<Hierarchy> {
    let source = read(path)?;
    build_source(&source, path).map_err(anyhow::Error::from)
}

fn build_source(source: &str, path: &Path) -> Result<Hierarchy, BuildError> {
    build(source, &path.display().to_string())
}

fn check(files: &[PathBuf]) -> Result<ExitCode> {
    let mut failed = 0;
    for file in files {
        let built = match read(file) {
            Ok(source) => build_source(&source, file).map_err(anyhow::Error::from),
            Err(e) => Err(e),
        };
        match built {
            Ok(h) => println!("ok     {} ({} items)", file.display(), h.len()),
            Err(e) => {
                failed += 1;
                println!("error  {}\n{}\n", file.display(), report(&e));
            }
        }
    }
    if failed > 0 {
        log::warn!("{failed} of {} files failed to build", files.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// A build error as it displays itself; anything else with its causes.
fn report(error: &anyhow::Error) -> String {
    match error.downcast_ref::<BuildError>() {
        Some(e) => e.to_string(),
        None => format!("{error:#}"),
    }
}

fn format_file(
    path: &Path,
    write: bool,
    backup_dir: Option<PathBuf>,
    options: FormatOptions,
) -> Result<()> {
    let source = read(path)?;
    let formatted = trellis_dsl::format(&source, &options)
        .with_context(|| format!("Cannot re-format {}", path.display()))?;

    if !write {
        print!("{formatted}");
        return Ok(());
    }
    let backup_dir = backup_dir.unwrap_or_else(|| rewriter::default_backup_dir(path));
    let archived = rewriter::overwrite_original(path, &formatted, &backup_dir)?;
    println!("re-formatted {} (previous version: {})", path.display(), archived.display());
    Ok(())
}
