//! Command line arguments and the conversion entry point.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};
use gherkin_markdown::{LabelFilter, convert_file_to_string, convert_files};
use tracing::info;

use crate::config::LogLevel;
use crate::error::CliError;

/// Gherkin to Markdown converter.
///
/// Converts a single feature file to stdout, or every `.feature` file below
/// a source directory into a destination directory.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "g2md", version, about)]
pub struct Args {
    /// `<file>` to convert, or `<srcdir> <destdir>` to convert a tree.
    #[arg(value_name = "PATH", required = true, num_args = 1..=2)]
    pub paths: Vec<PathBuf>,

    /// Comma-separated tags; features and scenarios carrying any are skipped.
    #[arg(
        long = "ignoretags",
        value_name = "TAGS",
        default_value = "",
        visible_alias = "ignore-tags",
        alias = "ignoretag"
    )]
    pub ignore_tags: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

/// What the positional arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Convert one file and write the Markdown to the output stream.
    File(PathBuf),
    /// Convert a directory tree into another directory.
    Directory {
        /// Root searched for `.feature` files.
        source: PathBuf,
        /// Root receiving the `.md` files.
        destination: PathBuf,
    },
}

impl Args {
    /// Resolve the positional arguments into a [`Mode`].
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidArguments` unless exactly one or two paths
    /// were given.
    pub fn mode(&self) -> Result<Mode, CliError> {
        match self.paths.as_slice() {
            [file] => Ok(Mode::File(file.clone())),
            [source, destination] => Ok(Mode::Directory {
                source: source.clone(),
                destination: destination.clone(),
            }),
            other => Err(CliError::InvalidArguments(format!(
                "expected <file> or <srcdir> <destdir>, got {} paths",
                other.len()
            ))),
        }
    }

    /// The label filter described by `--ignoretags`.
    #[must_use]
    pub fn filter(&self) -> LabelFilter {
        LabelFilter::from_csv(&self.ignore_tags)
    }
}

/// Run the conversion described by `args`.
///
/// Single-file output goes to `out`; directory mode writes files and leaves
/// `out` untouched.
///
/// # Errors
///
/// Returns the first conversion failure, with the offending path as context.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let filter = args.filter();
    match args.mode()? {
        Mode::File(path) => {
            let markdown = convert_file_to_string(&path, &filter)
                .wrap_err_with(|| format!("failed to convert {}", path.display()))?;
            out.write_all(markdown.as_bytes())
                .and_then(|()| out.flush())
                .map_err(CliError::from)?;
        }
        Mode::Directory {
            source,
            destination,
        } => {
            let count = convert_files(&source, &destination, &filter).wrap_err_with(|| {
                format!(
                    "failed to convert {} into {}",
                    source.display(),
                    destination.display()
                )
            })?;
            info!(count, "conversion finished");
        }
    }
    Ok(())
}
