//! Converting feature files and directory trees.
//!
//! Directory conversion discovers every `.feature` file below the source
//! root, mirrors its relative path under the destination root with a `.md`
//! extension and converts the files in parallel. The first failure is
//! returned once in-flight conversions have finished; files already written
//! are left in place.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::filter::LabelFilter;
use crate::parse::parse_document;
use crate::render::render;

/// Extension of Gherkin source files.
pub const FEATURE_EXTENSION: &str = "feature";

/// Extension of generated Markdown files.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Parse Gherkin `source` and render it to Markdown.
///
/// # Errors
///
/// Returns an error when `source` cannot be parsed.
pub fn convert(source: &str, filter: &LabelFilter) -> Result<String> {
    let document = parse_document(source)?;
    Ok(render(&document, filter))
}

/// Read a feature file and render it to Markdown.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn convert_file_to_string(path: &Path, filter: &LabelFilter) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    convert(&text, filter)
}

/// Convert `source` and write the Markdown to `destination`, replacing any
/// existing file.
///
/// # Errors
///
/// Returns an error when the source cannot be read or parsed, or when the
/// destination cannot be written.
pub fn convert_file(source: &Path, destination: &Path, filter: &LabelFilter) -> Result<()> {
    let markdown = convert_file_to_string(source, filter)?;
    fs::write(destination, markdown).map_err(|err| Error::Write {
        path: destination.to_path_buf(),
        source: err,
    })?;
    debug!(
        source = %source.display(),
        destination = %destination.display(),
        "converted feature file"
    );
    Ok(())
}

/// Convert every feature file below `source_dir` into `dest_dir`.
///
/// Returns the number of files written.
///
/// # Errors
///
/// Returns the first error reported by any conversion, or an error when the
/// source directory cannot be traversed.
pub fn convert_files(source_dir: &Path, dest_dir: &Path, filter: &LabelFilter) -> Result<usize> {
    let sources = collect_feature_files(source_dir)?;

    sources.par_iter().try_for_each(|source| {
        let destination = destination_path(source_dir, dest_dir, source);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|err| Error::CreateDir {
                path: parent.to_path_buf(),
                source: err,
            })?;
        }
        convert_file(source, &destination, filter)
    })?;

    info!(
        count = sources.len(),
        source = %source_dir.display(),
        destination = %dest_dir.display(),
        "converted feature directory"
    );
    Ok(sources.len())
}

/// Map a feature file below `source_root` to its Markdown path below
/// `dest_root`.
///
/// ```
/// use std::path::Path;
/// use gherkin_markdown::convert::destination_path;
///
/// let dest = destination_path(
///     Path::new("features"),
///     Path::new("docs"),
///     Path::new("features/billing/pay.feature"),
/// );
/// assert_eq!(dest, Path::new("docs/billing/pay.md"));
/// ```
#[must_use]
pub fn destination_path(source_root: &Path, dest_root: &Path, source: &Path) -> PathBuf {
    let relative = source.strip_prefix(source_root).unwrap_or(source);
    dest_root.join(relative).with_extension(MARKDOWN_EXTENSION)
}

fn is_feature_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FEATURE_EXTENSION))
}

fn is_feature_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && is_feature_file(entry.path())
}

/// List feature files below `base` in a stable order.
///
/// # Errors
///
/// Returns an error when `base` or any directory below it cannot be read.
pub fn collect_feature_files(base: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for next in WalkDir::new(base).follow_links(false) {
        let entry = next?;
        if is_feature_entry(&entry) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
