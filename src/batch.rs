//! Batch processing: one independent task per source file.
//!
//! A document that fails (unreadable, no title, unwritable) is reported
//! and the rest of the batch carries on.

use crate::error::DocError;
use crate::linkcheck::{self, LinkProbe};
use crate::parser;
use crate::render::{PageInfo, Renderer};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Settings shared by every document of a batch.
pub struct BatchOptions<'a> {
    pub input_root: &'a Path,
    pub output_root: &'a Path,
    pub renderer: &'a dyn Renderer,
    pub code_language: &'a str,
    /// Link checking is off when `None`.
    pub probe: Option<&'a dyn LinkProbe>,
}

/// A page written for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub source: PathBuf,
    pub output: PathBuf,
    /// False when an existing page was replaced.
    pub created: bool,
}

/// Counts for a finished batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<Written>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Process every path in parallel and log each outcome in input order.
///
/// Output paths are claimed in input order before anything runs; a later
/// source whose page would land on an already claimed path fails instead
/// of overwriting it.
pub fn run(paths: &[PathBuf], opts: &BatchOptions) -> BatchSummary {
    let clashes = find_clashes(paths, opts);
    let results: Vec<(PathBuf, Result<Written, DocError>)> = paths
        .par_iter()
        .zip(clashes)
        .map(|(path, clash)| {
            let result = match clash {
                Some(e) => Err(e),
                None => process_document(path, opts),
            };
            (path.clone(), result)
        })
        .collect();

    let mut summary = BatchSummary::default();
    for (path, result) in results {
        match result {
            Ok(written) => {
                let action = if written.created { "created" } else { "updated" };
                info!("{} {}", action, written.output.display());
                summary.written.push(written);
            }
            Err(e) if e.is_skip() => {
                warn!("{}", e);
                summary.skipped.push(path);
            }
            Err(e) => {
                error!("{}", e);
                summary.failed.push(path);
            }
        }
    }
    summary
}

/// Read, parse, render and write one source file.
pub fn process_document(path: &Path, opts: &BatchOptions) -> Result<Written, DocError> {
    let content = fs::read_to_string(path).map_err(|source| DocError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = parser::parse(&content).map_err(|source| DocError::Build {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path.display().to_string();
    debug!(document = %name, steps = doc.steps.len(), "parsed");
    for link in doc.resources.iter().filter(|l| l.is_malformed()) {
        warn!(document = %name, link = %link.raw, "malformed link");
    }

    let page = PageInfo::new(source_rel(path, opts.input_root), opts.code_language);
    let output = output_path(path, opts);

    // Link checking runs beside rendering and never affects the page; the
    // document finishes once both are done.
    let ((), written) = rayon::join(
        || {
            if let Some(probe) = opts.probe {
                linkcheck::check_links(&name, &doc.resources, probe);
            }
        },
        || -> Result<bool, DocError> {
            let rendered = opts.renderer.render(&doc, &page);
            let existed = output.exists();
            let write_err = |source| DocError::Write {
                path: output.clone(),
                source,
            };
            fs::create_dir_all(opts.output_root).map_err(write_err)?;
            fs::write(&output, rendered).map_err(write_err)?;
            Ok(!existed)
        },
    );

    Ok(Written {
        source: path.to_path_buf(),
        created: written?,
        output,
    })
}

/// Where the page for `path` is written.
pub fn output_path(path: &Path, opts: &BatchOptions) -> PathBuf {
    opts.output_root
        .join(format!("{}.{}", output_stem(path), opts.renderer.file_extension()))
}

/// One entry per path: the clash error for sources whose output path was
/// already claimed by an earlier source.
fn find_clashes(paths: &[PathBuf], opts: &BatchOptions) -> Vec<Option<DocError>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    paths
        .iter()
        .map(|path| {
            let output = output_path(path, opts);
            if let Some(first) = claimed.get(&output) {
                return Some(DocError::OutputClash {
                    path: path.clone(),
                    first: first.to_path_buf(),
                    output,
                });
            }
            claimed.insert(output, path);
            None
        })
        .collect()
}

/// Path shown in the page banner: relative to the input root if possible.
fn source_rel(path: &Path, input_root: &Path) -> String {
    path.strip_prefix(input_root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

/// "samples/fib.py" → "fib"
pub fn output_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Resolve the list of sources to process.
///
/// Explicit files and `--list-file` entries come first. When both are
/// empty, `input_root` is searched recursively for `extensions`.
pub fn collect_inputs(
    files: &[String],
    list_file: Option<&Path>,
    input_root: &Path,
    extensions: &[String],
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    if let Some(list) = list_file {
        let text = fs::read_to_string(list)
            .with_context(|| format!("failed to read list file: {}", list.display()))?;
        paths.extend(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(PathBuf::from),
        );
    }

    paths.extend(expand_globs(files)?);

    if paths.is_empty() {
        paths = scan_root(input_root, extensions)?;
    }

    let mut seen = HashSet::new();
    paths.retain(|p| seen.insert(p.clone()));
    Ok(paths)
}

/// Expand glob patterns; plain paths are kept even when missing so the
/// failure is reported against that document.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            files.push(PathBuf::from(pattern));
            continue;
        }
        let mut matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        matches.sort();
        files.extend(matches);
    }
    Ok(files)
}

/// Recursive search of `root` for the given extensions, sorted.
fn scan_root(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for ext in extensions {
        let pattern = root.join("**").join(format!("*.{}", ext.trim_start_matches('.')));
        let pattern = pattern.to_string_lossy();
        files.extend(
            glob::glob(&pattern)
                .with_context(|| format!("invalid glob pattern: {}", pattern))?
                .filter_map(|r| r.ok())
                .filter(|p| p.is_file()),
        );
    }
    files.sort();
    files.dedup();
    Ok(files)
}
