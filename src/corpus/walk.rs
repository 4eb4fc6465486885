//! Corpus directory traversal.
//!
//! Every listing is sorted by file name, so that documents are converted (and written)
//! in a stable order.
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::corpus::{Corpus, Layout};
use crate::error::Error;

/// `Social` type directory that is skipped: it is empty in every release.
const SKIPPED_TYPE: &str = "Twitter";

/// A subcorpus: a named, ordered list of documents that end up in the same output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcorpus {
    name: String,
    files: Vec<PathBuf>,
}

impl Subcorpus {
    pub fn new(name: String, files: Vec<PathBuf>) -> Self {
        Self { name, files }
    }

    /// Canonical name (`IGC-Adjud-Appeal`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// List the subcorpora of `corpus`, rooted at `root`.
pub fn walk(corpus: Corpus, root: &Path) -> Result<Vec<Subcorpus>, Error> {
    let prefix = corpus.full_name();
    debug!("walking {:?} ({:?})", root, corpus.layout());

    let subcorpora = match corpus.layout() {
        Layout::Year => vec![Subcorpus::new(prefix, files_under(root, 1)?)],
        Layout::SubcorpusYear => subdirs(root)?
            .into_iter()
            .map(|(name, path)| -> Result<Subcorpus, Error> {
                Ok(Subcorpus::new(
                    format!("{}-{}", prefix, name),
                    files_under(&path, 1)?,
                ))
            })
            .collect::<Result<Vec<_>, Error>>()?,
        Layout::SubcorpusYearIssue => subdirs(root)?
            .into_iter()
            .map(|(name, path)| -> Result<Subcorpus, Error> {
                Ok(Subcorpus::new(
                    format!("{}-{}", prefix, name),
                    files_under(&path, 2)?,
                ))
            })
            .collect::<Result<Vec<_>, Error>>()?,
        Layout::TypeSubcorpusYear => {
            let mut subcorpora = Vec::new();
            for (kind, kind_path) in subdirs(root)? {
                if kind == SKIPPED_TYPE {
                    debug!("skipping {:?}", kind_path);
                    continue;
                }
                for (name, path) in subdirs(&kind_path)? {
                    subcorpora.push(Subcorpus::new(
                        format!("{}-{}-{}", prefix, kind, name),
                        files_under(&path, 1)?,
                    ));
                }
            }
            subcorpora
        }
    };

    Ok(subcorpora)
}

/// Files located `depth` directory levels under `dir`, in sorted order.
fn files_under(dir: &Path, depth: usize) -> Result<Vec<PathBuf>, Error> {
    if depth == 0 {
        return Ok(sorted_entries(dir, |path| path.is_file())?
            .into_iter()
            .map(|(_, path)| path)
            .collect());
    }

    let mut files = Vec::new();
    for (_, path) in subdirs(dir)? {
        files.extend(files_under(&path, depth - 1)?);
    }

    Ok(files)
}

/// Sorted `(name, path)` of the directories in `dir`.
fn subdirs(dir: &Path) -> Result<Vec<(String, PathBuf)>, Error> {
    sorted_entries(dir, |path| path.is_dir())
}

/// Sorted `(name, path)` of the entries of `dir` matching `keep`.
/// Unreadable entries are logged and skipped.
fn sorted_entries<F>(dir: &Path, keep: F) -> Result<Vec<(String, PathBuf)>, Error>
where
    F: Fn(&Path) -> bool,
{
    let mut entries: Vec<(String, PathBuf)> = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            entry.map_or_else(
                |e| {
                    error!("error reading directory {:?}: {}", dir, e);
                    None
                },
                Some,
            )
        })
        .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
        .filter(|(_, path)| keep(path.as_path()))
        .collect();

    entries.sort();
    Ok(entries)
}
