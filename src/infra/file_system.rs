use crate::domain::models::DumpConfig;
use anyhow::Context;
use log::{debug, warn};
use std::ffi::OsString;
use std::fmt::Display;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// One visited directory: its path plus the names of its children.
///
/// `subdirs` has already been pruned of excluded names, so what is listed
/// here is exactly what the walk descends into (symbolic links aside,
/// which are listed but never followed). Names are kept as the OS reports
/// them so they can be joined back onto `dir` unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub dir: PathBuf,
    pub subdirs: Vec<OsString>,
    pub files: Vec<OsString>,
    descend_into: Vec<PathBuf>,
}

fn is_dir_like(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.file_type().is_symlink() && entry.path().is_dir())
}

/// Reads `dir` once, sorted by file name, splitting children into
/// subdirectories and files.
fn list_dir(dir: &Path, config: &DumpConfig) -> Result<DirListing, walkdir::Error> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();
    let mut descend_into = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry.file_name().to_os_string();

        if is_dir_like(&entry) {
            if config.is_excluded_dir(&name.to_string_lossy()) {
                debug!("Pruning excluded directory: {}", entry.path().display());
                continue;
            }
            if entry.file_type().is_dir() {
                descend_into.push(entry.path().to_path_buf());
            }
            subdirs.push(name);
        } else {
            files.push(name);
        }
    }

    Ok(DirListing {
        dir: dir.to_path_buf(),
        subdirs,
        files,
        descend_into,
    })
}

/// Lazy pre-order walk. Each directory is listed exactly once; its
/// unpruned real subdirectories are pushed in reverse so they pop in
/// file-name order.
pub struct Walk<'a> {
    config: &'a DumpConfig,
    root_listing: Option<DirListing>,
    pending: Vec<PathBuf>,
}

impl Walk<'_> {
    fn schedule_children(&mut self, listing: &DirListing) {
        self.pending.extend(listing.descend_into.iter().rev().cloned());
    }
}

impl Iterator for Walk<'_> {
    type Item = DirListing;

    fn next(&mut self) -> Option<DirListing> {
        if let Some(listing) = self.root_listing.take() {
            self.schedule_children(&listing);
            return Some(listing);
        }

        while let Some(dir) = self.pending.pop() {
            match list_dir(&dir, self.config) {
                Ok(listing) => {
                    self.schedule_children(&listing);
                    return Some(listing);
                }
                Err(e) => warn!("Skipping unreadable directory {}: {}", dir.display(), e),
            }
        }

        None
    }
}

/// Pre-order walk of `root` that never enters excluded directories.
///
/// Children are visited in file-name order. Failing to open or list `root`
/// is an error; a nested directory that cannot be listed is logged and
/// skipped.
pub fn walk<'a>(root: &Path, config: &'a DumpConfig) -> anyhow::Result<Walk<'a>> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("Cannot access root directory {}", root.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("Root path is not a directory: {}", root.display());
    }

    fs::read_dir(root)
        .with_context(|| format!("Cannot read root directory {}", root.display()))?;
    let root_listing = list_dir(root, config)
        .with_context(|| format!("Cannot read root directory {}", root.display()))?;

    debug!("Walking directory tree at {}", root.display());

    Ok(Walk {
        config,
        root_listing: Some(root_listing),
        pending: Vec::new(),
    })
}

pub fn read_file_contents(path: &Path) -> anyhow::Result<String> {
    debug!("Reading file contents: {}", path.display());
    let mut file = fs::File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    debug!("Read {} bytes from file", contents.len());
    Ok(contents)
}

pub fn error_placeholder(err: impl Display) -> String {
    format!("[ERROR: Could not read file: {}]", err)
}

/// Best-effort inclusion: a file that cannot be read as UTF-8 text is
/// represented by an error placeholder instead of failing the run.
pub fn read_file(path: &Path) -> String {
    match read_file_contents(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            error_placeholder(e)
        }
    }
}
