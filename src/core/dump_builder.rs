use crate::core::file_filter::should_include;
use crate::domain::models::{DumpConfig, FileRecord};
use crate::infra::file_system::{read_file, walk};
use anyhow::Context;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

fn file_header(relative_path: &Path) -> String {
    format!("=== FILE: {} ===", relative_path.display())
}

/// The output file, if it already exists, so a rerun does not bundle its
/// own previous result.
fn existing_output_path(config: &DumpConfig) -> Option<PathBuf> {
    fs::canonicalize(&config.output_path).ok()
}

pub fn collect_records(
    config: &DumpConfig,
    file_reader: impl Fn(&Path) -> String,
) -> anyhow::Result<Vec<FileRecord>> {
    let root = fs::canonicalize(&config.root_path)
        .with_context(|| format!("Cannot resolve root path {}", config.root_path.display()))?;
    let output_path = existing_output_path(config);

    info!("Collecting files under {}", root.display());
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for listing in walk(&root, config)? {
        debug!(
            "Visiting {} ({} files, {} subdirectories)",
            listing.dir.display(),
            listing.files.len(),
            listing.subdirs.len()
        );
        for name in &listing.files {
            if !should_include(&name.to_string_lossy(), config) {
                skipped += 1;
                continue;
            }

            let path = listing.dir.join(name);
            if output_path.as_deref() == Some(path.as_path()) {
                debug!("Skipping the output file itself: {}", path.display());
                continue;
            }

            let relative_path = path.strip_prefix(&root).unwrap_or(&path).to_path_buf();
            debug!("Adding file {}", relative_path.display());
            let content = file_reader(&path);
            records.push(FileRecord {
                relative_path,
                content,
            });
        }
    }

    info!(
        "Collected {} files ({} skipped by extension)",
        records.len(),
        skipped
    );
    Ok(records)
}

/// Renders each record as header, content and a blank line, all joined
/// with `\n`.
pub fn render_document(records: &[FileRecord]) -> String {
    debug!("Rendering document from {} records", records.len());
    let mut lines = Vec::with_capacity(records.len() * 3);

    for record in records {
        lines.push(file_header(&record.relative_path));
        lines.push(record.content.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}

pub fn build_output(config: &DumpConfig) -> anyhow::Result<String> {
    let records = collect_records(config, read_file)?;
    Ok(render_document(&records))
}
