use crate::domain::models::DumpConfig;
use std::path::Path;

/// Lowercased extension with its leading dot, e.g. `".go"`.
///
/// Follows "text after the final dot" semantics. Leading dots belong to the
/// stem, so `.env` and `..env` have no extension.
fn lowercase_extension(filename: &str) -> Option<String> {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);
    let stem_start = name.len() - name.trim_start_matches('.').len();

    name[stem_start..]
        .rfind('.')
        .map(|dot| name[stem_start + dot..].to_lowercase())
}

pub fn should_include(filename: &str, config: &DumpConfig) -> bool {
    let ext_matches = lowercase_extension(filename)
        .map(|ext| config.extensions.iter().any(|known| known.eq_ignore_ascii_case(&ext)))
        .unwrap_or(false);

    if ext_matches {
        return true;
    }

    let basename = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
        .to_lowercase();

    config.basenames.iter().any(|b| b.eq_ignore_ascii_case(&basename))
}
