use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = ".";
pub const DEFAULT_OUTPUT_FILE: &str = "project_dump.txt";

pub const INCLUDED_EXTENSIONS: &[&str] = &[
    ".go",
    ".mod",
    ".sum",
    ".yaml",
    ".yml",
    ".env",
    ".env.example",
    ".json",
    ".toml",
    ".sql",
    ".sh",
    ".txt",
];

/// Basenames included regardless of extension. Compared lowercase.
pub const INCLUDED_BASENAMES: &[&str] = &["dockerfile", "docker-compose.yml"];

/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &[".git", "__pycache__", "node_modules", "dist", "build"];

#[derive(Debug, Clone)]
pub struct FileRecord {
    pub relative_path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct DumpConfig {
    pub root_path: PathBuf,
    pub extensions: Vec<String>,
    pub basenames: Vec<String>,
    pub excluded_dirs: Vec<String>,
    /// Resolved against the current working directory, not the root.
    pub output_path: PathBuf,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from(DEFAULT_ROOT),
            extensions: INCLUDED_EXTENSIONS.iter().map(|&s| s.to_string()).collect(),
            basenames: INCLUDED_BASENAMES.iter().map(|&s| s.to_string()).collect(),
            excluded_dirs: EXCLUDED_DIRS.iter().map(|&s| s.to_string()).collect(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl DumpConfig {
    pub fn with_root(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Self::default()
        }
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }
}
