use crate::core::dump_builder::build_output;
use crate::domain::models::{DEFAULT_ROOT, DumpConfig};
use crate::infra::logger::setup_logger;
use crate::infra::output::write_output;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "project-dump")]
#[command(about = "Bundle a project's source files into project_dump.txt", long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub path: PathBuf,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    info!("Starting project dump");
    debug!("Command parameters: path={}", cli.path.display());

    let config = DumpConfig::with_root(cli.path);
    dump_project(&config)
}

pub fn dump_project(config: &DumpConfig) -> anyhow::Result<()> {
    info!("Scanning for files in {}", config.root_path.display());
    let document = build_output(config)?;

    info!("Writing output");
    write_output(&document, &config.output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["project-dump", "--path", "./service", "-vv"]).unwrap();

        assert_eq!(cli.path, PathBuf::from("./service"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["project-dump"]).unwrap();

        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["project-dump", "--ext", ".rs"]).is_err());
    }

    #[test]
    fn test_dump_project_writes_bundle() {
        let project = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        write(&project.path().join("go.mod"), "module user");
        write(&project.path().join("Dockerfile"), "FROM golang");
        write(&project.path().join("cmd/main.go"), "package main");
        write(&project.path().join("README.md"), "# user");

        let config = DumpConfig {
            output_path: out_dir.path().join("project_dump.txt"),
            ..DumpConfig::with_root(project.path())
        };
        dump_project(&config).unwrap();

        let dump = fs::read_to_string(&config.output_path).unwrap();
        let expected = format!(
            "=== FILE: Dockerfile ===\nFROM golang\n\n=== FILE: go.mod ===\nmodule user\n\n=== FILE: {} ===\npackage main\n",
            Path::new("cmd").join("main.go").display()
        );
        assert_eq!(dump, expected);
    }

    #[test]
    fn test_dump_project_is_idempotent() {
        let project = TempDir::new().unwrap();
        write(&project.path().join("a.go"), "package a");
        write(&project.path().join("config/app.yaml"), "port: 8080");
        write(&project.path().join("dist/app.js.json"), "{}");

        let config = DumpConfig {
            output_path: project.path().join("project_dump.txt"),
            ..DumpConfig::with_root(project.path())
        };

        dump_project(&config).unwrap();
        let first = fs::read(&config.output_path).unwrap();
        dump_project(&config).unwrap();
        let second = fs::read(&config.output_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_dump_project_missing_root_fails() {
        let out_dir = TempDir::new().unwrap();
        let config = DumpConfig {
            output_path: out_dir.path().join("project_dump.txt"),
            ..DumpConfig::with_root(out_dir.path().join("missing"))
        };

        assert!(dump_project(&config).is_err());
        assert!(!config.output_path.exists());
    }
}
