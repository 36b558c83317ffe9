use anyhow::Context;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;
}

pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to file: {}", self.path.display());
        fs::write(&self.path, content)
            .with_context(|| format!("Cannot write output file {}", self.path.display()))?;
        info!(
            "Output written to file: {} ({} bytes)",
            self.path.display(),
            content.len()
        );
        Ok(())
    }
}

fn print_status_lines(output_path: &Path) -> io::Result<()> {
    let mut stdout = io::stdout();

    stdout.execute(SetForegroundColor(Color::Green))?;
    writeln!(
        stdout,
        "✅ Bundle complete! Result saved to '{}'",
        output_path.display()
    )?;
    stdout.execute(ResetColor)?;
    writeln!(stdout, "📁 The file is in the directory the tool was run from.")?;
    Ok(())
}

pub fn write_with(writer: &dyn OutputWriter, document: &str) -> anyhow::Result<()> {
    writer.write(document)
}

pub fn write_output(document: &str, output_path: &Path) -> anyhow::Result<()> {
    let writer = FileWriter::new(output_path);
    write_with(&writer, document)?;
    print_status_lines(output_path)?;
    Ok(())
}
