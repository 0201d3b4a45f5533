use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent one generated project artifact.
///
/// Each artifact carries its own overwrite policy. The existence guard is an
/// exact-path check against the target file, never a directory scan, so an
/// unrelated file sitting next to the artifact can not suppress generation.
pub trait GeneratedFile {
    /// File path relative to the output root
    fn path(&self, base: &Path) -> PathBuf;

    /// Overwrite policy for this artifact
    fn overwrite(&self) -> Overwrite;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk according to its overwrite policy
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.overwrite() {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was left untouched (already exists)
    Skipped,
}

/// How to handle an existing file at the target path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (regenerated on every run)
    #[default]
    Always,
    /// Only create if the file does not exist (protects hand-edited output)
    IfMissing,
}
