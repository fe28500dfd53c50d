//! Destinations for generated files.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::EmitError;

/// Reads existing project files and persists generated ones.
///
/// Paths are relative to the project root.
pub trait FileSink {
    /// Current contents of a file, `None` when it does not exist.
    fn read(&self, path: &Path) -> Result<Option<String>, EmitError>;

    /// Write a UTF-8 file, creating parent directories as needed.
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), EmitError>;
}

/// Writes into a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
    dry_run: bool,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    /// Read real files but skip every write.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSink for FsSink {
    fn read(&self, path: &Path) -> Result<Option<String>, EmitError> {
        let full = self.root.join(path);
        match fs::read_to_string(&full) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(EmitError::Io { path: full, source }),
        }
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), EmitError> {
        let full = self.root.join(path);

        if self.dry_run {
            tracing::info!(path = %full.display(), bytes = contents.len(), "dry run: not writing");
            return Ok(());
        }

        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|source| EmitError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&full, contents).map_err(|source| EmitError::Io {
            path: full.clone(),
            source,
        })?;
        tracing::info!(path = %full.display(), "wrote file");
        Ok(())
    }
}

/// Keeps files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing file.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl FileSink for MemorySink {
    fn read(&self, path: &Path) -> Result<Option<String>, EmitError> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), EmitError> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
