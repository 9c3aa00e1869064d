//! Backing-store abstraction for persisted artifacts

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::core::types::Result;

/// Key-value-by-name byte store the codec reads and writes.
///
/// Writes are whole-entry replacements; a failed write must leave any
/// previous entry for that name untouched.
pub trait SlotStore {
    fn exists(&self, name: &str) -> bool;

    fn read_all(&self, name: &str) -> Result<Vec<u8>>;

    fn write_all(&mut self, name: &str, bytes: &[u8]) -> Result<()>;

    /// All entry names ending in `suffix`
    fn list_names(&self, suffix: &str) -> Result<Vec<String>>;
}

/// Filesystem store: one flat directory, one file per artifact
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if missing
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl SlotStore for FileStore {
    fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    fn read_all(&self, name: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.path_of(name))?)
    }

    fn write_all(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        Ok(fs::write(self.path_of(name), bytes)?)
    }

    fn list_names(&self, suffix: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let file_name = entry.file_name();
            if let Some(name) = file_name.to_str() {
                if name.ends_with(suffix) && entry.file_type()?.is_file() {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemStore {
    fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn read_all(&self, name: &str) -> Result<Vec<u8>> {
        self.entries.get(name).cloned().ok_or_else(|| {
            crate::core::Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no entry named {name}"),
            ))
        })
    }

    fn write_all(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.entries.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn list_names(&self, suffix: &str) -> Result<Vec<String>> {
        Ok(self
            .entries
            .keys()
            .filter(|name| name.ends_with(suffix))
            .cloned()
            .collect())
    }
}
