//! I/O boundary traits for testability
//!
//! The library core only needs directory listing, directory creation and
//! empty-file creation; everything goes through [`FileSystem`].

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Classification of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Other,
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// List immediate children of a directory, unordered.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory. Fails with `AlreadyExists` if present.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Create an empty file. Fails with `AlreadyExists` if present.
    fn create_empty_file(&self, path: &Path) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATION
// ============================================================

fn classify(file_type: std::fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            let kind = if entry.path_is_symlink() {
                // Classified by target; dangling or looping links are Other
                std::fs::metadata(entry.path())
                    .map(|m| classify(m.file_type()))
                    .unwrap_or(EntryKind::Other)
            } else {
                classify(entry.file_type())
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path().to_path_buf(),
                kind,
            });
        }
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn create_empty_file(&self, path: &Path) -> io::Result<()> {
        std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_| ())
    }
}
