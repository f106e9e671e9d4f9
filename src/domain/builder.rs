//! Tree builder: scans a library root into the Area → Category → Identifier → File hierarchy.

use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::domain::entities::{Area, Category, Identifier, JdFile};
use crate::domain::error::DomainError;
use crate::domain::name::{identifier_code, is_hidden, parse_name};
use crate::infrastructure::traits::{DirEntry, EntryKind, FileSystem};

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;

/// Constructs the four-level hierarchy from a directory tree.
///
/// The scan is read-only. The first malformed directory name aborts the
/// whole build.
pub struct TreeBuilder<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Build all areas below `root`, sorted by name.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, root: &Path) -> TreeResult<Vec<Area>> {
        if !self.fs.exists(root) {
            return Err(DomainError::scan(
                root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "library root does not exist"),
            ));
        }
        if !self.fs.is_dir(root) {
            return Err(DomainError::NotADirectory(root.to_path_buf()));
        }

        let areas = self
            .visible_children(root, EntryKind::Dir)?
            .iter()
            .map(|entry| self.build_area(entry))
            .collect::<TreeResult<Vec<_>>>()?;
        debug!("build: {} areas under {}", areas.len(), root.display());
        Ok(areas)
    }

    /// Non-hidden children of `dir` of the given kind, sorted by name.
    fn visible_children(&self, dir: &Path, kind: EntryKind) -> TreeResult<Vec<DirEntry>> {
        let mut entries: Vec<DirEntry> = self
            .fs
            .read_dir(dir)
            .map_err(|e| DomainError::scan(dir, e))?
            .into_iter()
            .filter(|e| e.kind == kind && !is_hidden(&e.name))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn build_area(&self, entry: &DirEntry) -> TreeResult<Area> {
        let parsed = parse_name(&entry.name, &entry.path)?;
        trace!("area: {}", entry.name);

        let categories = self
            .visible_children(&entry.path, EntryKind::Dir)?
            .iter()
            .map(|child| self.build_category(child, &entry.name))
            .collect::<TreeResult<Vec<_>>>()?;

        Ok(Area {
            path: entry.path.clone(),
            name: entry.name.clone(),
            range: parsed.code.to_string(),
            short_name: parsed.label.to_string(),
            categories,
        })
    }

    fn build_category(&self, entry: &DirEntry, area: &str) -> TreeResult<Category> {
        let parsed = parse_name(&entry.name, &entry.path)?;
        trace!("category: {}", entry.name);

        let identifiers = self
            .visible_children(&entry.path, EntryKind::Dir)?
            .iter()
            .map(|child| self.build_identifier(child, area, parsed.code))
            .collect::<TreeResult<Vec<_>>>()?;

        Ok(Category {
            path: entry.path.clone(),
            name: entry.name.clone(),
            code: parsed.code.to_string(),
            short_name: parsed.label.to_string(),
            area: area.to_string(),
            identifiers,
        })
    }

    fn build_identifier(
        &self,
        entry: &DirEntry,
        area: &str,
        category: &str,
    ) -> TreeResult<Identifier> {
        let parsed = parse_name(&entry.name, &entry.path)?;
        let code = identifier_code(parsed.code, category);
        trace!("identifier: {}", entry.name);

        // Leaf names are taken verbatim, no code split
        let files = self
            .visible_children(&entry.path, EntryKind::File)?
            .into_iter()
            .map(|file| JdFile {
                path: file.path,
                file_name: file.name,
                area: area.to_string(),
                category: category.to_string(),
                identifier: code.to_string(),
            })
            .collect();

        Ok(Identifier {
            path: entry.path.clone(),
            name: entry.name.clone(),
            code: code.to_string(),
            short_name: parsed.label.to_string(),
            area: area.to_string(),
            category: category.to_string(),
            files,
        })
    }
}
