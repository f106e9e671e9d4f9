//! Library facade
//!
//! Holds one snapshot of a Johnny Decimal tree and answers queries against
//! it. Mutations create directories on disk but never touch the snapshot;
//! open a new `Library` to see them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use itertools::Itertools;
use termtree::Tree;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::slot::{next_category_slot, next_identifier_slot, parse_code};
use crate::domain::{
    Area, Category, DomainError, Identifier, JdFile, NamingValidator, TreeBuilder, Violation,
};
use crate::infrastructure::traits::FileSystem;

/// Formatting options for [`Library::print_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    /// Spaces per level, ignored when `use_tabs` is set
    pub indent_width: usize,
    pub use_tabs: bool,
    pub print_files: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            use_tabs: false,
            print_files: false,
        }
    }
}

impl TreeOptions {
    fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_width)
        }
    }
}

/// Result of a category or identifier creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Directory was created at this path
    Created(PathBuf),
    /// Dry run: directory would have been created at this path
    DryRun(PathBuf),
    /// Every code in the numbering range is taken
    NoCapacity { parent: String },
    /// No area or category matched the requested code
    ParentNotFound(String),
}

impl AddOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, AddOutcome::Created(_))
    }

    /// Path created, or that would have been created.
    pub fn path(&self) -> Option<&Path> {
        match self {
            AddOutcome::Created(p) | AddOutcome::DryRun(p) => Some(p.as_path()),
            _ => None,
        }
    }
}

/// A scanned Johnny Decimal library.
pub struct Library {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
    areas: Vec<Area>,
}

impl Library {
    /// Scan `root` and build the full hierarchy.
    #[instrument(level = "debug", skip(fs))]
    pub fn open(root: &Path, fs: Arc<dyn FileSystem>) -> ApplicationResult<Self> {
        let areas = TreeBuilder::new(fs.as_ref()).build(root)?;
        debug!("open: {} areas", areas.len());
        Ok(Self {
            fs,
            root: root.to_path_buf(),
            areas,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// All categories across all areas, in traversal order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.areas.iter().flat_map(|a| a.categories.iter())
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        self.categories().flat_map(|c| c.identifiers.iter())
    }

    pub fn files(&self) -> impl Iterator<Item = &JdFile> {
        self.identifiers().flat_map(|i| i.files.iter())
    }

    /// First area whose range code starts with `range_start`.
    pub fn find_area(&self, range_start: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.range.starts_with(range_start))
    }

    /// First category with exactly this code, searching all areas.
    pub fn find_category(&self, code: &str) -> Option<&Category> {
        self.categories().find(|c| c.code == code)
    }

    // ============================================================
    // READ OPERATIONS
    // ============================================================

    /// Case-insensitive substring search, one line per matching entity.
    ///
    /// Lines follow traversal order. Categories match on their full name,
    /// identifiers on their full name, files on their file name.
    pub fn search_lines(&self, term: &str, include_category: bool, include_files: bool) -> Vec<String> {
        let needle = term.to_lowercase();
        let mut results = Vec::new();

        for category in self.categories() {
            if category.name.to_lowercase().contains(&needle) {
                results.push(category.to_string());
            }
            for identifier in &category.identifiers {
                if identifier.name.to_lowercase().contains(&needle) {
                    if include_category {
                        results.push(format!("{} -> {}", category, identifier));
                    } else {
                        results.push(identifier.to_string());
                    }
                }
                if include_files {
                    results.extend(
                        identifier
                            .files
                            .iter()
                            .filter(|f| f.file_name.to_lowercase().contains(&needle))
                            .map(|f| f.to_string()),
                    );
                }
            }
        }
        debug!("search '{}': {} results", term, results.len());
        results
    }

    /// Search results joined by newlines, or a "no results" message.
    pub fn search(&self, term: &str, include_category: bool, include_files: bool) -> String {
        let results = self.search_lines(term, include_category, include_files);
        if results.is_empty() {
            return format!("No results found for {}", term);
        }
        results.join("\n")
    }

    /// Indented depth-first listing, one node per line.
    pub fn print_tree(&self, options: &TreeOptions) -> String {
        let unit = options.indent_unit();
        let mut output = String::new();
        for area in &self.areas {
            output.push_str(&format!("{}\n", area));
            for category in &area.categories {
                output.push_str(&format!("{}{}\n", unit, category));
                for identifier in &category.identifiers {
                    output.push_str(&format!("{}{}\n", unit.repeat(2), identifier));
                    if options.print_files {
                        for file in &identifier.files {
                            output.push_str(&format!("{}{}\n", unit.repeat(3), file));
                        }
                    }
                }
            }
        }
        output
    }

    /// The same hierarchy drawn with box characters below the library root.
    pub fn fancy_tree(&self, print_files: bool) -> Tree<String> {
        let areas = self.areas.iter().map(|area| {
            let categories = area.categories.iter().map(|category| {
                let identifiers = category.identifiers.iter().map(|identifier| {
                    let files = identifier
                        .files
                        .iter()
                        .filter(|_| print_files)
                        .map(|f| Tree::new(f.file_name.clone()));
                    Tree::new(identifier.to_string()).with_leaves(files)
                });
                Tree::new(category.to_string()).with_leaves(identifiers)
            });
            Tree::new(area.to_string()).with_leaves(categories)
        });
        Tree::new(self.root.display().to_string()).with_leaves(areas)
    }

    /// A category line followed by one indented line per identifier.
    pub fn get_category(&self, code: &str) -> String {
        match self.find_category(code) {
            Some(category) => std::iter::once(category.to_string())
                .chain(category.identifiers.iter().map(|i| format!("    {}", i)))
                .join("\n"),
            None => format!("No category found for {}", code),
        }
    }

    /// Naming-convention violations across the whole tree.
    pub fn validate(&self) -> Vec<Violation> {
        NamingValidator::new().validate(&self.areas)
    }

    // ============================================================
    // MUTATIONS
    // ============================================================

    /// Create `"{code} {name}"` in the first free slot of the decade
    /// starting at `area_start`.
    ///
    /// `area_start` must be the matched area's range start ("20" for
    /// "20-29"); anything else is [`DomainError::InvalidCode`].
    #[instrument(level = "debug", skip(self))]
    pub fn add_category(&self, area_start: &str, name: &str, dry_run: bool) -> ApplicationResult<AddOutcome> {
        check_name(name)?;
        let start = parse_code(area_start)?;

        let Some(area) = self.find_area(area_start) else {
            debug!("add_category: no area for {}", area_start);
            return Ok(AddOutcome::ParentNotFound(area_start.to_string()));
        };
        // "2" prefix-matches "20-29" but would scan 02..11
        if area.range_start() != Some(start) {
            return Err(DomainError::InvalidCode(area_start.to_string()).into());
        }
        let Some(code) = next_category_slot(area, start) else {
            return Ok(AddOutcome::NoCapacity {
                parent: area.name.clone(),
            });
        };

        let path = area.path.join(format!("{} {}", code, name));
        if dry_run {
            info!("Would have created - {}", path.display());
            return Ok(AddOutcome::DryRun(path));
        }
        self.fs
            .create_dir(&path)
            .or_slot_conflict("create category", &path)?;
        info!("Created - {}", path.display());
        Ok(AddOutcome::Created(path))
    }

    /// Create `"{category}.{code} {name}"` in the first free identifier slot.
    ///
    /// With `placeholder`, an empty `"{name}.md"` is created inside.
    #[instrument(level = "debug", skip(self))]
    pub fn add_identifier(
        &self,
        category_code: &str,
        name: &str,
        placeholder: bool,
        dry_run: bool,
    ) -> ApplicationResult<AddOutcome> {
        check_name(name)?;

        let Some(category) = self.find_category(category_code) else {
            debug!("add_identifier: no category {}", category_code);
            return Ok(AddOutcome::ParentNotFound(category_code.to_string()));
        };
        let Some(code) = next_identifier_slot(category) else {
            return Ok(AddOutcome::NoCapacity {
                parent: category.name.clone(),
            });
        };

        let path = category
            .path
            .join(format!("{}.{} {}", category.code, code, name));
        if dry_run {
            info!("Would have created - {}", path.display());
            return Ok(AddOutcome::DryRun(path));
        }
        self.fs
            .create_dir(&path)
            .or_slot_conflict("create identifier", &path)?;
        if placeholder {
            let file = path.join(format!("{}.md", name));
            self.fs
                .create_empty_file(&file)
                .with_path_context("create placeholder", &file)?;
        }
        info!("Created - {}", path.display());
        Ok(AddOutcome::Created(path))
    }
}

/// New entry names must be a single non-empty path component.
fn check_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() || name.contains(['/', '\\']) {
        return Err(DomainError::InvalidName(name.to_string()));
    }
    Ok(())
}
