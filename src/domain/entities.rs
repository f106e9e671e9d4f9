//! Domain entities: the four levels of a Johnny Decimal library

use std::fmt;
use std::path::PathBuf;

/// Top-level grouping, e.g. `10-19 Reference`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// Directory backing this area
    pub path: PathBuf,
    /// Full directory name, used for ordering
    pub name: String,
    /// Numeric range code, e.g. "10-19"
    pub range: String,
    pub short_name: String,
    pub categories: Vec<Category>,
}

/// Second-level grouping, e.g. `11 Recipes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub path: PathBuf,
    pub name: String,
    /// Two-digit code, unique within the owning area
    pub code: String,
    pub short_name: String,
    /// Full name of the owning area
    pub area: String,
    pub identifiers: Vec<Identifier>,
}

/// Third-level unit holding files, e.g. `11.01 Pasta`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub path: PathBuf,
    pub name: String,
    /// Two-digit code without the category prefix
    pub code: String,
    pub short_name: String,
    pub area: String,
    /// Code of the owning category
    pub category: String,
    pub files: Vec<JdFile>,
}

/// A plain file stored inside an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdFile {
    pub path: PathBuf,
    pub file_name: String,
    pub area: String,
    pub category: String,
    pub identifier: String,
}

impl Area {
    /// Whether `code` is already used by one of this area's categories.
    pub fn has_category(&self, code: &str) -> bool {
        self.categories.iter().any(|c| c.code == code)
    }

    /// Numeric start of the range, e.g. 20 for "20-29".
    pub fn range_start(&self) -> Option<u32> {
        self.range.split('-').next()?.parse().ok()
    }
}

impl Category {
    pub fn has_identifier(&self, code: &str) -> bool {
        self.identifiers.iter().any(|i| i.code == code)
    }
}

impl Identifier {
    /// Canonical external form, e.g. "11.01".
    pub fn full_id(&self) -> String {
        format!("{}.{}", self.category, self.code)
    }
}

impl JdFile {
    pub fn full_id(&self) -> String {
        format!("{}.{}", self.category, self.identifier)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.range, self.short_name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.short_name)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.full_id(), self.short_name)
    }
}

impl fmt::Display for JdFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.full_id(), self.file_name)
    }
}
