//! Naming-convention checks over a built tree.
//!
//! The builder only requires `"<code> <label>"`; these checks report the
//! stricter Johnny Decimal rules as warnings without rejecting the tree.

use std::fmt;
use std::path::PathBuf;

use regex::Regex;

use crate::domain::entities::{Area, Category, Identifier};

/// A single naming-rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Checks area ranges, category codes and identifier codes.
pub struct NamingValidator {
    area_regex: Regex,
    code_regex: Regex,
    full_id_regex: Regex,
}

impl Default for NamingValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingValidator {
    pub fn new() -> Self {
        Self {
            area_regex: Regex::new(r"^(\d{2})-(\d{2})$").unwrap(),
            code_regex: Regex::new(r"^\d{2}$").unwrap(),
            full_id_regex: Regex::new(r"^(\d{2})\.(\d{2})$").unwrap(),
        }
    }

    /// Check every node, in traversal order.
    pub fn validate(&self, areas: &[Area]) -> Vec<Violation> {
        let mut violations = Vec::new();
        for area in areas {
            let range = self.check_area(area, &mut violations);
            for category in &area.categories {
                self.check_category(category, range, &mut violations);
                for identifier in &category.identifiers {
                    self.check_identifier(identifier, &mut violations);
                }
            }
        }
        violations
    }

    /// Returns the parsed inclusive range when the area code is well-formed.
    fn check_area(&self, area: &Area, out: &mut Vec<Violation>) -> Option<(u32, u32)> {
        let Some(caps) = self.area_regex.captures(&area.range) else {
            out.push(violation(
                &area.path,
                format!("area range '{}' is not of the form NN-NN", area.range),
            ));
            return None;
        };
        let start: u32 = caps[1].parse().ok()?;
        let end: u32 = caps[2].parse().ok()?;
        if end != start + 9 {
            out.push(violation(
                &area.path,
                format!("area range '{}' does not span ten codes", area.range),
            ));
        }
        Some((start, end))
    }

    fn check_category(&self, category: &Category, range: Option<(u32, u32)>, out: &mut Vec<Violation>) {
        if !self.code_regex.is_match(&category.code) {
            out.push(violation(
                &category.path,
                format!("category code '{}' is not two digits", category.code),
            ));
            return;
        }
        if let (Some((start, end)), Ok(code)) = (range, category.code.parse::<u32>()) {
            if code < start || code > end {
                out.push(violation(
                    &category.path,
                    format!(
                        "category code '{}' is outside its area range {:02}-{:02}",
                        category.code, start, end
                    ),
                ));
            }
        }
    }

    fn check_identifier(&self, identifier: &Identifier, out: &mut Vec<Violation>) {
        if let Some(caps) = self.full_id_regex.captures(&identifier.code) {
            out.push(violation(
                &identifier.path,
                format!(
                    "identifier '{}' names category {} but lives in category {}",
                    identifier.code, &caps[1], identifier.category
                ),
            ));
        } else if !self.code_regex.is_match(&identifier.code) {
            out.push(violation(
                &identifier.path,
                format!("identifier code '{}' is not two digits", identifier.code),
            ));
        } else if identifier.code == "00" {
            out.push(violation(&identifier.path, "identifier code 00 is reserved".to_string()));
        }
    }
}

fn violation(path: &std::path::Path, message: String) -> Violation {
    Violation {
        path: path.to_path_buf(),
        message,
    }
}
