//! Naming parser for `"<code> <label>"` entry names.

use std::path::Path;

use crate::domain::error::DomainError;

/// A directory name split into its numeric code and display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName<'a> {
    pub code: &'a str,
    pub label: &'a str,
}

/// Split `name` on its first space.
///
/// The code token is not validated here; width and digit checks live in
/// [`crate::domain::validate`]. `path` is only used for the error message.
pub fn parse_name<'a>(name: &'a str, path: &Path) -> Result<ParsedName<'a>, DomainError> {
    match name.split_once(' ') {
        Some((code, label)) => Ok(ParsedName { code, label }),
        None => Err(DomainError::MalformedName {
            path: path.to_path_buf(),
            name: name.to_string(),
        }),
    }
}

/// Hidden entries start with a dot and are excluded everywhere.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Strip a `"<category>."` prefix from an identifier code token.
///
/// `"11.01"` under category `"11"` becomes `"01"`; a bare `"01"` is
/// returned unchanged.
pub fn identifier_code<'a>(token: &'a str, category: &str) -> &'a str {
    token
        .strip_prefix(category)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(token)
}
