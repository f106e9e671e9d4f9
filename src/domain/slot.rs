//! Slot allocation: the next unused two-digit code within a numbering range.

use crate::domain::entities::{Area, Category};
use crate::domain::error::DomainError;

/// Highest code a two-digit slot can take.
pub const MAX_CODE: u32 = 99;

/// Format a code as a zero-padded two-digit string.
pub fn format_code(code: u32) -> String {
    format!("{:02}", code)
}

/// Parse a numeric code such as "20" or "07".
pub fn parse_code(code: &str) -> Result<u32, DomainError> {
    code.trim()
        .parse::<u32>()
        .map_err(|_| DomainError::InvalidCode(code.to_string()))
}

/// First free category code in the decade starting at `start`.
///
/// Scans `start..start + 10`, never past [`MAX_CODE`]. `None` means the
/// decade is fully occupied.
pub fn next_category_slot(area: &Area, start: u32) -> Option<String> {
    let end = start.saturating_add(9).min(MAX_CODE);
    (start..=end)
        .map(format_code)
        .find(|code| !area.has_category(code))
}

/// First free identifier code in `01..=99`.
pub fn next_identifier_slot(category: &Category) -> Option<String> {
    (1..=MAX_CODE)
        .map(format_code)
        .find(|code| !category.has_identifier(code))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::entities::Identifier;

    fn area_with(codes: &[u32]) -> Area {
        Area {
            path: PathBuf::from("/jd/20-29 Work"),
            name: "20-29 Work".into(),
            range: "20-29".into(),
            short_name: "Work".into(),
            categories: codes
                .iter()
                .map(|c| Category {
                    path: PathBuf::from(format!("/jd/20-29 Work/{} C", c)),
                    name: format!("{} C", c),
                    code: format_code(*c),
                    short_name: "C".into(),
                    area: "20-29 Work".into(),
                    identifiers: vec![],
                })
                .collect(),
        }
    }

    fn category_with(codes: &[u32]) -> Category {
        Category {
            path: PathBuf::from("/jd/20-29 Work/21 Projects"),
            name: "21 Projects".into(),
            code: "21".into(),
            short_name: "Projects".into(),
            area: "20-29 Work".into(),
            identifiers: codes
                .iter()
                .map(|c| Identifier {
                    path: PathBuf::new(),
                    name: format!("21.{:02} X", c),
                    code: format_code(*c),
                    short_name: "X".into(),
                    area: "20-29 Work".into(),
                    category: "21".into(),
                    files: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn given_first_three_taken_when_allocating_category_then_picks_fourth() {
        let area = area_with(&[20, 21, 22]);
        assert_eq!(next_category_slot(&area, 20).as_deref(), Some("23"));
    }

    #[test]
    fn given_gap_when_allocating_category_then_fills_gap() {
        let area = area_with(&[20, 22]);
        assert_eq!(next_category_slot(&area, 20).as_deref(), Some("21"));
    }

    #[test]
    fn given_full_decade_when_allocating_category_then_none() {
        let area = area_with(&(20..30).collect::<Vec<_>>());
        assert_eq!(next_category_slot(&area, 20), None);
    }

    #[test]
    fn given_start_zero_when_allocating_category_then_zero_padded() {
        let area = area_with(&[]);
        assert_eq!(next_category_slot(&area, 0).as_deref(), Some("00"));
    }

    #[test]
    fn given_start_near_max_when_allocating_category_then_clipped() {
        let area = area_with(&[95, 96, 97, 98, 99]);
        assert_eq!(next_category_slot(&area, 95), None);
    }

    #[test]
    fn given_empty_category_when_allocating_identifier_then_01() {
        assert_eq!(next_identifier_slot(&category_with(&[])).as_deref(), Some("01"));
    }

    #[test]
    fn given_all_identifiers_taken_when_allocating_then_none() {
        let category = category_with(&(1..=99).collect::<Vec<_>>());
        assert_eq!(next_identifier_slot(&category), None);
    }

    #[test]
    fn given_non_numeric_code_when_parsing_then_invalid() {
        assert!(matches!(parse_code("2x"), Err(DomainError::InvalidCode(_))));
        assert_eq!(parse_code("07").unwrap(), 7);
    }
}
