//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),

    #[error("{0} names break Johnny Decimal conventions")]
    Violations(usize),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Violations(_) => crate::exitcode::DATAERR,
            CliError::Application(e) => match e {
                ApplicationError::Domain(d) => match d {
                    DomainError::Scan { .. } | DomainError::NotADirectory(_) => {
                        crate::exitcode::NOINPUT
                    }
                    DomainError::MalformedName { .. } => crate::exitcode::DATAERR,
                    DomainError::SlotConflict(_) => crate::exitcode::CANTCREAT,
                    DomainError::InvalidCode(_) | DomainError::InvalidName(_) => {
                        crate::exitcode::USAGE
                    }
                },
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn given_slot_conflict_then_cantcreat() {
        let err = CliError::from(ApplicationError::from(DomainError::SlotConflict(
            PathBuf::from("/jd/20-29 Work/23 Taken"),
        )));
        assert_eq!(err.exit_code(), crate::exitcode::CANTCREAT);
    }

    #[test]
    fn given_malformed_name_then_dataerr() {
        let err = CliError::from(ApplicationError::from(DomainError::MalformedName {
            path: PathBuf::from("/jd/Misc"),
            name: "Misc".into(),
        }));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_usage_then_usage_code() {
        assert_eq!(CliError::Usage("x".into()).exit_code(), crate::exitcode::USAGE);
    }
}
