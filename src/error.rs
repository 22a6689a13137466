//! Error types for the contacts manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures are deliberately not represented here; they are
//! UI-bindable state carried by the validation module.

use crate::validation::FieldError;
use thiserror::Error;

/// Errors that can occur while reading or writing the contacts workbook.
#[derive(Error, Debug)]
pub enum WorkbookError {
    /// The file could not be opened or parsed as a spreadsheet
    #[error("Failed to open workbook: {0}")]
    Open(String),

    /// The workbook contains no worksheets
    #[error("Workbook has no worksheets")]
    MissingSheet,

    /// Writing the workbook file failed
    #[error("Failed to write workbook: {0}")]
    Write(String),

    /// Writing the CSV export failed
    #[error("Failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for WorkbookError {
    fn from(err: calamine::Error) -> Self {
        WorkbookError::Open(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for WorkbookError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        WorkbookError::Write(err.to_string())
    }
}

/// Errors that can occur in a contact repository.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No contact with the given id exists
    #[error("Contact not found: {0}")]
    NotFound(u32),

    /// The backing workbook could not be read or written
    #[error("Workbook storage error: {0}")]
    Workbook(#[from] WorkbookError),

    /// A blocking storage task failed to complete
    #[error("Storage task failed: {0}")]
    TaskJoin(String),
}

/// Errors that can occur in the session roster.
#[derive(Error, Debug)]
pub enum RosterError {
    /// A background load is still in flight; edits are suppressed
    #[error("A load is in progress")]
    LoadInProgress,

    /// The given position does not exist in the collection
    #[error("No contact at index {0}")]
    InvalidIndex(usize),

    /// The edited record failed whole-value validation
    #[error("Contact failed validation")]
    InvalidContact(Vec<FieldError>),

    /// The workbook could not be read or written
    #[error("Workbook error: {0}")]
    Workbook(#[from] WorkbookError),

    /// A blocking file task failed to complete
    #[error("File task failed: {0}")]
    TaskJoin(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with WorkbookError
pub type WorkbookResult<T> = Result<T, WorkbookError>;

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ContactField, FieldError};

    #[test]
    fn test_error_display() {
        let err = RepositoryError::NotFound(7);
        assert_eq!(err.to_string(), "Contact not found: 7");

        let err = WorkbookError::MissingSheet;
        assert_eq!(err.to_string(), "Workbook has no worksheets");

        let err = ConfigError::MissingVar("CONTACTS_FILE".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: CONTACTS_FILE"
        );

        let err = RosterError::LoadInProgress;
        assert_eq!(err.to_string(), "A load is in progress");
    }

    #[test]
    fn test_workbook_error_propagates_through_repository() {
        let err = RepositoryError::from(WorkbookError::Open("bad file".to_string()));
        assert!(err.to_string().contains("bad file"));
    }

    #[test]
    fn test_invalid_contact_keeps_field_errors() {
        let err = RosterError::InvalidContact(vec![FieldError {
            field: ContactField::Phone,
            message: "Phone number is required.".to_string(),
        }]);
        match err {
            RosterError::InvalidContact(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, ContactField::Phone);
            }
            other => panic!("Expected InvalidContact, got: {:?}", other),
        }
    }
}
