//! Contacts Manager - a personal contact list manager with an Excel workbook
//! as the persistence medium.
//!
//! The library exposes the pieces behind the server binary so they can be
//! embedded or tested on their own: create, edit, delete, search, filter and
//! sort contacts, import and export them, and keep the workbook file in sync.
//!
//! # Architecture
//!
//! - **models**: the contact record
//! - **validation**: character-level and whole-value checks for name and
//!   phone fields, producing UI-bindable error state
//! - **workbook**: conversion between the contact list and its spreadsheet
//!   file, plus the CSV export variant
//! - **repositories**: storage-owning contact collections (in-memory and
//!   Excel-backed) behind one trait
//! - **services**: the session roster with load, edit, import merge, export
//!   and save-with-change-summary
//! - **server**: the thin CRUD web API
//! - **config**: configuration from environment variables
//! - **error**: error types per layer

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod validation;
pub mod workbook;

pub use config::{Config, StorageBackend};
pub use error::{ConfigError, RepositoryError, RosterError, WorkbookError};
pub use models::Contact;
pub use repositories::{ContactRepository, ExcelContactRepository, MemoryContactRepository};
pub use services::{ChangeSummary, ImportSummary, Roster, RosterStats, SortKey};
pub use validation::{ContactField, FieldError, FieldValidator, ValidationMode};
