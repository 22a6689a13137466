//! Workbook reconciliation between the contact list and its spreadsheet file.
//!
//! The same row mapping is used symmetrically by the three usage modes:
//! full load (replace the collection), import (merge with de-duplication,
//! handled by the roster), and save/export (full rewrite of the file).

pub mod csv_export;
pub mod reader;
pub mod writer;

pub use csv_export::{export_csv_file, write_csv_export, CSV_HEADERS};
pub use reader::{parse_used_cell, read_contacts, LoadedSheet};
pub use writer::write_contacts;

/// Worksheet name used for both reading hints and writing.
pub const SHEET_NAME: &str = "Contacts";

/// Fixed column layout of the contacts sheet.
pub const HEADERS: [&str; 4] = ["First Name", "Last Name", "Phone", "Used"];

/// Default workbook filename, resolved against the working directory.
pub const DEFAULT_FILE_NAME: &str = "sa_contacts.xlsx";
