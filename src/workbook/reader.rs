//! Reading contact rows out of a spreadsheet file.

use crate::error::{WorkbookError, WorkbookResult};
use crate::models::Contact;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Result of reading a contacts sheet.
#[derive(Debug)]
pub struct LoadedSheet {
    /// Parsed records, in file order. Rows with no name and no phone are
    /// skipped and produce no record.
    pub contacts: Vec<Contact>,

    /// Whether the sheet carried a fourth (`Used`) column. When false every
    /// record defaulted to `used = false` and callers may want to repair the
    /// file by rewriting it with the full header.
    pub had_used_column: bool,
}

/// Parse the first worksheet of the file at `path`.
///
/// Columns are read positionally: first name, last name, phone, used. The
/// header row is skipped. A sheet with no rows at all yields an empty, intact
/// result.
pub fn read_contacts(path: &Path) -> WorkbookResult<LoadedSheet> {
    let mut sheets = open_workbook_auto(path)?;
    let range = sheets
        .worksheet_range_at(0)
        .ok_or(WorkbookError::MissingSheet)??;

    let mut rows = range.rows();
    if rows.next().is_none() {
        return Ok(LoadedSheet {
            contacts: Vec::new(),
            had_used_column: true,
        });
    }

    let had_used_column = range.width() >= 4;
    let mut contacts = Vec::new();

    for row in rows {
        let first_name = cell_text(row.first());
        let last_name = cell_text(row.get(1));
        let phone = cell_text(row.get(2));
        let used = if had_used_column {
            row.get(3).map(parse_used_cell).unwrap_or(false)
        } else {
            false
        };

        let contact = Contact::from_row(first_name, last_name, phone, used);
        if contact.is_blank() {
            continue;
        }
        contacts.push(contact);
    }

    Ok(LoadedSheet {
        contacts,
        had_used_column,
    })
}

/// Tolerant boolean cascade for the `Used` column: native boolean, then the
/// string forms `true`/`yes`/`1`/`on` (case-insensitive), then any positive
/// number. Everything else is false.
pub fn parse_used_cell(cell: &Data) -> bool {
    match cell {
        Data::Bool(value) => *value,
        Data::String(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1" | "on"
        ),
        Data::Float(value) => *value > 0.0,
        Data::Int(value) => *value > 0,
        _ => false,
    }
}

/// Render a cell as trimmed text. Numeric cells are formatted without a
/// trailing `.0` so phone numbers stored as numbers survive intact.
fn cell_text(cell: Option<&Data>) -> String {
    let Some(cell) = cell else {
        return String::new();
    };
    match cell {
        Data::String(value) => value.trim().to_string(),
        Data::Float(value) if value.fract() == 0.0 => format!("{}", *value as i64),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => if *value { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(value) => value.as_f64().to_string(),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.trim().to_string(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_used_cell_booleans() {
        assert!(parse_used_cell(&Data::Bool(true)));
        assert!(!parse_used_cell(&Data::Bool(false)));
    }

    #[test]
    fn test_parse_used_cell_strings() {
        for truthy in ["true", "TRUE", "Yes", "1", "on", " ON "] {
            assert!(
                parse_used_cell(&Data::String(truthy.to_string())),
                "{:?} should parse as used",
                truthy
            );
        }
        for falsy in ["false", "no", "0", "off", "", "maybe"] {
            assert!(!parse_used_cell(&Data::String(falsy.to_string())));
        }
    }

    #[test]
    fn test_parse_used_cell_numbers() {
        assert!(parse_used_cell(&Data::Float(1.0)));
        assert!(parse_used_cell(&Data::Int(2)));
        assert!(!parse_used_cell(&Data::Float(0.0)));
        assert!(!parse_used_cell(&Data::Int(-1)));
    }

    #[test]
    fn test_parse_used_cell_other_types_default_false() {
        assert!(!parse_used_cell(&Data::Empty));
    }

    #[test]
    fn test_cell_text_formats() {
        assert_eq!(cell_text(Some(&Data::String("  Ann ".to_string()))), "Ann");
        assert_eq!(cell_text(Some(&Data::Float(5551234567.0))), "5551234567");
        assert_eq!(cell_text(Some(&Data::Int(42))), "42");
        assert_eq!(cell_text(Some(&Data::Empty)), "");
        assert_eq!(cell_text(None), "");
    }
}
