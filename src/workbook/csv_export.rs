//! Semicolon-delimited CSV export.
//!
//! The phone value gets a tab character prepended inside the quotes, which
//! makes spreadsheet applications treat the column as text and preserves
//! leading zeros and a leading `+`.

use crate::error::WorkbookResult;
use crate::models::Contact;
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header row of the CSV export.
pub const CSV_HEADERS: [&str; 4] = ["Name", "Surname", "Telephone Number", "Used"];

/// Write the CSV export to any writer.
pub fn write_csv_export<W: Write>(writer: W, contacts: &[Contact]) -> WorkbookResult<()> {
    let mut out = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    out.write_record(CSV_HEADERS)?;
    for contact in contacts {
        let phone = format!("\t{}", contact.phone);
        out.write_record([
            contact.first_name.as_str(),
            contact.last_name.as_str(),
            phone.as_str(),
            if contact.used { "true" } else { "false" },
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Write the CSV export to a file, overwriting it.
pub fn export_csv_file(path: &Path, contacts: &[Contact]) -> WorkbookResult<()> {
    let file = File::create(path)?;
    write_csv_export(file, contacts)
}
