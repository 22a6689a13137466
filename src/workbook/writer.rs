//! Writing the contact list back to a workbook file.

use super::{HEADERS, SHEET_NAME};
use crate::error::WorkbookResult;
use crate::models::Contact;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::path::Path;

/// Write `contacts` to a fresh workbook at `path`, overwriting any existing
/// file. The header row is bold on a light gray fill; data starts at row 2 in
/// collection order. The workbook is assembled in memory and saved once, so a
/// failure leaves the previous file untouched.
pub fn write_contacts(path: &Path, contacts: &[Contact]) -> WorkbookResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD3D3D3));
    for (col, title) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (i, contact) in contacts.iter().enumerate() {
        let row = (i as u32) + 1;
        worksheet.write_string(row, 0, contact.first_name.as_str())?;
        worksheet.write_string(row, 1, contact.last_name.as_str())?;
        worksheet.write_string(row, 2, contact.phone.as_str())?;
        worksheet.write_boolean(row, 3, contact.used)?;
    }

    worksheet.autofit();
    workbook.save(path)?;
    Ok(())
}
