//! Contact model representing one entry in the contact list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact record.
///
/// The four core fields mirror the workbook columns. The optional fields only
/// travel through the web API; they are never written to the spreadsheet.
/// Records are allowed to exist in invalid intermediate states while being
/// edited; the validation module decides when a record may be committed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    /// Repository-assigned identifier. 0 until a repository owns the record.
    pub id: u32,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Phone number
    pub phone: String,

    /// Whether this contact has already been contacted
    pub used: bool,

    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Company/organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the record was created, stamped by the owning repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    /// When the record was last mutated, stamped by the owning repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
}

impl Contact {
    /// Create a new contact with the core name and phone fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// Create a contact from one parsed spreadsheet row.
    pub fn from_row(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        used: bool,
    ) -> Self {
        Self {
            used,
            ..Self::new(first_name, last_name, phone)
        }
    }

    /// Full display name, trimmed so a missing component leaves no stray space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// True when first name, last name and phone are all blank.
    /// Such rows are skipped during reconciliation.
    pub fn is_blank(&self) -> bool {
        self.first_name.trim().is_empty()
            && self.last_name.trim().is_empty()
            && self.phone.trim().is_empty()
    }

    /// Case-insensitive identity on the (first name, last name, phone)
    /// triple. This is the duplicate key used by import merging.
    pub fn same_identity(&self, other: &Contact) -> bool {
        self.first_name.eq_ignore_ascii_case(&other.first_name)
            && self.last_name.eq_ignore_ascii_case(&other.last_name)
            && self.phone.eq_ignore_ascii_case(&other.phone)
    }

    /// The tuple compared when deciding whether a record was modified.
    pub fn core_tuple(&self) -> (&str, &str, &str, bool) {
        (&self.first_name, &self.last_name, &self.phone, self.used)
    }

    /// Copy the editable fields from `source`, leaving id and the created
    /// timestamp alone.
    pub fn apply_update(&mut self, source: &Contact) {
        self.first_name = source.first_name.clone();
        self.last_name = source.last_name.clone();
        self.phone = source.phone.clone();
        self.used = source.used;
        self.email = source.email.clone();
        self.company = source.company.clone();
        self.notes = source.notes.clone();
    }
}
