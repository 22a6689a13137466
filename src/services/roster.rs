//! The session roster: one in-memory contact collection and its operations.

use crate::error::{RosterError, RosterResult};
use crate::models::Contact;
use crate::validation;
use crate::workbook;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Sortable columns of the roster view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    FirstName,
    LastName,
    Used,
}

/// Counts shown next to the contact list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub used: usize,
    pub unused: usize,
}

/// Outcome of an import merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Candidates appended to the collection.
    pub imported: usize,
    /// Candidates discarded because an identical (case-insensitive)
    /// name+phone triple already existed.
    pub duplicates: usize,
    /// Rows carrying at least one non-empty core field.
    pub processed: usize,
}

/// What changed since the last save (or load), reported after saving.
///
/// The modified count is a best-effort heuristic: a current record is matched
/// to its baseline by same first and last name, or by same non-empty phone.
/// A record whose name and phone both changed escapes the match entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub total: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        for (count, what) in [
            (self.added, "added"),
            (self.removed, "removed"),
            (self.modified, "modified"),
        ] {
            if count > 0 {
                let noun = if count == 1 { "contact" } else { "contacts" };
                parts.push(format!("{count} {noun} {what}"));
            }
        }
        if parts.is_empty() {
            write!(f, "no changes detected")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

/// An edit in progress: the position being edited and, for existing records,
/// an independent snapshot to restore on cancel. `None` marks a record that
/// was just added and is removed again when the edit is cancelled.
#[derive(Debug)]
struct Edit {
    index: usize,
    previous: Option<Contact>,
}

/// The single contact collection of an interactive session.
///
/// All mutation happens through `&mut self`, so there is exactly one logical
/// thread of control. The only asynchronous operations are the file ones,
/// which park their I/O on the blocking pool and hand the result back in one
/// step. Observers watch the [`revision`](Roster::revision) counter instead
/// of subscribing to per-item change events.
#[derive(Debug)]
pub struct Roster {
    contacts: Vec<Contact>,
    loading: bool,
    unsaved_changes: bool,
    baseline: Vec<Contact>,
    baseline_count: usize,
    sort_key: SortKey,
    sort_ascending: bool,
    search_text: String,
    used_filter: Option<bool>,
    edit: Option<Edit>,
    revision: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            loading: false,
            unsaved_changes: false,
            baseline: Vec::new(),
            baseline_count: 0,
            sort_key: SortKey::FirstName,
            sort_ascending: true,
            search_text: String::new(),
            used_filter: None,
            edit: None,
            revision: 0,
        }
    }

    /// Monotonic counter bumped on every observable change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// The full collection in its current order, ignoring view filters.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn stats(&self) -> RosterStats {
        let used = self.contacts.iter().filter(|c| c.used).count();
        RosterStats {
            total: self.contacts.len(),
            used,
            unused: self.contacts.len() - used,
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn ensure_idle(&self) -> RosterResult<()> {
        if self.loading {
            Err(RosterError::LoadInProgress)
        } else {
            Ok(())
        }
    }

    fn reset_baseline(&mut self) {
        self.baseline = self.contacts.clone();
        self.baseline_count = self.contacts.len();
    }

    // ---- loading ----------------------------------------------------------

    /// Replace the collection with the contents of the workbook at `path`.
    ///
    /// Parsing runs on the blocking pool; the collection is swapped in one
    /// step afterwards and becomes the new change baseline. A missing or
    /// unreadable file is swallowed and yields an empty collection. With
    /// `repair` set, a sheet lacking the `Used` column is rewritten with the
    /// full header and `false` for every row before sorting.
    pub async fn load_from_file(&mut self, path: &Path, repair: bool) {
        self.loading = true;
        self.touch();

        let load_path = path.to_path_buf();
        let result =
            tokio::task::spawn_blocking(move || load_rows(&load_path, repair)).await;

        let contacts = match result {
            Ok(Ok(contacts)) => contacts,
            Ok(Err(e)) => {
                warn!(file = %path.display(), "load failed, starting empty: {e}");
                Vec::new()
            }
            Err(e) => {
                warn!("load task failed, starting empty: {e}");
                Vec::new()
            }
        };

        self.contacts = contacts;
        self.edit = None;
        self.reset_baseline();
        self.unsaved_changes = false;
        self.loading = false;
        self.touch();
    }

    // ---- editing ----------------------------------------------------------

    /// Insert a fresh empty contact at the front and start editing it.
    /// Returns its position.
    pub fn add_contact(&mut self) -> RosterResult<usize> {
        self.ensure_idle()?;
        self.contacts.insert(0, Contact::default());
        self.edit = Some(Edit {
            index: 0,
            previous: None,
        });
        self.unsaved_changes = true;
        self.touch();
        Ok(0)
    }

    /// Start editing the contact at `index`, capturing a snapshot for revert.
    pub fn begin_edit(&mut self, index: usize) -> RosterResult<()> {
        self.ensure_idle()?;
        let snapshot = self
            .contacts
            .get(index)
            .cloned()
            .ok_or(RosterError::InvalidIndex(index))?;
        self.edit = Some(Edit {
            index,
            previous: Some(snapshot),
        });
        Ok(())
    }

    /// Mutable access to a contact. Any change counts as unsaved.
    pub fn contact_mut(&mut self, index: usize) -> RosterResult<&mut Contact> {
        self.ensure_idle()?;
        if index >= self.contacts.len() {
            return Err(RosterError::InvalidIndex(index));
        }
        self.unsaved_changes = true;
        self.touch();
        Ok(&mut self.contacts[index])
    }

    /// Abandon the current edit. An edited record is restored from its
    /// snapshot; a newly added record is removed again.
    pub fn cancel_edit(&mut self) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        match edit.previous {
            Some(snapshot) => {
                if let Some(contact) = self.contacts.get_mut(edit.index) {
                    *contact = snapshot;
                }
            }
            None => {
                if edit.index < self.contacts.len() {
                    self.contacts.remove(edit.index);
                }
            }
        }
        self.touch();
    }

    /// Finish the current edit. The record must pass whole-value validation
    /// on first name, last name and phone; otherwise the edit stays open and
    /// the field errors are returned.
    pub fn commit_edit(&mut self) -> RosterResult<()> {
        let Some(edit) = self.edit.as_ref() else {
            return Ok(());
        };
        let contact = self
            .contacts
            .get(edit.index)
            .ok_or(RosterError::InvalidIndex(edit.index))?;

        validation::validate_contact(&contact.first_name, &contact.last_name, &contact.phone)
            .map_err(RosterError::InvalidContact)?;

        self.edit = None;
        self.unsaved_changes = true;
        self.touch();
        Ok(())
    }

    /// Delete the contact at `index`.
    pub fn remove(&mut self, index: usize) -> RosterResult<Contact> {
        self.ensure_idle()?;
        if index >= self.contacts.len() {
            return Err(RosterError::InvalidIndex(index));
        }
        if self.edit.as_ref().is_some_and(|e| e.index == index) {
            self.edit = None;
        }
        let removed = self.contacts.remove(index);
        self.unsaved_changes = true;
        self.touch();
        Ok(removed)
    }

    /// Flip the used flag of the contact at `index`.
    pub fn toggle_used(&mut self, index: usize) -> RosterResult<bool> {
        self.ensure_idle()?;
        let contact = self
            .contacts
            .get_mut(index)
            .ok_or(RosterError::InvalidIndex(index))?;
        contact.used = !contact.used;
        let now_used = contact.used;
        self.unsaved_changes = true;
        self.touch();
        Ok(now_used)
    }

    // ---- views ------------------------------------------------------------

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.touch();
    }

    pub fn used_filter(&self) -> Option<bool> {
        self.used_filter
    }

    pub fn set_used_filter(&mut self, filter: Option<bool>) {
        self.used_filter = filter;
        self.touch();
    }

    /// Cycle the used filter: all, used only, unused only, back to all.
    pub fn cycle_used_filter(&mut self) -> Option<bool> {
        self.used_filter = match self.used_filter {
            None => Some(true),
            Some(true) => Some(false),
            Some(false) => None,
        };
        self.touch();
        self.used_filter
    }

    /// Sort the view by `key`, toggling direction when the key is unchanged.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_key = key;
            self.sort_ascending = true;
        }
        self.touch();
    }

    /// The contacts matching the current search and used filter, in the
    /// current sort order. The underlying collection is not reordered.
    pub fn visible(&self) -> Vec<&Contact> {
        let query = self.search_text.trim().to_lowercase();
        let mut rows: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|c| {
                let matches_search = query.is_empty()
                    || c.full_name().to_lowercase().contains(&query)
                    || c.phone.to_lowercase().contains(&query);
                let matches_used = self.used_filter.map_or(true, |wanted| c.used == wanted);
                matches_search && matches_used
            })
            .collect();

        rows.sort_by(|a, b| {
            let ordering = match self.sort_key {
                SortKey::FirstName => a.first_name.cmp(&b.first_name),
                SortKey::LastName => a.last_name.cmp(&b.last_name),
                SortKey::Used => a.used.cmp(&b.used),
            };
            if self.sort_ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
        rows
    }

    // ---- file operations --------------------------------------------------

    /// Merge the contents of the workbook at `path` into the collection.
    ///
    /// Candidates matching an existing record on the case-insensitive
    /// (first, last, phone) triple are discarded as duplicates; the rest are
    /// appended. Afterwards the whole collection is re-sorted by first then
    /// last name. Unlike loading, failures here are reported to the caller.
    pub async fn import_from_file(&mut self, path: &Path) -> RosterResult<ImportSummary> {
        self.ensure_idle()?;

        let import_path = path.to_path_buf();
        let sheet = tokio::task::spawn_blocking(move || workbook::read_contacts(&import_path))
            .await
            .map_err(|e| RosterError::TaskJoin(e.to_string()))??;

        let mut summary = ImportSummary::default();
        for candidate in sheet.contacts {
            summary.processed += 1;
            if self
                .contacts
                .iter()
                .any(|existing| existing.same_identity(&candidate))
            {
                summary.duplicates += 1;
            } else {
                self.contacts.push(candidate);
                summary.imported += 1;
            }
        }

        sort_by_name(&mut self.contacts);
        self.unsaved_changes = true;
        self.touch();

        info!(
            imported = summary.imported,
            duplicates = summary.duplicates,
            processed = summary.processed,
            "import finished"
        );
        Ok(summary)
    }

    /// Write the collection to the workbook at `path`, overwriting it.
    pub async fn export_to_file(&self, path: &Path) -> RosterResult<()> {
        let export_path = path.to_path_buf();
        let snapshot = self.contacts.clone();
        tokio::task::spawn_blocking(move || workbook::write_contacts(&export_path, &snapshot))
            .await
            .map_err(|e| RosterError::TaskJoin(e.to_string()))??;
        Ok(())
    }

    /// Write the semicolon-delimited CSV export to `path`, overwriting it.
    pub async fn export_csv(&self, path: &Path) -> RosterResult<()> {
        let export_path = path.to_path_buf();
        let snapshot = self.contacts.clone();
        tokio::task::spawn_blocking(move || {
            workbook::export_csv_file(&export_path, &snapshot)
        })
        .await
        .map_err(|e| RosterError::TaskJoin(e.to_string()))??;
        Ok(())
    }

    /// Persist the collection to the workbook at `path` and report what
    /// changed since the last baseline. On success the baseline resets and
    /// the unsaved flag clears; on failure nothing changes.
    pub async fn save_to_file(&mut self, path: &Path) -> RosterResult<ChangeSummary> {
        self.ensure_idle()?;
        self.export_to_file(path).await?;

        let summary = self.change_summary();
        self.reset_baseline();
        self.unsaved_changes = false;
        self.touch();

        info!(total = summary.total, %summary, file = %path.display(), "saved contacts");
        Ok(summary)
    }

    /// Compare the collection against the baseline captured at the last load
    /// or save. See [`ChangeSummary`] for the matching heuristic.
    pub fn change_summary(&self) -> ChangeSummary {
        let total = self.contacts.len();
        let added = total.saturating_sub(self.baseline_count);
        let removed = self.baseline_count.saturating_sub(total);

        let modified = self
            .contacts
            .iter()
            .filter(|current| {
                self.baseline
                    .iter()
                    .find(|original| {
                        (original.first_name == current.first_name
                            && original.last_name == current.last_name)
                            || (!current.phone.is_empty() && original.phone == current.phone)
                    })
                    .is_some_and(|original| original.core_tuple() != current.core_tuple())
            })
            .count();

        ChangeSummary {
            total,
            added,
            removed,
            modified,
        }
    }
}

/// Blocking half of a load: parse, optionally repair, sort.
fn load_rows(path: &Path, repair: bool) -> crate::error::WorkbookResult<Vec<Contact>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let sheet = workbook::read_contacts(path)?;
    let mut contacts = sheet.contacts;

    // Rewrite before sorting so the repaired file keeps its row order.
    if repair && !sheet.had_used_column {
        info!(file = %path.display(), "adding missing Used column");
        workbook::write_contacts(path, &contacts)?;
    }

    sort_by_name(&mut contacts);
    Ok(contacts)
}

/// Canonical collection order: ascending by trimmed first name, then trimmed
/// last name, byte-wise.
fn sort_by_name(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| {
        (a.first_name.trim(), a.last_name.trim()).cmp(&(b.first_name.trim(), b.last_name.trim()))
    });
}
