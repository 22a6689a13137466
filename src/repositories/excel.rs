use crate::error::{RepositoryError, RepositoryResult, WorkbookResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use crate::workbook;
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

/// Contact repository persisted to an Excel workbook.
///
/// The whole file is the unit of persistence: every mutation rewrites it from
/// the in-memory collection. Writes happen before the collection is updated,
/// so a failed write leaves both the file and the collection as they were.
/// File I/O runs on the blocking thread pool to keep the async runtime free.
pub struct ExcelContactRepository {
    path: PathBuf,
    inner: RwLock<Inner>,
}

struct Inner {
    contacts: Vec<Contact>,
    next_id: u32,
}

impl ExcelContactRepository {
    /// Open the repository at `path`, loading any existing contacts.
    ///
    /// A missing file is created empty. An unreadable file is logged and
    /// recreated empty; the previous bytes are not recoverable, matching the
    /// whole-file-rewrite persistence model.
    pub async fn open(path: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let path = path.into();
        let load_path = path.clone();
        let contacts = tokio::task::spawn_blocking(move || load_or_create(&load_path))
            .await
            .map_err(|e| RepositoryError::TaskJoin(e.to_string()))??;

        info!(count = contacts.len(), file = %path.display(), "loaded contacts workbook");

        let next_id = contacts.len() as u32 + 1;
        Ok(Self {
            path,
            inner: RwLock::new(Inner { contacts, next_id }),
        })
    }

    /// Path of the backing workbook file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, contacts: &[Contact]) -> RepositoryResult<()> {
        let path = self.path.clone();
        let snapshot = contacts.to_vec();
        tokio::task::spawn_blocking(move || workbook::write_contacts(&path, &snapshot))
            .await
            .map_err(|e| RepositoryError::TaskJoin(e.to_string()))??;
        Ok(())
    }
}

/// Load the workbook, creating an empty one when missing or unreadable.
fn load_or_create(path: &Path) -> WorkbookResult<Vec<Contact>> {
    if !path.exists() {
        warn!(file = %path.display(), "contacts workbook not found, creating empty file");
        workbook::write_contacts(path, &[])?;
        return Ok(Vec::new());
    }

    match workbook::read_contacts(path) {
        Ok(sheet) => {
            let mut contacts = sheet.contacts;
            for (i, contact) in contacts.iter_mut().enumerate() {
                contact.id = (i as u32) + 1;
            }
            Ok(contacts)
        }
        Err(e) => {
            error!(file = %path.display(), "failed to load contacts workbook: {e}");
            workbook::write_contacts(path, &[])?;
            Ok(Vec::new())
        }
    }
}

#[async_trait]
impl ContactRepository for ExcelContactRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Contact>> {
        Ok(self.inner.read().await.contacts.clone())
    }

    async fn get(&self, id: u32) -> RepositoryResult<Contact> {
        let inner = self.inner.read().await;
        inner
            .contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn add(&self, mut contact: Contact) -> RepositoryResult<Contact> {
        let mut inner = self.inner.write().await;
        contact.id = inner.next_id;
        let now = Utc::now();
        contact.created_date = Some(now);
        contact.modified_date = Some(now);

        let mut next = inner.contacts.clone();
        next.push(contact.clone());
        self.persist(&next).await?;

        inner.contacts = next;
        inner.next_id += 1;
        Ok(contact)
    }

    async fn update(&self, id: u32, contact: Contact) -> RepositoryResult<Contact> {
        let mut inner = self.inner.write().await;
        let mut next = inner.contacts.clone();
        let existing = next
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        existing.apply_update(&contact);
        existing.modified_date = Some(Utc::now());
        let updated = existing.clone();

        self.persist(&next).await?;
        inner.contacts = next;
        Ok(updated)
    }

    async fn delete(&self, id: u32) -> RepositoryResult<()> {
        let mut inner = self.inner.write().await;
        let position = inner
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        let mut next = inner.contacts.clone();
        next.remove(position);
        self.persist(&next).await?;

        inner.contacts = next;
        Ok(())
    }

    async fn save_all(&self, contacts: Vec<Contact>) -> RepositoryResult<()> {
        let mut inner = self.inner.write().await;
        info!(count = contacts.len(), "replacing all contacts");

        self.persist(&contacts).await?;
        inner.next_id = contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        inner.contacts = contacts;
        Ok(())
    }
}
