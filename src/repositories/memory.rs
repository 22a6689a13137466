use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory contact repository.
///
/// Holds the collection for the lifetime of the process; nothing is
/// persisted. Useful for demos and as a test double for the web API.
pub struct MemoryContactRepository {
    inner: RwLock<Inner>,
}

struct Inner {
    contacts: Vec<Contact>,
    next_id: u32,
}

impl MemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                contacts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a repository seeded with a handful of demo contacts.
    pub fn with_sample_data() -> Self {
        let samples = [
            ("John", "Doe", "555-1234", true),
            ("Jane", "Smith", "555-5678", false),
            ("Mike", "Johnson", "555-9012", true),
            ("Sarah", "Williams", "555-3456", false),
            ("David", "Brown", "555-7890", true),
        ];

        let now = Utc::now();
        let contacts = samples
            .iter()
            .enumerate()
            .map(|(i, (first, last, phone, used))| Contact {
                id: (i as u32) + 1,
                used: *used,
                created_date: Some(now),
                modified_date: Some(now),
                ..Contact::new(*first, *last, *phone)
            })
            .collect::<Vec<_>>();

        let next_id = contacts.len() as u32 + 1;
        Self {
            inner: RwLock::new(Inner { contacts, next_id }),
        }
    }
}

impl Default for MemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
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

        inner.contacts.push(contact.clone());
        inner.next_id += 1;
        Ok(contact)
    }

    async fn update(&self, id: u32, contact: Contact) -> RepositoryResult<Contact> {
        let mut inner = self.inner.write().await;
        let existing = inner
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        existing.apply_update(&contact);
        existing.modified_date = Some(Utc::now());
        Ok(existing.clone())
    }

    async fn delete(&self, id: u32) -> RepositoryResult<()> {
        let mut inner = self.inner.write().await;
        let position = inner
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        inner.contacts.remove(position);
        Ok(())
    }

    async fn save_all(&self, contacts: Vec<Contact>) -> RepositoryResult<()> {
        let mut inner = self.inner.write().await;
        inner.next_id = contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        inner.contacts = contacts;
        Ok(())
    }
}
