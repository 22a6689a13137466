use async_trait::async_trait;
use chrono::Utc;
use contacts_manager::error::{RepositoryError, RepositoryResult, WorkbookError};
use contacts_manager::models::Contact;
use contacts_manager::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// configured with test data, tracks method calls for verification, and can
/// be told to fail so error paths are exercised.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    next_id: Arc<Mutex<u32>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_writes: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_writes: Arc::new(Mutex::new(false)),
        }
    }

    /// Add contacts directly, bypassing the trait methods.
    pub fn seed(&self, contacts_list: Vec<Contact>) {
        let mut contacts = self.contacts.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        for mut contact in contacts_list {
            if contact.id == 0 {
                contact.id = *next_id;
            }
            *next_id = (*next_id).max(contact.id) + 1;
            contacts.push(contact);
        }
    }

    /// Make every mutating call fail with a workbook error.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_write_failure(&self) -> RepositoryResult<()> {
        if *self.fail_writes.lock().unwrap() {
            Err(RepositoryError::Workbook(WorkbookError::Write(
                "disk full".to_string(),
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Contact>> {
        self.track_call("get_all");
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn get(&self, id: u32) -> RepositoryResult<Contact> {
        self.track_call("get");
        self.contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn add(&self, mut contact: Contact) -> RepositoryResult<Contact> {
        self.track_call("add");
        self.check_write_failure()?;

        let mut next_id = self.next_id.lock().unwrap();
        contact.id = *next_id;
        *next_id += 1;
        let now = Utc::now();
        contact.created_date = Some(now);
        contact.modified_date = Some(now);

        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: u32, contact: Contact) -> RepositoryResult<Contact> {
        self.track_call("update");
        self.check_write_failure()?;

        let mut contacts = self.contacts.lock().unwrap();
        let existing = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        existing.apply_update(&contact);
        existing.modified_date = Some(Utc::now());
        Ok(existing.clone())
    }

    async fn delete(&self, id: u32) -> RepositoryResult<()> {
        self.track_call("delete");
        self.check_write_failure()?;

        let mut contacts = self.contacts.lock().unwrap();
        let position = contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        contacts.remove(position);
        Ok(())
    }

    async fn save_all(&self, contacts: Vec<Contact>) -> RepositoryResult<()> {
        self.track_call("save_all");
        self.check_write_failure()?;

        *self.next_id.lock().unwrap() = contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        *self.contacts.lock().unwrap() = contacts;
        Ok(())
    }
}
