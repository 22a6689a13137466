use crate::error::RepositoryResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval, enabling
/// different implementations (in-memory, Excel-backed, mock). Ids are
/// assigned by the repository on creation, starting at 1 and increasing
/// monotonically; `save_all` replaces the whole collection in one step.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve all contacts in collection order.
    async fn get_all(&self) -> RepositoryResult<Vec<Contact>>;

    /// Retrieve a single contact by id.
    async fn get(&self, id: u32) -> RepositoryResult<Contact>;

    /// Create a new contact. The repository assigns the id and stamps the
    /// created/modified timestamps; the returned record carries them.
    async fn add(&self, contact: Contact) -> RepositoryResult<Contact>;

    /// Update the editable fields of an existing contact.
    async fn update(&self, id: u32, contact: Contact) -> RepositoryResult<Contact>;

    /// Delete a contact.
    async fn delete(&self, id: u32) -> RepositoryResult<()>;

    /// Replace the entire collection with the provided list. The next id
    /// becomes one past the highest id in the list (or 1 when empty).
    async fn save_all(&self, contacts: Vec<Contact>) -> RepositoryResult<()>;
}
