//! CRUD lifecycle tests for the Excel-backed repository.
//!
//! Each test works against a workbook in its own temporary directory, so the
//! on-disk state can be asserted alongside the in-memory collection.

use contacts_manager::error::RepositoryError;
use contacts_manager::models::Contact;
use contacts_manager::repositories::{ContactRepository, ExcelContactRepository};
use contacts_manager::workbook::read_contacts;
use std::path::PathBuf;
use tempfile::TempDir;

fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("sa_contacts.xlsx")
}

#[tokio::test]
async fn test_open_missing_file_creates_empty_workbook() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let repo = ExcelContactRepository::open(&path).await.unwrap();

    assert!(repo.get_all().await.unwrap().is_empty());
    // the file now exists with the full header
    let sheet = read_contacts(&path).unwrap();
    assert!(sheet.had_used_column);
    assert!(sheet.contacts.is_empty());
}

#[tokio::test]
async fn test_open_unreadable_file_recreates_it_empty() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);
    std::fs::write(&path, b"garbage bytes").unwrap();

    let repo = ExcelContactRepository::open(&path).await.unwrap();

    assert!(repo.get_all().await.unwrap().is_empty());
    assert!(read_contacts(&path).is_ok());
}

#[tokio::test]
async fn test_crud_lifecycle_persists_every_mutation() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);
    let repo = ExcelContactRepository::open(&path).await.unwrap();

    // CREATE
    let created = repo
        .add(Contact::new("Ann", "Lee", "5551230000"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert!(created.created_date.is_some());

    let second = repo
        .add(Contact::new("Bo", "Ray", "5559998888"))
        .await
        .unwrap();
    assert_eq!(second.id, 2);

    // READ
    let fetched = repo.get(created.id).await.unwrap();
    assert_eq!(fetched.full_name(), "Ann Lee");
    assert!(matches!(
        repo.get(99).await,
        Err(RepositoryError::NotFound(99))
    ));

    // UPDATE
    let updated = repo
        .update(created.id, Contact::new("Anne", "Lee", "5551230000"))
        .await
        .unwrap();
    assert_eq!(updated.first_name, "Anne");
    assert_eq!(updated.created_date, created.created_date);

    // every mutation rewrote the file
    let on_disk = read_contacts(&path).unwrap();
    assert_eq!(on_disk.contacts.len(), 2);
    assert_eq!(on_disk.contacts[0].first_name, "Anne");

    // DELETE
    repo.delete(second.id).await.unwrap();
    assert!(matches!(
        repo.delete(second.id).await,
        Err(RepositoryError::NotFound(_))
    ));
    assert_eq!(read_contacts(&path).unwrap().contacts.len(), 1);
}

#[tokio::test]
async fn test_contacts_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    {
        let repo = ExcelContactRepository::open(&path).await.unwrap();
        repo.add(Contact::new("Ann", "Lee", "5551230000")).await.unwrap();
        repo.add(Contact::new("Bo", "Ray", "5559998888")).await.unwrap();
    }

    let reopened = ExcelContactRepository::open(&path).await.unwrap();
    let contacts = reopened.get_all().await.unwrap();
    assert_eq!(contacts.len(), 2);
    // ids are reassigned sequentially on load
    assert_eq!(contacts[0].id, 1);
    assert_eq!(contacts[1].id, 2);

    // and the id counter continues past them
    let next = reopened
        .add(Contact::new("Cy", "Orr", "5552223333"))
        .await
        .unwrap();
    assert_eq!(next.id, 3);
}

#[tokio::test]
async fn test_save_all_replaces_collection_and_file() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);
    let repo = ExcelContactRepository::open(&path).await.unwrap();

    repo.add(Contact::new("Ann", "Lee", "5551230000")).await.unwrap();

    let replacement = vec![
        Contact {
            id: 5,
            ..Contact::new("Dee", "Nu", "5554443333")
        },
        Contact {
            id: 7,
            ..Contact::new("Eve", "Ox", "5556667777")
        },
    ];
    repo.save_all(replacement).await.unwrap();

    let contacts = repo.get_all().await.unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(read_contacts(&path).unwrap().contacts.len(), 2);

    // next id continues past the highest saved id
    let next = repo.add(Contact::new("Flo", "Py", "5558889999")).await.unwrap();
    assert_eq!(next.id, 8);
}

#[tokio::test]
async fn test_used_flag_round_trips_through_repository() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    {
        let repo = ExcelContactRepository::open(&path).await.unwrap();
        let mut contact = Contact::new("Ann", "Lee", "5551230000");
        contact.used = true;
        repo.add(contact).await.unwrap();
    }

    let reopened = ExcelContactRepository::open(&path).await.unwrap();
    assert!(reopened.get_all().await.unwrap()[0].used);
}
