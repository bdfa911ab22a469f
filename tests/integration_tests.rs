//! Integration tests for addrbook
//!
//! End-to-end flows across the store, storage and generator.

use std::sync::Arc;
use std::thread;

use addrbook::generator::Generator;
use addrbook::{AddressBook, Contact, CsvStorage};
use tempfile::TempDir;

// =============================================================================
// Store Lifecycle
// =============================================================================

#[test]
fn test_hundred_contacts_lifecycle() {
    let book = AddressBook::new();

    book.add(Contact::new("John", "Doe", "jd@example.com", "", "")).unwrap();
    assert_eq!(book.list_all().len(), 1);

    for i in 1..100 {
        book.add(Contact::new(
            format!("Person{}", i),
            format!("Surname{}", i),
            format!("p{}@example.com", i),
            "",
            "",
        ))
        .unwrap();
    }
    assert_eq!(book.list_all().len(), 100);

    let found = book.search("john");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name, "John");

    for contact in book.list_all() {
        book.delete(contact.id()).unwrap();
    }
    assert_eq!(book.list_all().len(), 0);
}

// =============================================================================
// Persistence Flows
// =============================================================================

#[test]
fn test_session_style_load_mutate_save_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data").join("contacts.csv");

    // First run: nothing on disk
    let storage = CsvStorage::new(&path);
    let book = storage.load().unwrap();
    assert!(book.is_empty());

    let mut generator = Generator::seeded(3);
    for contact in generator.generate_contacts(10) {
        book.add(contact).unwrap();
    }
    let target = book.list_all()[4].clone();
    let mut edited = target.clone();
    edited.address = "Moved, no forwarding".to_string();
    book.update(edited).unwrap();
    book.delete(book.list_all()[0].id()).unwrap();
    storage.save(&book).unwrap();

    // Second run: new process, new storage instance
    let reloaded = CsvStorage::new(&path).load().unwrap();
    assert_eq!(reloaded.len(), 9);
    let stored = reloaded.get(target.id()).unwrap();
    assert_eq!(stored.address, "Moved, no forwarding");
    assert!(stored.updated_at() >= target.updated_at());
    assert_eq!(stored.created_at(), target.created_at());
}

#[test]
fn test_save_while_readers_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("contacts.csv");
    let storage = Arc::new(CsvStorage::with_batch_size(&path, 16));
    let book = Arc::new(AddressBook::new());
    for contact in Generator::seeded(9).generate_contacts(200) {
        book.add(contact).unwrap();
    }

    let mut handles = vec![];
    for _ in 0..4 {
        let book = Arc::clone(&book);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                assert_eq!(book.search("").len(), 200);
            }
        }));
    }
    for _ in 0..3 {
        storage.save(&book).unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let loaded = CsvStorage::new(&path).load().unwrap();
    assert_eq!(loaded.list_all(), book.list_all());
}
