use std::fs;
use std::path::Path;
use serial_test::serial;

use crate::{
    Error,
    contact::{Contact, ContactBuilder, ContactType, EditOutcome, Field},
    phonebook::{PhoneBook, PhoneBookBuilder},
};

use super::{
    working_path,
    remove_working_path,
};

fn person(name: &str, surname: &str, number: &str) -> Contact {
    ContactBuilder::new(ContactType::Person)
        .with_name(name)
        .with_surname(surname)
        .with_number(number)
        .build()
        .unwrap()
}

fn organization(name: &str, address: &str) -> Contact {
    ContactBuilder::new(ContactType::Organization)
        .with_name(name)
        .with_address(address)
        .build()
        .unwrap()
}

fn sample() -> PhoneBook {
    let mut book = PhoneBookBuilder::new().build().unwrap();
    book.add(person("John", "Smith", "123 456"));
    book.add(organization("Pizza Shop", "Wall St. 1"));
    book.add(person("Jane", "Doe", ""));
    book
}

#[test]
fn test_add_and_get() {
    let mut book = PhoneBookBuilder::new().build().unwrap();
    assert_eq!(book.count(), 0);
    assert_eq!(book.is_empty(), true);

    let contact = person("John", "Smith", "+7 (911) 123-45-67");
    book.add(contact.clone());
    assert_eq!(book.count(), 1);

    let last = book.get(book.count()).unwrap();
    assert_eq!(last, &contact);
    assert_eq!(last.created(), last.last_edit());
}

#[test]
fn test_list() {
    let book = sample();
    assert_eq!(book.list(), vec![
        (1, "John Smith".to_string()),
        (2, "Pizza Shop".to_string()),
        (3, "Jane Doe".to_string()),
    ]);
}

#[test]
fn test_bad_index() {
    let mut book = sample();
    assert!(matches!(book.get(0), Err(Error::Index(_))));
    assert!(matches!(book.get(4), Err(Error::Index(_))));
    assert!(matches!(book.remove(4), Err(Error::Index(_))));
    assert!(matches!(book.replace_field(0, Field::Name, "x"), Err(Error::Index(_))));
    assert_eq!(book.count(), 3);
}

#[test]
fn test_remove_shifts_indices() {
    let mut book = sample();
    let removed = book.remove(1).unwrap();
    assert_eq!(removed.label(), "John Smith");
    assert_eq!(book.count(), 2);
    assert_eq!(book.get(1).unwrap().label(), "Pizza Shop");
    assert_eq!(book.get(2).unwrap().label(), "Jane Doe");
}

#[test]
fn test_replace_field() {
    let mut book = sample();
    let rc = book.replace_field(1, Field::Number, "not-a-number!");
    assert_eq!(rc.unwrap(), EditOutcome::Cleared);

    let contact = book.get(1).unwrap();
    assert_eq!(contact.number(), "");
    assert_eq!(contact.name(), "John");
    assert_eq!(contact.surname(), Some("Smith"));

    assert!(matches!(book.replace_field(2, Field::Gender, "M"), Err(Error::Field(_))));
    assert_eq!(book.replace_field(2, Field::Address, "Elm St. 5").unwrap(), EditOutcome::Updated);
    assert_eq!(book.get(2).unwrap().address(), Some("Elm St. 5"));
}

#[test]
fn test_search() {
    let book = sample();

    let hits = book.search("j").unwrap();
    let indices: Vec<usize> = hits.iter().map(|h| h.index).collect();
    assert_eq!(indices, vec![1, 3]);

    let hits = book.search("WALL").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 2);
    assert_eq!(hits[0].contact.name(), "Pizza Shop");

    // Property values are concatenated without separators.
    assert_eq!(book.search("smith123").unwrap().len(), 1);
    assert_eq!(book.search("^jane").unwrap().len(), 1);
    assert_eq!(book.search("nobody").unwrap().len(), 0);
}

#[test]
fn test_search_is_stable() {
    let book = sample();
    let first: Vec<usize> = book.search("o").unwrap().iter().map(|h| h.index).collect();
    let second: Vec<usize> = book.search("o").unwrap().iter().map(|h| h.index).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![1, 2, 3]);
}

#[test]
fn test_search_falls_back_to_literal() {
    let mut book = sample();
    book.add(person("Bracket(", "Guy", ""));
    let hits = book.search("t(").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 4);
}

#[test]
fn test_no_path_means_no_persistence() {
    let mut book = sample();
    assert!(book.path().is_none());
    book.load().unwrap();
    assert_eq!(book.count(), 3);
    assert_eq!(book.persist().unwrap(), false);
}

#[test]
#[serial]
fn test_load_creates_missing_file() {
    let dir = working_path("phonebook_missing");
    let file = format!("{}/book.db", dir);
    assert!(!Path::new(&file).exists());

    let mut book = PhoneBookBuilder::new().with_path(&file).build().unwrap();
    book.load().unwrap();
    assert_eq!(book.count(), 0);
    assert!(Path::new(&file).exists());
    assert_eq!(fs::read_to_string(&file).unwrap(), "");

    // An empty file loads as an empty phone book.
    let mut book = PhoneBookBuilder::new().with_path(&file).build().unwrap();
    book.load().unwrap();
    assert_eq!(book.count(), 0);

    remove_working_path(&dir);
}

#[test]
#[serial]
fn test_persist_and_load() {
    let dir = working_path("phonebook_roundtrip");
    let file = format!("{}/book.db", dir);

    let mut book = sample();
    book.replace_field(3, Field::Birthdate, "01/02/2003").unwrap();
    let mut saved = PhoneBookBuilder::new().with_path(&file).build().unwrap();
    for contact in book.contacts() {
        saved.add(contact.clone());
    }
    assert_eq!(saved.persist().unwrap(), true);

    let mut loaded = PhoneBookBuilder::new().with_path(&file).build().unwrap();
    loaded.load().unwrap();
    assert_eq!(loaded.contacts(), saved.contacts());
    for (a, b) in loaded.contacts().iter().zip(saved.contacts()) {
        assert_eq!(a.contact_type(), b.contact_type());
        assert_eq!(a.created(), b.created());
        assert_eq!(a.last_edit(), b.last_edit());
    }

    remove_working_path(&dir);
}

#[test]
#[serial]
fn test_load_broken_file() {
    let dir = working_path("phonebook_broken");
    let file = format!("{}/book.db", dir);
    fs::write(&file, "this is not json").unwrap();

    let mut book = PhoneBookBuilder::new().with_path(&file).build().unwrap();
    assert!(matches!(book.load(), Err(Error::Format(_))));

    remove_working_path(&dir);
}

#[test]
fn test_empty_path_rejected() {
    assert!(PhoneBookBuilder::new().with_path("  ").build().is_err());
}
