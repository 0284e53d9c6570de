use std::fs;

use tally_core::{Storage, TallyError, Task, TaskList};

mod common;
use common::create_test_environment;

#[test]
fn indices_are_one_based_and_bounds_checked() {
    let mut list = TaskList::new(vec![
        Task::todo("first"),
        Task::todo("second"),
        Task::todo("third"),
    ]);

    assert!(matches!(
        list.mark_done(0).unwrap_err(),
        TallyError::IndexOutOfRange { index: 0, size: 3 }
    ));
    assert!(matches!(
        list.mark_done(4).unwrap_err(),
        TallyError::IndexOutOfRange { index: 4, size: 3 }
    ));
    assert!(matches!(
        list.mark_done(-1).unwrap_err(),
        TallyError::IndexOutOfRange { index: -1, size: 3 }
    ));

    let marked = list.mark_done(1).expect("index 1 is the first task");
    assert_eq!(marked.description(), "first");
    assert!(marked.is_done());
}

#[test]
fn remove_shifts_later_tasks_down_preserving_order() {
    let mut list = TaskList::new(vec![
        Task::todo("first"),
        Task::todo("second"),
        Task::todo("third"),
    ]);

    let removed = list.remove(2).expect("index 2 exists");
    assert_eq!(removed.description(), "second");
    assert_eq!(list.len(), 2);
    assert_eq!(list.tasks()[0].description(), "first");
    assert_eq!(list.tasks()[1].description(), "third");
}

#[test]
fn out_of_range_remove_leaves_the_list_unchanged() {
    let mut list = TaskList::new(vec![Task::todo("a"), Task::todo("b"), Task::todo("c")]);

    assert!(matches!(
        list.remove(5).unwrap_err(),
        TallyError::IndexOutOfRange { index: 5, size: 3 }
    ));
    assert_eq!(list.len(), 3);
}

#[test]
fn mark_is_idempotent() {
    let mut list = TaskList::new(vec![Task::todo("x")]);
    list.mark_done(1).expect("in range");
    list.mark_done(1).expect("marking an already-done task is fine");
    assert!(list.tasks()[0].is_done());

    list.unmark_done(1).expect("in range");
    assert!(!list.tasks()[0].is_done());
}

#[test]
fn find_matches_rendered_text_case_insensitively() {
    let list = TaskList::new(vec![
        Task::todo("Read Book"),
        Task::todo("buy milk"),
        Task::deadline("return book", "2019-12-02", Some("18:00")).expect("valid"),
    ]);

    let matches = list.find("BOOK").expect("keyword is non-blank");
    let indices: Vec<usize> = matches.iter().map(|(index, _)| *index).collect();
    assert_eq!(indices, vec![1, 3]);

    // Temporal text is part of the rendered line, so dates are searchable.
    let by_date = list.find("2019-12").expect("keyword is non-blank");
    assert_eq!(by_date.len(), 1);
    assert_eq!(by_date[0].0, 3);
}

#[test]
fn find_without_matches_returns_an_empty_sequence() {
    let list = TaskList::new(vec![Task::todo("read book")]);
    assert!(list.find("laundry").expect("non-blank keyword").is_empty());
}

#[test]
fn find_rejects_a_blank_keyword() {
    let list = TaskList::new(vec![Task::todo("read book")]);
    assert!(matches!(list.find("   ").unwrap_err(), TallyError::EmptyKeyword));
}

#[test]
fn mutations_write_through_to_storage() {
    let (_temp_dir, data_path) = create_test_environment();
    let mut list = TaskList::with_storage(Vec::new(), Storage::new(&data_path));

    list.add(Task::todo("read book")).expect("add persists");
    assert_eq!(
        fs::read_to_string(&data_path).expect("file exists"),
        "T | 0 | read book\n"
    );

    list.mark_done(1).expect("mark persists");
    assert_eq!(
        fs::read_to_string(&data_path).expect("file exists"),
        "T | 1 | read book\n"
    );

    list.remove(1).expect("remove persists");
    assert_eq!(fs::read_to_string(&data_path).expect("file exists"), "");
}

#[test]
fn failed_bounds_checks_never_touch_the_save_file() {
    let (_temp_dir, data_path) = create_test_environment();
    let mut list = TaskList::with_storage(Vec::new(), Storage::new(&data_path));

    assert!(list.mark_done(1).is_err());
    assert!(list.remove(1).is_err());
    assert!(!data_path.exists(), "no mutation happened, so no write");
}

#[test]
fn find_never_writes() {
    let (_temp_dir, data_path) = create_test_environment();
    let list = TaskList::with_storage(vec![Task::todo("read book")], Storage::new(&data_path));

    list.find("book").expect("non-blank keyword");
    assert!(!data_path.exists(), "queries must not persist");
}
