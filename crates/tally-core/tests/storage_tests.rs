use std::fs;

use tally_core::{Storage, TallyError, Task};

mod common;
use common::create_test_environment;

#[test]
fn loading_a_missing_file_yields_an_empty_collection() {
    let (_temp_dir, data_path) = create_test_environment();

    let tasks = Storage::new(&data_path)
        .load()
        .expect("missing file is not an error");
    assert!(tasks.is_empty());
    assert!(!data_path.exists(), "load must not create the file");
}

#[test]
fn save_then_load_round_trips_exactly() {
    let (_temp_dir, data_path) = create_test_environment();
    let storage = Storage::new(&data_path);

    let mut done_deadline =
        Task::deadline("return book", "2019-12-02", Some("18:00")).expect("valid deadline");
    done_deadline.mark_done();
    let original = vec![
        Task::todo("read book"),
        done_deadline,
        Task::event("meeting", "2025-10-20 10:00", "2025-10-20 11:00").expect("valid event"),
    ];

    storage.save(&original).expect("save should succeed");
    let reloaded = storage.load().expect("load should succeed");

    assert_eq!(reloaded, original);
}

#[test]
fn save_emits_one_canonical_line_per_task() {
    let (_temp_dir, data_path) = create_test_environment();
    let storage = Storage::new(&data_path);

    let tasks = vec![
        Task::todo("read book"),
        Task::deadline("buy milk", "2019-12-02", None).expect("valid deadline"),
    ];
    storage.save(&tasks).expect("save should succeed");

    let contents = fs::read_to_string(&data_path).expect("file should exist");
    assert_eq!(
        contents,
        "T | 0 | read book\nD | 0 | buy milk | 2019-12-02 00:00\n"
    );
}

#[test]
fn save_overwrites_instead_of_appending() {
    let (_temp_dir, data_path) = create_test_environment();
    let storage = Storage::new(&data_path);

    storage
        .save(&[Task::todo("first"), Task::todo("second")])
        .expect("first save");
    storage.save(&[Task::todo("only")]).expect("second save");

    let contents = fs::read_to_string(&data_path).expect("file should exist");
    assert_eq!(contents, "T | 0 | only\n");
}

#[test]
fn save_creates_the_parent_directory() {
    let (temp_dir, _) = create_test_environment();
    let nested = temp_dir.path().join("data").join("nested").join("tasks.txt");

    Storage::new(&nested)
        .save(&[Task::todo("x")])
        .expect("save should create parent directories");
    assert!(nested.exists());
}

#[test]
fn blank_lines_are_skipped_and_pipes_tolerate_whitespace() {
    let (_temp_dir, data_path) = create_test_environment();
    fs::write(
        &data_path,
        "T|1|read book\n\n   \nD | 0 |   return book   | 2019-12-02 18:00\n",
    )
    .expect("test file should be writable");

    let tasks = Storage::new(&data_path).load().expect("load should succeed");
    assert_eq!(tasks.len(), 2);
    assert!(tasks[0].is_done());
    assert_eq!(tasks[0].description(), "read book");
    assert_eq!(
        tasks[1].to_data_line(),
        "D | 0 | return book | 2019-12-02 18:00"
    );
}

#[test]
fn date_only_temporal_fields_load_at_midnight() {
    let (_temp_dir, data_path) = create_test_environment();
    fs::write(&data_path, "D | 0 | buy milk | 2019-12-02\n").expect("writable");

    let tasks = Storage::new(&data_path).load().expect("load should succeed");
    assert_eq!(tasks[0].to_data_line(), "D | 0 | buy milk | 2019-12-02 00:00");
}

#[test]
fn a_line_with_too_few_fields_fails_the_load() {
    let (_temp_dir, data_path) = create_test_environment();
    fs::write(&data_path, "T | 1\n").expect("writable");

    let err = Storage::new(&data_path).load().unwrap_err();
    assert!(matches!(err, TallyError::MalformedLine { .. }));
}

#[test]
fn an_unknown_type_tag_fails_the_load() {
    let (_temp_dir, data_path) = create_test_environment();
    fs::write(&data_path, "X | 1 | bad type\n").expect("writable");

    let err = Storage::new(&data_path).load().unwrap_err();
    assert!(matches!(err, TallyError::UnknownType { ref tag, .. } if tag == "X"));
}

#[test]
fn an_invalid_done_flag_fails_the_load() {
    let (_temp_dir, data_path) = create_test_environment();
    fs::write(&data_path, "T | yes | read book\n").expect("writable");

    let err = Storage::new(&data_path).load().unwrap_err();
    assert!(matches!(err, TallyError::InvalidDoneFlag { ref flag, .. } if flag == "yes"));
}

#[test]
fn a_deadline_without_its_temporal_field_fails_the_load() {
    let (_temp_dir, data_path) = create_test_environment();
    fs::write(&data_path, "D | 0 | return book\n").expect("writable");

    let err = Storage::new(&data_path).load().unwrap_err();
    assert!(matches!(err, TallyError::MissingTemporalField { .. }));
}

#[test]
fn an_event_span_without_the_dash_separator_fails_the_load() {
    let (_temp_dir, data_path) = create_test_environment();
    fs::write(&data_path, "E | 0 | meeting | 2025-10-20 10:00\n").expect("writable");

    let err = Storage::new(&data_path).load().unwrap_err();
    assert!(matches!(err, TallyError::MissingTemporalField { .. }));
}

#[test]
fn one_corrupt_line_fails_the_whole_load() {
    let (_temp_dir, data_path) = create_test_environment();
    fs::write(
        &data_path,
        "T | 0 | fine\nD | 0 | also fine | 2019-12-02 18:00\nT | 2 | corrupt\n",
    )
    .expect("writable");

    assert!(Storage::new(&data_path).load().is_err());
}

#[test]
fn extra_trailing_fields_are_ignored() {
    let (_temp_dir, data_path) = create_test_environment();
    fs::write(&data_path, "T | 0 | read book | leftover | fields\n").expect("writable");

    let tasks = Storage::new(&data_path).load().expect("load should succeed");
    assert_eq!(tasks[0].to_data_line(), "T | 0 | read book");
}
