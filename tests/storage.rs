use robert::error::{RecordError, StorageError};
use robert::model::{Task, TaskList};
use robert::storage::LocalStorage;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_line_format_per_kind() {
    let mut todo = Task::todo("read book");
    assert_eq!(todo.to_line(), "T|0|read book");
    todo.mark_done();
    assert_eq!(todo.to_line(), "T|1|read book");

    let deadline = Task::deadline("submit", "2025-01-01").unwrap();
    assert_eq!(deadline.to_line(), "D|0|submit|2025-01-01");

    let event = Task::event("meeting", "Mon 2pm", "4pm");
    assert_eq!(event.to_line(), "E|0|meeting|Mon 2pm|4pm");
}

#[test]
fn test_from_line_policies() {
    let task = Task::from_line("D | 1 | submit | 2025-01-01").unwrap();
    assert!(task.is_done());
    assert_eq!(task.to_string(), "[D][X] submit (by: Jan 1 2025)");

    for bad in ["", "???|???|malformed", "T|0", "D|0|submit", "E|0|x|2pm", "T|0|"] {
        assert!(
            matches!(Task::from_line(bad), Err(RecordError::Malformed)),
            "{bad:?} should be malformed"
        );
    }
    for bad_date in ["D|0|submit|2025-02-30", "D|0|submit|2025-1-1", "D|0|submit|25-01-01"] {
        assert!(
            matches!(Task::from_line(bad_date), Err(RecordError::InvalidDate(_))),
            "{bad_date:?} should carry an invalid date"
        );
    }
}

#[test]
fn test_load_creates_missing_file_and_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("tasks.txt");
    let storage = LocalStorage::new(&path);

    let tasks = storage.load().unwrap();
    assert!(tasks.is_empty());
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let storage = LocalStorage::new(&path);

    let mut done = Task::event("conference", "Mon", "Wed");
    done.mark_done();
    let original = TaskList::from(vec![
        Task::todo("Buy groceries"),
        Task::deadline("Submit assignment", "2025-01-01").unwrap(),
        done,
    ]);
    storage.save(&original).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "T|0|Buy groceries",
            "D|0|Submit assignment|2025-01-01",
            "E|1|conference|Mon|Wed"
        ]
    );

    let loaded = storage.load().unwrap();
    let rendered: Vec<String> = loaded.iter().map(|t| t.to_string()).collect();
    let expected: Vec<String> = original.iter().map(|t| t.to_string()).collect();
    assert_eq!(rendered, expected);
    assert_eq!(rendered[1], "[D][ ] Submit assignment (by: Jan 1 2025)");
}

#[test]
fn test_save_overwrites_previous_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let storage = LocalStorage::new(&path);

    storage
        .save(&TaskList::from(vec![Task::todo("a"), Task::todo("b")]))
        .unwrap();
    storage.save(&TaskList::from(vec![Task::todo("c")])).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get(0).unwrap().description(), "c");
}

#[test]
fn test_load_skips_malformed_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(
        &path,
        "???|???|malformed\nT|0|keep me\n\nX|1|unknown tag\nD|0|short\nE|1|party|8pm|late\n",
    )
    .unwrap();

    let loaded = LocalStorage::new(&path).load().unwrap();
    let rendered: Vec<String> = loaded.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["[T][ ] keep me", "[E][X] party (from: 8pm to: late)"]
    );
}

#[test]
fn test_load_fails_on_invalid_deadline_date() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, "T|0|fine\nD|0|submit|2025-02-30\n").unwrap();

    let err = LocalStorage::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::InvalidRecord { line: 2, .. }));
}

#[test]
fn test_load_fails_on_non_iso_deadline_date() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, "D|0|x|2025-1-1\n").unwrap();

    let err = LocalStorage::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::InvalidRecord { line: 1, .. }));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("tasks.txt");
    let err = LocalStorage::new(&path)
        .save(&TaskList::from(vec![Task::todo("a")]))
        .unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
}
