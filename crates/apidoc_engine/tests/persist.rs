use std::fs;

use apidoc_engine::{ensure_output_dir, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("docs").join("api");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_page() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::create(temp.path()).unwrap();

    let first = writer.write("qiskit.pulse.md", "old body").unwrap();
    assert_eq!(first.file_name().unwrap(), "qiskit.pulse.md");
    assert_eq!(fs::read_to_string(&first).unwrap(), "old body");

    let second = writer.write("qiskit.pulse.md", "new body").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "new body");
}

#[test]
fn writer_refuses_file_as_output_dir() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let result = AtomicFileWriter::create(file_path.clone());
    assert!(matches!(result, Err(PersistError::OutputDir { .. })));
    assert!(!file_path.with_file_name("page.md").exists());
}

#[test]
fn nested_or_empty_filenames_are_rejected() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::create(temp.path()).unwrap();

    for name in ["", "..", "sub/page.md", "sub\\page.md"] {
        let err = writer.write(name, "body").unwrap_err();
        assert!(matches!(err, PersistError::InvalidFilename(_)), "{name:?}");
    }
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}
