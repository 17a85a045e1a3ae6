use std::fs;

use apidoc_core::{add_front_matter, ConversionResult, ResultMeta};
use apidoc_engine::{
    load_results, page_filename, save_results, write_pages, LoadError, WriteError, WriteOptions,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn api_result(markdown: &str, name: &str, api_type: &str) -> ConversionResult {
    ConversionResult::new(markdown, ResultMeta::api(name, api_type))
}

#[test]
fn filename_is_deterministic_and_safe() {
    let class = api_result("Body", "qiskit.circuit.QuantumCircuit", "class");
    assert_eq!(page_filename(&class, 0), "qiskit.circuit.QuantumCircuit.md");

    let odd = api_result("Body", "pkg:mod/<Thing>", "class");
    assert_eq!(page_filename(&odd, 3), "pkg_mod_Thing.md");

    let reserved = api_result("Body", "con", "module");
    assert_eq!(page_filename(&reserved, 0), "con_.md");

    let reserved_with_dot = api_result("Body", "nul.foo", "module");
    assert_eq!(page_filename(&reserved_with_dot, 0), "nul_.foo.md");

    let plain = ConversionResult::new("Release notes", ResultMeta::default());
    let name = page_filename(&plain, 7);
    assert!(name.starts_with("page-0007--"));
    assert!(name.ends_with(".md"));
    assert_eq!(name, page_filename(&plain, 7));
}

#[test]
fn pages_and_manifest_are_written() {
    apidoc_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("api");
    let results = add_front_matter(vec![
        api_result("Class body.", "qiskit.circuit.QuantumCircuit", "class"),
        ConversionResult::new("Index page", ResultMeta::default()),
    ])
    .unwrap();

    let summary = write_pages(&out_dir, &results, &WriteOptions::default()).unwrap();

    assert_eq!(summary.page_count, 2);
    assert_eq!(summary.api_page_count, 1);
    assert_eq!(summary.page_paths.len(), 2);

    let class_page = fs::read_to_string(out_dir.join("qiskit.circuit.QuantumCircuit.md")).unwrap();
    assert!(class_page.starts_with("---\ntitle: QuantumCircuit\n"));
    assert!(class_page.ends_with("---\n\nClass body.\n"));
    assert_eq!(fs::read_to_string(&summary.page_paths[1]).unwrap(), "Index page");

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(summary.manifest_path.unwrap()).unwrap())
            .unwrap();
    assert_eq!(manifest["page_count"], 2);
    assert_eq!(manifest["api_page_count"], 1);
    assert_eq!(manifest["pages"][0]["title"], "QuantumCircuit");
    assert_eq!(manifest["pages"][0]["python_api_type"], "class");
    assert!(manifest["pages"][1]["python_api_name"].is_null());
}

#[test]
fn manifest_can_be_disabled() {
    let temp = TempDir::new().unwrap();
    let options = WriteOptions {
        manifest_filename: None,
    };
    let summary = write_pages(temp.path(), &[], &options).unwrap();
    assert_eq!(summary.page_count, 0);
    assert!(summary.manifest_path.is_none());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn duplicate_api_names_write_nothing() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("api");
    let results = vec![
        api_result("One", "qiskit.pulse", "module"),
        api_result("Two", "qiskit.pulse", "module"),
    ];

    let err = write_pages(&out_dir, &results, &WriteOptions::default()).unwrap_err();

    assert!(matches!(err, WriteError::DuplicateFilename(ref name) if name == "qiskit.pulse.md"));
    assert!(!out_dir.exists());
}

#[test]
fn names_differing_only_in_case_write_nothing() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("api");
    let results = add_front_matter(vec![
        api_result("Class", "qiskit.pulse.library.Gaussian", "class"),
        api_result("Function", "qiskit.pulse.library.gaussian", "function"),
    ])
    .unwrap();

    let err = write_pages(&out_dir, &results, &WriteOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        WriteError::DuplicateFilename(ref name) if name == "qiskit.pulse.library.gaussian.md"
    ));
    assert!(!out_dir.exists());
}

#[test]
fn page_clashing_with_manifest_ignoring_case_is_rejected() {
    let temp = TempDir::new().unwrap();
    let options = WriteOptions {
        manifest_filename: Some("Index.MD".to_string()),
    };
    let results = vec![api_result("Body", "index", "module")];
    let err = write_pages(temp.path(), &results, &options).unwrap_err();
    assert!(matches!(err, WriteError::DuplicateFilename(ref name) if name == "index.md"));
}

#[test]
fn results_file_loads_and_saves() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("results.json");
    fs::write(
        &input,
        r#"[{"markdown": "Body.", "meta": {"python_api_name": "a.b.C", "python_api_type": "class"}, "url": "/api/a/b/C"}]"#,
    )
    .unwrap();

    let results = add_front_matter(load_results(&input).unwrap()).unwrap();
    let output = temp.path().join("out").join("results.json");
    let written = save_results(&output, &results).unwrap();
    assert_eq!(written, output);

    let reloaded = load_results(&output).unwrap();
    assert_eq!(reloaded, results);
    assert_eq!(reloaded[0].extra["url"], "/api/a/b/C");
}

#[test]
fn missing_meta_fails_to_load() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("results.json");
    fs::write(&input, r#"[{"markdown": "Body."}]"#).unwrap();

    let err = load_results(&input).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn missing_results_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let err = load_results(&temp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
