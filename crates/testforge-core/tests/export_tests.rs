use testforge_core::{
    ci_export, export_suite, CiProvider, ExportSink, FileExporter, SessionStore,
    ScriptedOutcomeSource, SuiteManager, TestGenerationConfig, TestType,
};
use tempfile::TempDir;

#[test]
fn test_export_suite_to_directory() {
    let temp = TempDir::new().unwrap();
    let manager = SuiteManager::new(ScriptedOutcomeSource::new(Vec::new()));
    let mut store = SessionStore::new();
    let suite = manager
        .generate_suite(
            &mut store,
            "export function Counter() {}",
            &TestGenerationConfig::default(),
        )
        .unwrap();

    let exporter = FileExporter::new(temp.path());
    let paths = exporter.save_all(&export_suite(&suite)).unwrap();

    assert_eq!(paths.len(), 2);
    let unit = std::fs::read_to_string(temp.path().join("Counter_Unit_Tests.test.js")).unwrap();
    assert_eq!(unit, suite.tests[0].code);
    assert!(temp.path().join("Counter_Integration_Tests.test.js").exists());
}

#[test]
fn test_repeated_test_type_exports_one_file() {
    let temp = TempDir::new().unwrap();
    let manager = SuiteManager::new(ScriptedOutcomeSource::new(Vec::new()));
    let mut store = SessionStore::new();
    let suite = manager
        .generate_suite(
            &mut store,
            "export function Button() {}",
            &TestGenerationConfig {
                test_types: vec![TestType::Unit, TestType::Unit],
                ..TestGenerationConfig::default()
            },
        )
        .unwrap();

    let files = export_suite(&suite);
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "Button_Unit_Tests.test.js");

    let paths = FileExporter::new(temp.path()).save_all(&files).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn test_export_ci_config() {
    let temp = TempDir::new().unwrap();
    let exporter = FileExporter::new(temp.path());

    let path = exporter.save(&ci_export(CiProvider::Gitlab)).unwrap();
    assert!(path.ends_with("gitlab-ci.yml"));
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.starts_with("stages:"));
}
