//! Export of generated test files.
//!
//! Exports are plain `(file name, content)` pairs. Persisting them is up to
//! an [`ExportSink`]; [`FileExporter`] writes them into a directory.

mod error;
mod file;

pub use error::ExportError;
pub use file::FileExporter;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::suite::{TestCase, TestSuite};

/// A named blob of text ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

/// Destination for exported files.
pub trait ExportSink {
    /// Saves one file and returns where it went.
    fn save(&self, file: &ExportFile) -> Result<PathBuf, ExportError>;

    /// Saves every file, stopping at the first failure.
    fn save_all(&self, files: &[ExportFile]) -> Result<Vec<PathBuf>, ExportError> {
        files.iter().map(|f| self.save(f)).collect()
    }
}

/// File name for a case: whitespace runs become `_`, suffix follows the framework.
pub fn case_file_name(suite: &TestSuite, case: &TestCase) -> String {
    let stem = match Regex::new(r"\s+") {
        Ok(re) => re.replace_all(&case.name, "_").into_owned(),
        Err(_) => case.name.replace(' ', "_"),
    };
    format!("{}.{}", stem, suite.config.framework.test_file_suffix())
}

/// Exports one case of `suite`.
pub fn export_case(suite: &TestSuite, case_id: &str) -> Result<ExportFile, ExportError> {
    let case = suite.case(case_id).ok_or_else(|| ExportError::CaseNotFound {
        suite_id: suite.id.clone(),
        case_id: case_id.to_string(),
    })?;

    Ok(ExportFile {
        file_name: case_file_name(suite, case),
        content: case.code.clone(),
    })
}

/// Exports every case of `suite`, in case order.
pub fn export_suite(suite: &TestSuite) -> Vec<ExportFile> {
    suite
        .tests
        .iter()
        .map(|case| ExportFile {
            file_name: case_file_name(suite, case),
            content: case.code.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{Framework, TestType};
    use crate::generation::TestGenerationConfig;

    fn suite(framework: Framework, types: &[TestType]) -> TestSuite {
        let config = TestGenerationConfig::new(framework, types.iter().copied());
        let tests = types
            .iter()
            .map(|tt| TestCase::generate("Button", *tt, framework).unwrap())
            .collect();
        TestSuite::new("Button", "export function Button() {}", config, tests)
    }

    #[test]
    fn test_case_file_names() {
        let jest = suite(Framework::Jest, &[TestType::Unit]);
        assert_eq!(export_suite(&jest)[0].file_name, "Button_Unit_Tests.test.js");

        let pw = suite(Framework::Playwright, &[TestType::E2e]);
        assert_eq!(export_suite(&pw)[0].file_name, "Button_E2e_Tests.spec.js");
    }

    #[test]
    fn test_export_suite_returns_every_case() {
        let s = suite(Framework::Vitest, &[TestType::Unit, TestType::Integration]);
        let files = export_suite(&s);
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].file_name, "Button_Integration_Tests.test.js");
        assert_eq!(files[1].content, s.tests[1].code);
    }

    #[test]
    fn test_export_case() {
        let s = suite(Framework::Mocha, &[TestType::Unit]);
        let file = export_case(&s, &s.tests[0].id).unwrap();
        assert_eq!(file.file_name, "Button_Unit_Tests.spec.js");

        assert!(matches!(
            export_case(&s, "missing"),
            Err(ExportError::CaseNotFound { .. })
        ));
    }
}
