use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ExportError, ExportFile, ExportSink};
use crate::config::ExportConfig;

/// Writes exported files into a directory.
///
/// The directory is created on first write. Existing files with the same
/// name are overwritten.
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn with_config(config: &ExportConfig) -> Self {
        Self::new(config.output_path())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Ensures the output directory exists.
    fn ensure_dir(&self) -> Result<(), ExportError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| ExportError::io(&self.dir, e))?;
        }
        Ok(())
    }
}

impl ExportSink for FileExporter {
    fn save(&self, file: &ExportFile) -> Result<PathBuf, ExportError> {
        // Names must stay inside the output directory.
        let name = Path::new(&file.file_name);
        if file.file_name.is_empty() || name.components().count() != 1 || name.is_absolute() {
            return Err(ExportError::InvalidFileName(file.file_name.clone()));
        }

        self.ensure_dir()?;

        let path = self.dir.join(name);
        fs::write(&path, &file.content).map_err(|e| ExportError::io(&path, e))?;
        debug!(path = %path.display(), bytes = file.content.len(), "wrote export");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file(name: &str, content: &str) -> ExportFile {
        ExportFile {
            file_name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_save_creates_directory() {
        let temp = TempDir::new().unwrap();
        let exporter = FileExporter::new(temp.path().join("nested").join("out"));

        let path = exporter.save(&file("a.test.js", "content")).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "content");
    }

    #[test]
    fn test_save_all() {
        let temp = TempDir::new().unwrap();
        let exporter = FileExporter::new(temp.path());

        let paths = exporter
            .save_all(&[file("a.spec.js", "a"), file("b.spec.js", "b")])
            .unwrap();
        assert_eq!(paths.len(), 2);
        assert!(temp.path().join("b.spec.js").exists());
    }

    #[test]
    fn test_rejects_escaping_names() {
        let temp = TempDir::new().unwrap();
        let exporter = FileExporter::new(temp.path());

        assert!(matches!(
            exporter.save(&file("../evil.js", "x")),
            Err(ExportError::InvalidFileName(_))
        ));
        assert!(exporter.save(&file("", "x")).is_err());
    }
}
