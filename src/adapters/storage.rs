use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Writes reports under a base directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ReportSink for LocalStorage {
    async fn write_report(&self, filename: &str, contents: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(filename);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, contents)?;
        Ok(full_path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_report_creates_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        let path = storage
            .write_report("triage_report.md", "# Report\n")
            .await
            .unwrap();

        assert!(path.ends_with("triage_report.md"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Report\n");
    }

    #[tokio::test]
    async fn test_write_report_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = LocalStorage::new(nested.to_str().unwrap().to_string());

        let path = storage.write_report("report.md", "contents").await.unwrap();
        assert!(std::path::Path::new(&path).exists());
    }
}
