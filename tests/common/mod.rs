//! Common test utilities and helpers

use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary project directory with a manifest
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn with_manifest(contents: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        std::fs::write(dir.path().join("package.json"), contents).expect("write manifest");
        Self { dir }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("package.json")
    }

    pub fn manifest(&self) -> serde_json::Value {
        let contents = std::fs::read_to_string(self.manifest_path()).expect("read manifest");
        serde_json::from_str(&contents).expect("manifest is JSON")
    }

    pub fn write_html(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write html");
        path
    }
}
