//! Manifest persistence
//!
//! The manifest is a JSON object with a top-level `version` string. Only that
//! field is touched; every other field is written back as read, in the same
//! key order.

use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {path} is not a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("Failed to serialize manifest {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write manifest {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Reads and rewrites the manifest at a fixed path
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: PathBuf,
    pretty: bool,
}

impl ManifestStore {
    pub fn new(path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            path: path.into(),
            pretty,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Blocking read of the current `version` field.
    ///
    /// A missing or non-string field yields `None`; an unreadable or
    /// unparsable file is an error.
    pub fn read_version_blocking(&self) -> ManifestResult<Option<String>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| ManifestError::Read {
            path: self.path.clone(),
            source,
        })?;
        let document = self.parse(&contents)?;
        Ok(version_field(&document))
    }

    /// Read and parse the full manifest
    pub async fn read(&self) -> ManifestResult<Value> {
        let contents =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| ManifestError::Read {
                    path: self.path.clone(),
                    source,
                })?;
        self.parse(&contents)
    }

    /// Serialize and write the full manifest back to its path
    pub async fn write(&self, document: &Value) -> ManifestResult<()> {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        }
        .map_err(|source| ManifestError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        tokio::fs::write(&self.path, serialized)
            .await
            .map_err(|source| ManifestError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Replace the manifest's `version` with `version`.
    ///
    /// Read and parse failures are returned to the caller. Write failures are
    /// logged and swallowed: the build keeps going with the version it has
    /// already stamped into the markup.
    pub async fn persist_version(&self, version: &str) -> ManifestResult<()> {
        let mut document = self.read().await?;
        self.set_version(&mut document, version)?;

        let outcome = self.write(&document).await;
        self.settle_write(version, outcome)
    }

    /// Outcome policy for the write half of `persist_version`: a failed
    /// write is logged and never reaches the caller.
    fn settle_write(&self, version: &str, outcome: ManifestResult<()>) -> ManifestResult<()> {
        match outcome {
            Ok(()) => {
                log::info!("Wrote version {} to {}", version, self.path.display());
            }
            Err(e) => {
                log::error!("{}", e);
            }
        }
        Ok(())
    }

    fn set_version(&self, document: &mut Value, version: &str) -> ManifestResult<()> {
        let object = document
            .as_object_mut()
            .ok_or_else(|| ManifestError::NotAnObject {
                path: self.path.clone(),
            })?;
        object.insert("version".to_string(), Value::String(version.to_string()));
        Ok(())
    }

    fn parse(&self, contents: &str) -> ManifestResult<Value> {
        serde_json::from_str(contents).map_err(|source| ManifestError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

fn version_field(document: &Value) -> Option<String> {
    document
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string)
}
