//! Document store behind the script repository.
//!
//! The repository persists its whole collection as one raw text document;
//! where that document lives is this trait's problem.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Whole-document persistence. The repository reads the document once at
/// load and rewrites it in full on every mutation; there is no incremental
/// append.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn read(&self) -> Result<String>;
    async fn write(&self, document: &str) -> Result<()>;
}

/// File-backed store. A missing file reads as an empty document so a fresh
/// installation can be seeded.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn read(&self) -> Result<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(Error::store(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn write(&self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::store(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        tokio::fs::write(&self.path, document).await.map_err(|e| {
            Error::store(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}

/// In-memory store for tests and previews.
#[derive(Default)]
pub struct MemoryStore {
    document: Mutex<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        MemoryStore {
            document: Mutex::new(document.into()),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn read(&self) -> Result<String> {
        Ok(self.document.lock().expect("store lock poisoned").clone())
    }

    async fn write(&self, document: &str) -> Result<()> {
        *self.document.lock().expect("store lock poisoned") = document.to_string();
        Ok(())
    }
}
