//! # Template Persistence
//!
//! Opaque key-value persistence for report documents, keyed by document
//! id. The filesystem implementation writes one pretty-printed JSON file
//! per document; anything else (database, remote store) can stand in
//! behind the same trait.

use std::fs;
use std::path::{Path, PathBuf};

use reportcraft_model::ReportDocument;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("A save is already in flight")]
    SaveInFlight,
}

/// Persistence backend for whole documents.
pub trait TemplateStore {
    fn save_template(&mut self, doc: &ReportDocument) -> Result<(), PersistError>;
    fn load_templates(&self) -> Result<Vec<ReportDocument>, PersistError>;
    fn delete_template(&mut self, id: &str) -> Result<(), PersistError>;
}

/// Filesystem-backed store: `<root>/<document-id>.json` per document.
pub struct FsTemplateStore {
    root: PathBuf,
}

impl FsTemplateStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, PersistError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

impl TemplateStore for FsTemplateStore {
    fn save_template(&mut self, doc: &ReportDocument) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(doc)?;
        let path = self.path_for(&doc.id);
        fs::write(&path, json)?;
        debug!(id = %doc.id, path = %path.display(), "saved template");
        Ok(())
    }

    fn load_templates(&self) -> Result<Vec<ReportDocument>, PersistError> {
        let mut templates = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let json = fs::read_to_string(&path)?;
            match serde_json::from_str(&json) {
                Ok(doc) => templates.push(doc),
                // A corrupt file should not hide the healthy ones.
                Err(err) => warn!(path = %path.display(), %err, "skipping unreadable template"),
            }
        }
        Ok(templates)
    }

    fn delete_template(&mut self, id: &str) -> Result<(), PersistError> {
        let path = self.path_for(id);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(%id, "deleted template");
                Ok(())
            }
            // Deleting a template that is not there is a no-op.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
