//! # Version History
//!
//! Named, restorable snapshots. Each entry stores a full deep copy of the
//! document plus a summary of what changed since the prior entry. Entries
//! are kept most-recent-first; index 0 is "current".
//!
//! Restoring returns a clone of the stored document. Installing it is the
//! caller's job and must go through the edit session's `load`, which
//! resets undo history. A restored state has no undo lineage of its own.

use chrono::{DateTime, Utc};
use reportcraft_model::{IdGenerator, ReportDocument};
use serde::{Deserialize, Serialize};

use crate::changes::ChangeKind;
use crate::DEFAULT_AUTHOR;

/// One line of a version's change summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub kind: ChangeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

impl ChangeSummary {
    pub fn new(kind: ChangeKind) -> Self {
        Self {
            kind,
            component_id: None,
            field: None,
            old_value: None,
            new_value: None,
        }
    }

    pub fn component(mut self, id: impl Into<String>) -> Self {
        self.component_id = Some(id.into());
        self
    }
}

/// A restorable point-in-time copy of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub description: String,

    /// Full deep copy of the document at save time.
    pub template: ReportDocument,

    /// What changed since the prior entry.
    pub changes: Vec<ChangeSummary>,
}

/// Most-recent-first list of saved versions.
#[derive(Debug, Clone)]
pub struct VersionHistory {
    entries: Vec<VersionEntry>,
    ids: IdGenerator,
    author: String,
}

impl VersionHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            ids: IdGenerator::new("version"),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }

    /// Capture a full copy of `doc` and prepend it as the newest entry.
    pub fn save_version(
        &mut self,
        description: impl Into<String>,
        doc: &ReportDocument,
        changes: Vec<ChangeSummary>,
    ) -> &VersionEntry {
        let entry = VersionEntry {
            id: self.ids.new_id(),
            timestamp: Utc::now(),
            author: self.author.clone(),
            description: description.into(),
            template: doc.clone(),
            changes,
        };
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    /// Clone of the document stored under `id`, if any.
    pub fn restore(&self, id: &str) -> Option<ReportDocument> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.template.clone())
    }

    /// Newest entry (the one shown without restore/preview actions).
    pub fn current(&self) -> Option<&VersionEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }
}

impl Default for VersionHistory {
    fn default() -> Self {
        Self::new()
    }
}
