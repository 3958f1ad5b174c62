//! # Tracked Changes
//!
//! Revision-mode records: each document edit made while tracking is
//! enabled produces a [`TrackedChange`] awaiting review. Accepting or
//! rejecting flips the tri-state `accepted` flag; the document itself is
//! not touched (the edit already happened; review is bookkeeping).

use chrono::{DateTime, Utc};
use reportcraft_model::IdGenerator;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_AUTHOR;

/// What kind of edit a tracked change records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Addition,
    Deletion,
    Modification,
}

/// One pending edit awaiting accept/reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedChange {
    pub id: String,
    pub component_id: String,
    pub kind: ChangeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub author: String,

    /// `None` = pending, `Some(true)` = accepted, `Some(false)` = rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,
}

impl TrackedChange {
    pub fn is_pending(&self) -> bool {
        self.accepted.is_none()
    }
}

/// Payload for recording a change; the tracker fills in id, author and
/// timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeDraft {
    pub component_id: String,
    pub kind: ChangeKind,
    pub field: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl ChangeDraft {
    pub fn new(component_id: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            component_id: component_id.into(),
            kind,
            field: None,
            old_value: None,
            new_value: None,
        }
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn values(mut self, old: Option<String>, new: Option<String>) -> Self {
        self.old_value = old;
        self.new_value = new;
        self
    }
}

/// Guarded append-only log of tracked changes.
#[derive(Debug, Clone)]
pub struct ChangeTracker {
    changes: Vec<TrackedChange>,
    enabled: bool,
    ids: IdGenerator,
    author: String,
}

impl ChangeTracker {
    /// Tracker with tracking disabled (revision mode off).
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
            enabled: false,
            ids: IdGenerator::new("change"),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Record a change, or silently drop it when tracking is disabled.
    pub fn track(&mut self, draft: ChangeDraft) -> Option<&TrackedChange> {
        if !self.enabled {
            return None;
        }

        self.changes.push(TrackedChange {
            id: self.ids.new_id(),
            component_id: draft.component_id,
            kind: draft.kind,
            field: draft.field,
            old_value: draft.old_value,
            new_value: draft.new_value,
            timestamp: Utc::now(),
            author: self.author.clone(),
            accepted: None,
        });
        self.changes.last()
    }

    pub fn accept(&mut self, id: &str) -> bool {
        self.set_accepted(id, true)
    }

    pub fn reject(&mut self, id: &str) -> bool {
        self.set_accepted(id, false)
    }

    fn set_accepted(&mut self, id: &str, accepted: bool) -> bool {
        match self.changes.iter_mut().find(|c| c.id == id) {
            Some(change) => {
                change.accepted = Some(accepted);
                true
            }
            None => false,
        }
    }

    /// Accept every pending change; already-reviewed entries are left
    /// untouched. Returns how many were transitioned.
    pub fn accept_all(&mut self) -> usize {
        self.resolve_all(true)
    }

    /// Reject every pending change; already-reviewed entries are left
    /// untouched. Returns how many were transitioned.
    pub fn reject_all(&mut self) -> usize {
        self.resolve_all(false)
    }

    fn resolve_all(&mut self, accepted: bool) -> usize {
        let mut count = 0;
        for change in self.changes.iter_mut().filter(|c| c.is_pending()) {
            change.accepted = Some(accepted);
            count += 1;
        }
        count
    }

    pub fn changes(&self) -> &[TrackedChange] {
        &self.changes
    }

    pub fn pending_count(&self) -> usize {
        self.changes.iter().filter(|c| c.is_pending()).count()
    }
}

impl Default for ChangeTracker {
    fn default() -> Self {
        Self::new()
    }
}
