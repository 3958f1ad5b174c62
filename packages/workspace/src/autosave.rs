//! # Auto-Save
//!
//! Debounced persistence of the live document.
//!
//! ## Design
//!
//! - The saver keeps a copy of the last-persisted document. A change
//!   that differs from it marks the document dirty and (re)arms the
//!   debounce deadline; a change that matches it disarms the timer.
//! - [`AutoSaver::poll`] is called from the host's event loop; it fires
//!   the save once the deadline has passed. A failed save is logged and
//!   leaves the dirty flag set, so the next change or explicit save
//!   retries.
//! - [`AutoSaver::save_now`] bypasses the timer and surfaces failure to
//!   the caller.
//! - At most one persist call runs at a time: the `saving` guard makes
//!   `poll` and `save_now` reentrancy-safe, and the armed deadline
//!   survives a refused attempt.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use reportcraft_model::ReportDocument;
use tracing::{debug, warn};

use crate::persistence::{PersistError, TemplateStore};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

pub struct AutoSaver {
    last_persisted: Option<ReportDocument>,
    dirty: bool,
    deadline: Option<Instant>,
    interval: Duration,
    saving: bool,
    last_saved: Option<DateTime<Utc>>,
}

impl AutoSaver {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            last_persisted: None,
            dirty: false,
            deadline: None,
            interval,
            saving: false,
            last_saved: None,
        }
    }

    /// Note that the live document may have changed.
    ///
    /// Rearms the debounce deadline when `doc` differs from the last
    /// persisted copy; disarms it when the document has returned to the
    /// persisted state.
    pub fn note_change(&mut self, doc: &ReportDocument) {
        if self.last_persisted.as_ref() == Some(doc) {
            self.dirty = false;
            self.deadline = None;
            return;
        }
        self.dirty = true;
        self.deadline = Some(Instant::now() + self.interval);
    }

    /// Fire the debounced save if it is due. Returns whether a save
    /// completed successfully; failures are logged and retried on the
    /// next trigger.
    pub fn poll(&mut self, doc: &ReportDocument, store: &mut dyn TemplateStore) -> bool {
        if !self.dirty || self.saving {
            return false;
        }
        let Some(deadline) = self.deadline else {
            return false;
        };
        if Instant::now() < deadline {
            return false;
        }

        match self.persist(doc, store) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "auto-save failed; will retry");
                // Disarm until the next change; dirty stays set so an
                // explicit save still goes through.
                self.deadline = None;
                false
            }
        }
    }

    /// Save immediately, bypassing the timer. The caller decides how to
    /// surface the result.
    pub fn save_now(
        &mut self,
        doc: &ReportDocument,
        store: &mut dyn TemplateStore,
    ) -> Result<(), PersistError> {
        if self.saving {
            return Err(PersistError::SaveInFlight);
        }
        self.persist(doc, store)
    }

    fn persist(
        &mut self,
        doc: &ReportDocument,
        store: &mut dyn TemplateStore,
    ) -> Result<(), PersistError> {
        self.saving = true;
        let result = store.save_template(doc);
        self.saving = false;

        result?;
        self.last_persisted = Some(doc.clone());
        self.dirty = false;
        self.deadline = None;
        self.last_saved = Some(Utc::now());
        debug!(id = %doc.id, "document persisted");
        Ok(())
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }
}

impl Default for AutoSaver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory store with a failure switch.
    #[derive(Default)]
    struct MemStore {
        saved: HashMap<String, ReportDocument>,
        fail_next: bool,
        save_calls: usize,
    }

    impl TemplateStore for MemStore {
        fn save_template(&mut self, doc: &ReportDocument) -> Result<(), PersistError> {
            self.save_calls += 1;
            if self.fail_next {
                self.fail_next = false;
                return Err(PersistError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk full",
                )));
            }
            self.saved.insert(doc.id.clone(), doc.clone());
            Ok(())
        }

        fn load_templates(&self) -> Result<Vec<ReportDocument>, PersistError> {
            Ok(self.saved.values().cloned().collect())
        }

        fn delete_template(&mut self, id: &str) -> Result<(), PersistError> {
            self.saved.remove(id);
            Ok(())
        }
    }

    fn changed_doc(name: &str) -> ReportDocument {
        let mut doc = ReportDocument::new("report-1".to_string());
        doc.name = name.to_string();
        doc
    }

    #[test]
    fn test_clean_saver_does_not_fire() {
        let mut saver = AutoSaver::with_interval(Duration::ZERO);
        let mut store = MemStore::default();
        let doc = changed_doc("a");

        assert!(!saver.poll(&doc, &mut store));
        assert_eq!(store.save_calls, 0);
    }

    #[test]
    fn test_change_then_poll_persists() {
        let mut saver = AutoSaver::with_interval(Duration::ZERO);
        let mut store = MemStore::default();
        let doc = changed_doc("a");

        saver.note_change(&doc);
        assert!(saver.has_unsaved_changes());

        assert!(saver.poll(&doc, &mut store));
        assert!(!saver.has_unsaved_changes());
        assert!(saver.last_saved().is_some());
        assert_eq!(store.saved["report-1"].name, "a");

        // Nothing further to do until the next change.
        assert!(!saver.poll(&doc, &mut store));
        assert_eq!(store.save_calls, 1);
    }

    #[test]
    fn test_unchanged_document_disarms_timer() {
        let mut saver = AutoSaver::with_interval(Duration::ZERO);
        let mut store = MemStore::default();
        let doc = changed_doc("a");

        saver.note_change(&doc);
        saver.poll(&doc, &mut store);

        // An "edit" that lands back on the persisted state.
        saver.note_change(&doc);
        assert!(!saver.has_unsaved_changes());
        assert!(!saver.poll(&doc, &mut store));
        assert_eq!(store.save_calls, 1);
    }

    #[test]
    fn test_deadline_not_reached_yet() {
        let mut saver = AutoSaver::with_interval(Duration::from_secs(3600));
        let mut store = MemStore::default();
        let doc = changed_doc("a");

        saver.note_change(&doc);
        assert!(!saver.poll(&doc, &mut store));
        assert!(saver.has_unsaved_changes());
        assert_eq!(store.save_calls, 0);
    }

    #[test]
    fn test_failed_poll_keeps_dirty_and_retries_on_next_change() {
        let mut saver = AutoSaver::with_interval(Duration::ZERO);
        let mut store = MemStore::default();
        let doc = changed_doc("a");

        saver.note_change(&doc);
        store.fail_next = true;
        assert!(!saver.poll(&doc, &mut store));
        assert!(saver.has_unsaved_changes());
        assert!(saver.last_saved().is_none());

        // Timer disarmed until the next change; then it goes through.
        assert!(!saver.poll(&doc, &mut store));
        saver.note_change(&doc);
        assert!(saver.poll(&doc, &mut store));
        assert!(!saver.has_unsaved_changes());
    }

    #[test]
    fn test_save_now_bypasses_timer() {
        let mut saver = AutoSaver::with_interval(Duration::from_secs(3600));
        let mut store = MemStore::default();
        let doc = changed_doc("a");

        saver.note_change(&doc);
        saver.save_now(&doc, &mut store).unwrap();
        assert!(!saver.has_unsaved_changes());
        assert_eq!(store.save_calls, 1);

        // The armed deadline died with the successful save.
        assert!(!saver.poll(&doc, &mut store));
    }

    #[test]
    fn test_save_now_surfaces_failure() {
        let mut saver = AutoSaver::with_interval(Duration::ZERO);
        let mut store = MemStore::default();
        let doc = changed_doc("a");

        saver.note_change(&doc);
        store.fail_next = true;
        assert!(saver.save_now(&doc, &mut store).is_err());
        assert!(saver.has_unsaved_changes());
    }
}
