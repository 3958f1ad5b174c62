//! # Edit Session
//!
//! One user's live editing state: the document (owned by the history
//! engine), the current selection, the id generator, and the tracked-
//! change hookup for revision mode.
//!
//! Every document-affecting action goes through [`EditSession::apply`]:
//! clone the present document, run the mutation, commit the result
//! through [`History::set`]. Undo and redo therefore always agree with
//! what the caller sees; there is no second document copy to fall out
//! of sync.

use reportcraft_collab::{ChangeDraft, ChangeKind, ChangeTracker};
use reportcraft_model::{ComponentKind, IdGenerator, ReportDocument};

use crate::effects::{Effect, Severity};
use crate::history::History;
use crate::mutations::{
    ComponentPatch, MetadataPatch, Mutation, MutationOutcome, StylesPatch,
};

pub struct EditSession {
    history: History<ReportDocument>,
    ids: IdGenerator,
    selected: Option<String>,
    tracker: ChangeTracker,
}

impl EditSession {
    /// Start a session over `document` with the default undo depth.
    pub fn new(document: ReportDocument) -> Self {
        let ids = IdGenerator::for_document(&document);
        Self {
            history: History::new(document),
            ids,
            selected: None,
            tracker: ChangeTracker::new(),
        }
    }

    pub fn with_max_history(document: ReportDocument, max_depth: usize) -> Self {
        let ids = IdGenerator::for_document(&document);
        Self {
            history: History::with_max_depth(document, max_depth),
            ids,
            selected: None,
            tracker: ChangeTracker::new(),
        }
    }

    /// The live document.
    pub fn document(&self) -> &ReportDocument {
        self.history.present()
    }

    pub fn selected_component(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a component by id; selecting a missing id clears instead.
    pub fn select(&mut self, id: Option<String>) {
        self.selected = id.filter(|id| self.history.present().find_component(id).is_some());
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ChangeTracker {
        &mut self.tracker
    }

    pub fn set_tracking(&mut self, enabled: bool) {
        self.tracker.set_enabled(enabled);
    }

    /// Apply a mutation: compute the next document, commit it through the
    /// history engine, update selection, and report effects.
    ///
    /// Malformed mutations surface as an error notification effect; the
    /// editing session never propagates them as failures.
    pub fn apply(&mut self, mutation: Mutation) -> (MutationOutcome, Vec<Effect>) {
        let drafts = self.drafts_for(&mutation);

        let mut next = self.history.present().clone();
        let outcome = match mutation.apply(&mut next) {
            Ok(outcome) => outcome,
            Err(err) => {
                let effects = vec![Effect::notify(Severity::Error, err.to_string())];
                return (MutationOutcome::default(), effects);
            }
        };

        if !outcome.applied {
            return (outcome, Vec::new());
        }

        let changed = self.history.set(next);
        let mut effects = Vec::new();

        if changed {
            effects.push(Effect::DocumentChanged);
            for draft in drafts {
                self.tracker.track(draft);
            }
        }

        if let Some(created) = &outcome.created_id {
            self.selected = Some(created.clone());
            effects.push(Effect::select(created.clone()));
        } else if outcome.deleted_id.is_some() && outcome.deleted_id == self.selected {
            self.selected = None;
            effects.push(Effect::clear_selection());
        }

        (outcome, effects)
    }

    /// Append a new component of `kind` and select it. Returns its id.
    pub fn add_component(&mut self, kind: ComponentKind) -> String {
        let id = self.ids.new_id();
        self.apply(Mutation::AddComponent {
            kind,
            id: id.clone(),
        });
        id
    }

    pub fn update_component(&mut self, id: &str, patch: ComponentPatch) -> Vec<Effect> {
        self.apply(Mutation::UpdateComponent {
            id: id.to_string(),
            patch,
        })
        .1
    }

    pub fn delete_component(&mut self, id: &str) -> Vec<Effect> {
        self.apply(Mutation::DeleteComponent { id: id.to_string() }).1
    }

    /// Duplicate `id` at the end of the sequence; returns the copy's id,
    /// or None when `id` is absent.
    pub fn duplicate_component(&mut self, id: &str) -> Option<String> {
        let new_id = self.ids.new_id();
        let (outcome, _) = self.apply(Mutation::DuplicateComponent {
            id: id.to_string(),
            new_id,
        });
        outcome.created_id
    }

    pub fn reorder(&mut self, active_id: &str, over_id: &str) -> Vec<Effect> {
        self.apply(Mutation::Reorder {
            active_id: active_id.to_string(),
            over_id: over_id.to_string(),
        })
        .1
    }

    pub fn update_metadata(&mut self, patch: MetadataPatch) -> Vec<Effect> {
        self.apply(Mutation::UpdateMetadata { patch }).1
    }

    pub fn update_styles(&mut self, patch: StylesPatch) -> Vec<Effect> {
        self.apply(Mutation::UpdateStyles { patch }).1
    }

    /// Step the document back once. Selection is pruned if its component
    /// no longer exists in the restored state.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            self.prune_selection();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            self.prune_selection();
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the document wholesale, discarding undo history.
    ///
    /// This is the only sanctioned way to install a loaded template or a
    /// restored version: the installed state has no undo lineage.
    pub fn load(&mut self, document: ReportDocument) {
        self.ids = IdGenerator::for_document(&document);
        self.history.reset(document);
        self.selected = None;
    }

    fn prune_selection(&mut self) {
        if let Some(id) = &self.selected {
            if self.history.present().find_component(id).is_none() {
                self.selected = None;
            }
        }
    }

    /// Tracked-change drafts describing `mutation`, captured against the
    /// pre-mutation document. Document-level edits (metadata, styles) are
    /// not tracked; revision mode reviews component content only.
    fn drafts_for(&self, mutation: &Mutation) -> Vec<ChangeDraft> {
        if !self.tracker.is_enabled() {
            return Vec::new();
        }

        let doc = self.history.present();
        match mutation {
            Mutation::AddComponent { kind, id } => {
                vec![ChangeDraft::new(id.clone(), ChangeKind::Addition)
                    .values(None, Some(kind.as_str().to_string()))]
            }

            Mutation::DeleteComponent { id } => {
                let Some(component) = doc.find_component(id) else {
                    return Vec::new();
                };
                let old = component
                    .content
                    .clone()
                    .unwrap_or_else(|| component.kind.as_str().to_string());
                vec![ChangeDraft::new(id.clone(), ChangeKind::Deletion).values(Some(old), None)]
            }

            Mutation::DuplicateComponent { id, new_id } => {
                let Some(component) = doc.find_component(id) else {
                    return Vec::new();
                };
                vec![ChangeDraft::new(new_id.clone(), ChangeKind::Addition)
                    .values(None, Some(component.kind.as_str().to_string()))]
            }

            Mutation::UpdateComponent { id, patch } => {
                let Some(component) = doc.find_component(id) else {
                    return Vec::new();
                };

                let mut drafts = Vec::new();
                if let Some(content) = &patch.content {
                    drafts.push(
                        ChangeDraft::new(id.clone(), ChangeKind::Modification)
                            .field("content")
                            .values(component.content.clone(), Some(content.clone())),
                    );
                }
                if let Some(config) = &patch.config {
                    drafts.push(
                        ChangeDraft::new(id.clone(), ChangeKind::Modification)
                            .field("config")
                            .values(
                                serde_json::to_string(&component.config).ok(),
                                serde_json::to_string(config).ok(),
                            ),
                    );
                }
                if patch.children.is_some() {
                    drafts.push(
                        ChangeDraft::new(id.clone(), ChangeKind::Modification).field("children"),
                    );
                }
                drafts
            }

            Mutation::Reorder { active_id, over_id } => {
                let (Some(from), Some(to)) =
                    (doc.component_index(active_id), doc.component_index(over_id))
                else {
                    return Vec::new();
                };
                vec![ChangeDraft::new(active_id.clone(), ChangeKind::Modification)
                    .field("order")
                    .values(Some(from.to_string()), Some(to.to_string()))]
            }

            Mutation::UpdateMetadata { .. } | Mutation::UpdateStyles { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_delete_returns_to_empty() {
        let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));

        let id = session.add_component(ComponentKind::Heading);
        assert_eq!(session.document().components.len(), 1);
        assert_eq!(session.document().components[0].kind, ComponentKind::Heading);
        assert_eq!(
            session.document().components[0].content.as_deref(),
            Some("New Heading")
        );
        assert_eq!(session.selected_component(), Some(id.as_str()));

        session.delete_component(&id);
        assert!(session.document().components.is_empty());
        assert_eq!(session.selected_component(), None);
    }

    #[test]
    fn test_ids_stay_unique_across_add_and_duplicate() {
        let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));

        for _ in 0..3 {
            session.add_component(ComponentKind::Text);
        }
        let first = session.document().components[0].id.clone();
        session.duplicate_component(&first);
        session.duplicate_component(&first);

        let mut ids: Vec<_> = session
            .document()
            .components
            .iter()
            .map(|c| c.id.clone())
            .collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_duplicate_kpi_shares_config_not_id() {
        let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));
        let original = session.add_component(ComponentKind::Kpi);

        let copy = session.duplicate_component(&original).unwrap();
        assert_ne!(copy, original);

        let doc = session.document();
        let a = doc.find_component(&original).unwrap();
        let b = doc.find_component(&copy).unwrap();
        assert_eq!(a.config, b.config);
        assert_eq!(a.content, b.content);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));

        session.add_component(ComponentKind::Heading);
        session.add_component(ComponentKind::Text);
        let with_two = session.document().clone();

        assert!(session.undo());
        assert_eq!(session.document().components.len(), 1);
        assert!(session.undo());
        assert!(session.document().components.is_empty());
        assert!(!session.undo());

        assert!(session.redo());
        assert!(session.redo());
        assert_eq!(*session.document(), with_two);
        assert!(!session.redo());
    }

    #[test]
    fn test_undo_prunes_dangling_selection() {
        let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));
        let id = session.add_component(ComponentKind::Text);
        assert_eq!(session.selected_component(), Some(id.as_str()));

        session.undo();
        assert_eq!(session.selected_component(), None);
    }

    #[test]
    fn test_noop_mutation_commits_nothing() {
        let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));
        session.add_component(ComponentKind::Text);
        let depth_before = session.can_undo();

        let effects = session.delete_component("component-99");
        assert!(effects.is_empty());
        assert_eq!(session.can_undo(), depth_before);
        assert_eq!(session.document().components.len(), 1);
    }

    #[test]
    fn test_malformed_mutation_becomes_notification() {
        let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));
        let id = session.add_component(ComponentKind::Text);

        let (outcome, effects) = session.apply(Mutation::AddComponent {
            kind: ComponentKind::Chart,
            id,
        });

        assert!(!outcome.applied);
        assert!(matches!(
            effects.as_slice(),
            [Effect::Notify {
                severity: Severity::Error,
                ..
            }]
        ));
    }

    #[test]
    fn test_tracked_changes_recorded_only_when_enabled() {
        let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));

        let id = session.add_component(ComponentKind::Text);
        assert!(session.tracker().changes().is_empty());

        session.set_tracking(true);
        session.update_component(&id, ComponentPatch::content("revised"));

        let changes = session.tracker().changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::Modification);
        assert_eq!(changes[0].field.as_deref(), Some("content"));
        assert_eq!(
            changes[0].old_value.as_deref(),
            Some("Enter your text here...")
        );
        assert_eq!(changes[0].new_value.as_deref(), Some("revised"));
    }

    #[test]
    fn test_load_resets_history_and_selection() {
        let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));
        session.add_component(ComponentKind::Heading);

        session.load(ReportDocument::new("report-2".to_string()));
        assert_eq!(session.document().id, "report-2");
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(session.selected_component(), None);
    }
}
