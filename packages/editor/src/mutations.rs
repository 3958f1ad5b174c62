//! # Structural Mutations
//!
//! High-level semantic operations on report documents.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation is a semantic operation, not a
//!    field write
//! 2. **Deterministic**: fresh ids are chosen by the caller and carried in
//!    the mutation, so applying the same mutation twice to the same
//!    document yields the same result
//! 3. **Forgiving**: a mutation naming a missing component id is a no-op,
//!    reported through [`MutationOutcome::applied`], never an error
//!
//! Errors are reserved for mutations that are malformed regardless of
//! document state: inserting a duplicate id, or patching a component with
//! a config record of the wrong kind.

use reportcraft_model::{
    ComponentConfig, ComponentKind, DocumentMetadata, Margins, Orientation, PageSize,
    PageStyles, ReportComponent, ReportDocument,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Partial update for a single component. Unset fields are left alone;
/// `config` replaces the whole record, so callers merge it themselves to
/// avoid clobbering unrelated keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ComponentConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ReportComponent>>,
}

impl ComponentPatch {
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn config(config: ComponentConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.config.is_none() && self.children.is_none()
    }
}

/// Partial update for document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Partial update for page styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<Margins>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_footer: Option<bool>,
}

/// Semantic mutations over a report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Append a new component of `kind` under the caller-chosen `id`.
    AddComponent { kind: ComponentKind, id: String },

    /// Shallow-merge a patch into the component matching `id`.
    UpdateComponent { id: String, patch: ComponentPatch },

    /// Remove the component matching `id`.
    DeleteComponent { id: String },

    /// Clone the component matching `id` under `new_id`, appended at the
    /// end of the sequence.
    DuplicateComponent { id: String, new_id: String },

    /// Move the component at `active_id`'s position to `over_id`'s
    /// position, shifting the others.
    Reorder { active_id: String, over_id: String },

    /// Shallow-merge into document metadata.
    UpdateMetadata { patch: MetadataPatch },

    /// Shallow-merge into page styles.
    UpdateStyles { patch: StylesPatch },
}

/// What applying a mutation did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationOutcome {
    /// False when the mutation was a no-op (missing id, empty patch,
    /// reorder onto itself).
    pub applied: bool,

    /// Id of a component created by add/duplicate.
    pub created_id: Option<String>,

    /// Id of a component removed by delete.
    pub deleted_id: Option<String>,
}

impl MutationOutcome {
    fn noop() -> Self {
        Self::default()
    }

    fn applied() -> Self {
        Self {
            applied: true,
            ..Self::default()
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Component id already in use: {0}")]
    DuplicateId(String),

    #[error("Config kind {got:?} does not match component {id} of kind {expected:?}")]
    ConfigKindMismatch {
        id: String,
        expected: ComponentKind,
        got: ComponentKind,
    },
}

impl Mutation {
    /// Apply this mutation to `doc` in place.
    ///
    /// Missing ids make the mutation a no-op; only malformed mutations
    /// (duplicate id, mismatched config record) return an error, and an
    /// erroring mutation leaves `doc` untouched.
    pub fn apply(&self, doc: &mut ReportDocument) -> Result<MutationOutcome, MutationError> {
        match self {
            Mutation::AddComponent { kind, id } => Self::apply_add(doc, *kind, id),
            Mutation::UpdateComponent { id, patch } => Self::apply_update(doc, id, patch),
            Mutation::DeleteComponent { id } => Ok(Self::apply_delete(doc, id)),
            Mutation::DuplicateComponent { id, new_id } => {
                Self::apply_duplicate(doc, id, new_id)
            }
            Mutation::Reorder { active_id, over_id } => {
                Ok(Self::apply_reorder(doc, active_id, over_id))
            }
            Mutation::UpdateMetadata { patch } => {
                Ok(Self::apply_metadata(&mut doc.metadata, patch))
            }
            Mutation::UpdateStyles { patch } => Ok(Self::apply_styles(&mut doc.styles, patch)),
        }
    }

    fn apply_add(
        doc: &mut ReportDocument,
        kind: ComponentKind,
        id: &str,
    ) -> Result<MutationOutcome, MutationError> {
        if doc.find_component(id).is_some() {
            return Err(MutationError::DuplicateId(id.to_string()));
        }

        doc.components
            .push(ReportComponent::new(kind, id.to_string()));

        Ok(MutationOutcome {
            applied: true,
            created_id: Some(id.to_string()),
            deleted_id: None,
        })
    }

    fn apply_update(
        doc: &mut ReportDocument,
        id: &str,
        patch: &ComponentPatch,
    ) -> Result<MutationOutcome, MutationError> {
        if patch.is_empty() {
            return Ok(MutationOutcome::noop());
        }

        // Validate before touching anything.
        if let Some(config) = &patch.config {
            if let Some(component) = doc.find_component(id) {
                if config.kind() != component.kind {
                    return Err(MutationError::ConfigKindMismatch {
                        id: id.to_string(),
                        expected: component.kind,
                        got: config.kind(),
                    });
                }
            }
        }

        let Some(component) = doc.find_component_mut(id) else {
            return Ok(MutationOutcome::noop());
        };

        if let Some(content) = &patch.content {
            component.content = Some(content.clone());
        }
        if let Some(config) = &patch.config {
            component.config = config.clone();
        }
        if let Some(children) = &patch.children {
            component.children = Some(children.clone());
        }

        Ok(MutationOutcome::applied())
    }

    fn apply_delete(doc: &mut ReportDocument, id: &str) -> MutationOutcome {
        let Some(index) = doc.component_index(id) else {
            return MutationOutcome::noop();
        };

        doc.components.remove(index);

        MutationOutcome {
            applied: true,
            created_id: None,
            deleted_id: Some(id.to_string()),
        }
    }

    fn apply_duplicate(
        doc: &mut ReportDocument,
        id: &str,
        new_id: &str,
    ) -> Result<MutationOutcome, MutationError> {
        if doc.find_component(new_id).is_some() {
            return Err(MutationError::DuplicateId(new_id.to_string()));
        }

        let Some(original) = doc.find_component(id) else {
            return Ok(MutationOutcome::noop());
        };

        let copy = original.duplicate_as(new_id.to_string());
        doc.components.push(copy);

        Ok(MutationOutcome {
            applied: true,
            created_id: Some(new_id.to_string()),
            deleted_id: None,
        })
    }

    fn apply_reorder(doc: &mut ReportDocument, active_id: &str, over_id: &str) -> MutationOutcome {
        if active_id == over_id {
            return MutationOutcome::noop();
        }

        let (Some(from), Some(to)) = (
            doc.component_index(active_id),
            doc.component_index(over_id),
        ) else {
            return MutationOutcome::noop();
        };

        let component = doc.components.remove(from);
        doc.components.insert(to, component);

        MutationOutcome::applied()
    }

    fn apply_metadata(metadata: &mut DocumentMetadata, patch: &MetadataPatch) -> MutationOutcome {
        let mut applied = false;
        if let Some(title) = &patch.title {
            metadata.title = title.clone();
            applied = true;
        }
        if let Some(author) = &patch.author {
            metadata.author = author.clone();
            applied = true;
        }
        if let Some(company) = &patch.company {
            metadata.company = company.clone();
            applied = true;
        }
        if let Some(date) = &patch.date {
            metadata.date = date.clone();
            applied = true;
        }

        if applied {
            MutationOutcome::applied()
        } else {
            MutationOutcome::noop()
        }
    }

    fn apply_styles(styles: &mut PageStyles, patch: &StylesPatch) -> MutationOutcome {
        let mut applied = false;
        if let Some(page_size) = patch.page_size {
            styles.page_size = page_size;
            applied = true;
        }
        if let Some(orientation) = patch.orientation {
            styles.orientation = orientation;
            applied = true;
        }
        if let Some(margins) = patch.margins {
            styles.margins = margins;
            applied = true;
        }
        if let Some(show_header) = patch.show_header {
            styles.show_header = show_header;
            applied = true;
        }
        if let Some(show_footer) = patch.show_footer {
            styles.show_footer = show_footer;
            applied = true;
        }

        if applied {
            MutationOutcome::applied()
        } else {
            MutationOutcome::noop()
        }
    }
}
