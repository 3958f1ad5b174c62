//! # Reportcraft Editor
//!
//! Document editing engine for report authoring.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ model: typed components + document           │
//! └──────────────────────────────────────────────┘
//!                     ↓
//! ┌──────────────────────────────────────────────┐
//! │ editor: mutations + history + session        │
//! │  - Apply structural mutations                │
//! │  - Linear undo/redo over snapshots           │
//! │  - Post-mutation effect list                 │
//! │  - Find & replace across text content        │
//! └──────────────────────────────────────────────┘
//!                     ↓
//! ┌──────────────────────────────────────────────┐
//! │ collab: comments / tracked changes / versions│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **One document, one owner**: the live document *is* the history
//!    engine's present value. Every mutation is "compute next document,
//!    commit through history", so there is no second copy to drift.
//! 2. **Mutations are forgiving**: operations naming a missing id are
//!    recorded no-ops, never errors. A stale id from a racing UI event
//!    must not crash the editing session.
//! 3. **Side effects are data**: mutations return an [`Effect`] list
//!    (selection changes, notifications) instead of calling into the UI.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reportcraft_editor::EditSession;
//! use reportcraft_model::{ComponentKind, ReportDocument};
//!
//! let mut session = EditSession::new(ReportDocument::new("report-1".into()));
//! let id = session.add_component(ComponentKind::Heading);
//! session.undo();
//! session.redo();
//! ```

mod effects;
mod history;
mod mutations;
mod search;
mod session;

pub use effects::{Effect, Severity};
pub use history::History;
pub use mutations::{
    ComponentPatch, MetadataPatch, Mutation, MutationError, MutationOutcome, StylesPatch,
};
pub use search::{SearchMatch, SearchQuery};
pub use session::EditSession;
