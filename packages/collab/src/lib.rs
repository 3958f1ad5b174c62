//! # Reportcraft Collab
//!
//! Review-workflow records layered over the document model: threaded
//! comments, tracked changes awaiting accept/reject, and restorable
//! version snapshots.
//!
//! All records are satellites: they reference component ids by value and
//! hold no pointers into the live document. Deleting a component does not
//! cascade into its comments or changes; a dangling `component_id` is
//! legal and simply filters to nothing.
//!
//! Every operation here is total: missing ids are no-ops and nothing
//! returns an error.

mod changes;
mod comments;
mod versions;

pub use changes::{ChangeDraft, ChangeKind, ChangeTracker, TrackedChange};
pub use comments::{Comment, CommentFilter, CommentLog, CommentReply};
pub use versions::{ChangeSummary, VersionEntry, VersionHistory};

/// Author identity stamped on locally created records.
pub const DEFAULT_AUTHOR: &str = "You";
