//! # Reportcraft Workspace
//!
//! Everything around the editing core that touches the outside world:
//! template persistence, debounced auto-save, and the assistant (AI chat)
//! boundary.
//!
//! The editing core itself is synchronous and in-memory; this crate is
//! where failures can actually happen, and the policy is uniform: log,
//! keep local state consistent, surface a notification, and never crash
//! the editing session.

mod assistant;
mod autosave;
mod persistence;

pub use assistant::{AssistantClient, AssistantError, ChatEvent, ChatMessage, ChatRole, Conversation};
pub use autosave::{AutoSaver, DEFAULT_INTERVAL};
pub use persistence::{FsTemplateStore, PersistError, TemplateStore};
