//! # Post-Mutation Effects
//!
//! Mutations stay pure; their user-facing side effects come back to the
//! caller as data. The UI layer interprets the effect list after each
//! mutation: update the selection highlight, show a toast, re-render.
//!
//! Effects are:
//! - **Deterministic**: the same mutation outcome produces the same effects
//! - **Ordered**: applied in the order returned
//! - **Inert**: dropping them loses notifications, never document state

use serde::{Deserialize, Serialize};

/// Notification severity, mapped to toast styling by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A side effect requested by the editing core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum Effect {
    /// The selected component changed (None clears the selection).
    SelectionChanged { component_id: Option<String> },

    /// The document changed and consumers should re-read it.
    DocumentChanged,

    /// Show a non-blocking notification.
    Notify { severity: Severity, message: String },
}

impl Effect {
    pub fn notify(severity: Severity, message: impl Into<String>) -> Self {
        Effect::Notify {
            severity,
            message: message.into(),
        }
    }

    pub fn select(component_id: impl Into<String>) -> Self {
        Effect::SelectionChanged {
            component_id: Some(component_id.into()),
        }
    }

    pub fn clear_selection() -> Self {
        Effect::SelectionChanged { component_id: None }
    }
}
