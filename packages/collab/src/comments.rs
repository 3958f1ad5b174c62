//! # Comments
//!
//! Threaded, resolvable comments keyed by component id. Replies nest one
//! level deep only; a reply cannot itself be replied to.

use chrono::{DateTime, Utc};
use reportcraft_model::IdGenerator;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_AUTHOR;

/// A reply inside a comment thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReply {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A top-level comment attached to a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub component_id: String,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
    pub replies: Vec<CommentReply>,
}

/// Display filter for the comment panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentFilter {
    /// `None` means "all components" (nothing selected).
    pub component_id: Option<String>,
    /// Whether resolved threads stay visible.
    pub show_resolved: bool,
}

/// The document's comment list.
#[derive(Debug, Clone)]
pub struct CommentLog {
    comments: Vec<Comment>,
    ids: IdGenerator,
    author: String,
}

impl CommentLog {
    pub fn new() -> Self {
        Self {
            comments: Vec::new(),
            ids: IdGenerator::new("comment"),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }

    /// Append a fresh unresolved comment on `component_id`.
    pub fn add(&mut self, component_id: impl Into<String>, content: impl Into<String>) -> &Comment {
        self.comments.push(Comment {
            id: self.ids.new_id(),
            component_id: component_id.into(),
            author: self.author.clone(),
            content: content.into(),
            timestamp: Utc::now(),
            resolved: false,
            replies: Vec::new(),
        });
        self.comments.last().expect("just pushed")
    }

    pub fn resolve(&mut self, id: &str) -> bool {
        match self.comments.iter_mut().find(|c| c.id == id) {
            Some(comment) => {
                comment.resolved = true;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| c.id != id);
        self.comments.len() < before
    }

    /// Append a reply to the comment matching `id`; no-op when the parent
    /// is missing.
    pub fn reply(&mut self, id: &str, content: impl Into<String>) -> Option<&CommentReply> {
        let reply_id = self.ids.new_id();
        let author = self.author.clone();

        let comment = self.comments.iter_mut().find(|c| c.id == id)?;
        comment.replies.push(CommentReply {
            id: reply_id,
            author,
            content: content.into(),
            timestamp: Utc::now(),
        });
        comment.replies.last()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Comments visible under `filter`, in insertion order.
    pub fn filtered(&self, filter: &CommentFilter) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| {
                if let Some(component_id) = &filter.component_id {
                    if &c.component_id != component_id {
                        return false;
                    }
                }
                filter.show_resolved || !c.resolved
            })
            .collect()
    }
}

impl Default for CommentLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_comment_defaults() {
        let mut log = CommentLog::new();
        let comment = log.add("component-1", "Check this figure");

        assert_eq!(comment.component_id, "component-1");
        assert_eq!(comment.author, DEFAULT_AUTHOR);
        assert!(!comment.resolved);
        assert!(comment.replies.is_empty());
    }

    #[test]
    fn test_resolve_and_delete() {
        let mut log = CommentLog::new();
        let id = log.add("component-1", "first").id.clone();

        assert!(log.resolve(&id));
        assert!(log.comments()[0].resolved);

        assert!(log.delete(&id));
        assert!(log.comments().is_empty());

        assert!(!log.resolve(&id));
        assert!(!log.delete(&id));
    }

    #[test]
    fn test_reply_nests_one_level() {
        let mut log = CommentLog::new();
        let id = log.add("component-1", "parent").id.clone();

        let reply = log.reply(&id, "agreed").unwrap();
        assert_eq!(reply.author, DEFAULT_AUTHOR);

        assert_eq!(log.comments()[0].replies.len(), 1);
        assert!(log.reply("comment-99", "orphan").is_none());
    }

    #[test]
    fn test_filter_by_component_and_resolved() {
        let mut log = CommentLog::new();
        let a = log.add("component-1", "a").id.clone();
        log.add("component-1", "b");
        log.add("component-2", "c");
        log.resolve(&a);

        let all_unresolved = log.filtered(&CommentFilter::default());
        assert_eq!(all_unresolved.len(), 2);

        let one_component = log.filtered(&CommentFilter {
            component_id: Some("component-1".to_string()),
            show_resolved: true,
        });
        assert_eq!(one_component.len(), 2);

        let one_component_unresolved = log.filtered(&CommentFilter {
            component_id: Some("component-1".to_string()),
            show_resolved: false,
        });
        assert_eq!(one_component_unresolved.len(), 1);
        assert_eq!(one_component_unresolved[0].content, "b");
    }
}
