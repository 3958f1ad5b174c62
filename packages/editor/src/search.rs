//! # Find & Replace
//!
//! Literal substring search across every component with text content.
//! The needle is escaped before regex compilation (the documented
//! contract is substring match, never pattern semantics) and
//! replacements are inserted verbatim.
//!
//! Replace operations produce [`Mutation`]s rather than touching the
//! document, so they commit through the session like any other edit and
//! participate in undo/redo.

use regex::{NoExpand, Regex, RegexBuilder};
use reportcraft_model::ReportDocument;
use serde::{Deserialize, Serialize};

use crate::mutations::{ComponentPatch, Mutation};

/// One occurrence of the needle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub component_id: String,
    /// The owning component's full content at scan time.
    pub content: String,
    /// Byte offset of the occurrence within `content`.
    pub index: usize,
}

/// A find & replace request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub needle: String,
    pub case_sensitive: bool,
}

impl SearchQuery {
    pub fn new(needle: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            needle: needle.into(),
            case_sensitive,
        }
    }

    /// Compiled literal matcher; None for an empty needle.
    fn matcher(&self) -> Option<Regex> {
        if self.needle.is_empty() {
            return None;
        }
        RegexBuilder::new(&regex::escape(&self.needle))
            .case_insensitive(!self.case_sensitive)
            .build()
            .ok()
    }

    /// Every occurrence across the document, in component order then
    /// left-to-right. The scan resumes one byte past each match start,
    /// so overlapping occurrences are all reported.
    pub fn find_matches(&self, doc: &ReportDocument) -> Vec<SearchMatch> {
        let Some(re) = self.matcher() else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        for component in &doc.components {
            let Some(content) = &component.content else {
                continue;
            };

            let mut start = 0;
            while let Some(found) = re.find_at(content, start) {
                matches.push(SearchMatch {
                    component_id: component.id.clone(),
                    content: content.clone(),
                    index: found.start(),
                });
                start = found.start() + 1;
                if start > content.len() {
                    break;
                }
            }
        }
        matches
    }

    /// Replace the first occurrence within the matched component,
    /// yielding the mutation that commits it. None when the component is
    /// gone or no longer matches.
    pub fn replace_one(
        &self,
        doc: &ReportDocument,
        target: &SearchMatch,
        replacement: &str,
    ) -> Option<Mutation> {
        let re = self.matcher()?;
        let component = doc.find_component(&target.component_id)?;
        let content = component.content.as_deref()?;

        if !re.is_match(content) {
            return None;
        }

        let updated = re.replace(content, NoExpand(replacement)).into_owned();
        Some(Mutation::UpdateComponent {
            id: component.id.clone(),
            patch: ComponentPatch::content(updated),
        })
    }

    /// Replace every occurrence in every matching component, one
    /// mutation per affected component.
    pub fn replace_all(&self, doc: &ReportDocument, replacement: &str) -> Vec<Mutation> {
        let Some(re) = self.matcher() else {
            return Vec::new();
        };

        doc.components
            .iter()
            .filter_map(|component| {
                let content = component.content.as_deref()?;
                if !re.is_match(content) {
                    return None;
                }
                let updated = re.replace_all(content, NoExpand(replacement)).into_owned();
                Some(Mutation::UpdateComponent {
                    id: component.id.clone(),
                    patch: ComponentPatch::content(updated),
                })
            })
            .collect()
    }
}
