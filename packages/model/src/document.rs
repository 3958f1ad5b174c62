//! The aggregate root: an ordered component list plus document-level
//! metadata and page styles.

use crate::component::{ComponentKind, ReportComponent};
use serde::{Deserialize, Serialize};

/// User-editable document metadata, shown in rendered output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub company: String,
    pub date: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: "Financial Report".to_string(),
            author: String::new(),
            company: String::new(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Page dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    A4,
    Letter,
    Legal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Page margins in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 1.0,
            right: 1.0,
            bottom: 1.0,
            left: 1.0,
        }
    }
}

/// Page-level settings applied to the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageStyles {
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
    pub show_header: bool,
    pub show_footer: bool,
}

impl Default for PageStyles {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            margins: Margins::default(),
            show_header: true,
            show_footer: true,
        }
    }
}

/// Derived table-of-contents entry.
///
/// `page` is a synthetic estimate (three components per page) standing in
/// until real pagination exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocItem {
    pub component_id: String,
    pub title: String,
    pub level: u8,
    pub page: usize,
}

/// A report document: the unit of save/load/undo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Insertion order is document order.
    pub components: Vec<ReportComponent>,

    pub metadata: DocumentMetadata,
    pub styles: PageStyles,
}

impl ReportDocument {
    /// Create an empty document with default metadata and styles.
    pub fn new(id: String) -> Self {
        Self {
            id,
            name: "Untitled Report".to_string(),
            description: String::new(),
            components: Vec::new(),
            metadata: DocumentMetadata::default(),
            styles: PageStyles::default(),
        }
    }

    pub fn find_component(&self, id: &str) -> Option<&ReportComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn find_component_mut(&mut self, id: &str) -> Option<&mut ReportComponent> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    pub fn component_index(&self, id: &str) -> Option<usize> {
        self.components.iter().position(|c| c.id == id)
    }

    /// Derive TOC entries from heading/subheading components.
    pub fn toc_items(&self) -> Vec<TocItem> {
        self.components
            .iter()
            .enumerate()
            .filter_map(|(index, c)| {
                let level = match c.kind {
                    ComponentKind::Heading => 1,
                    ComponentKind::Subheading => 2,
                    _ => return None,
                };
                Some(TocItem {
                    component_id: c.id.clone(),
                    title: c.content.clone().unwrap_or_default(),
                    level,
                    page: index / 3 + 1,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_empty() {
        let doc = ReportDocument::new("report-1".to_string());
        assert!(doc.components.is_empty());
        assert_eq!(doc.name, "Untitled Report");
        assert_eq!(doc.styles, PageStyles::default());
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let mut doc = ReportDocument::new("report-1".to_string());
        for (i, kind) in ComponentKind::ALL.iter().enumerate() {
            doc.components
                .push(ReportComponent::new(*kind, format!("component-{}", i + 1)));
        }

        let json = serde_json::to_string(&doc).unwrap();
        let back: ReportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_toc_items_pick_headings_with_page_estimate() {
        let mut doc = ReportDocument::new("report-1".to_string());
        let mut push = |kind, id: &str, content: &str| {
            let mut c = ReportComponent::new(kind, id.to_string());
            c.content = Some(content.to_string());
            doc.components.push(c);
        };
        push(ComponentKind::Heading, "component-1", "Overview"); // index 0
        push(ComponentKind::Text, "component-2", "...");
        push(ComponentKind::Text, "component-3", "...");
        push(ComponentKind::Subheading, "component-4", "Revenue"); // index 3

        let toc = doc.toc_items();
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].title, "Overview");
        assert_eq!(toc[0].level, 1);
        assert_eq!(toc[0].page, 1);
        assert_eq!(toc[1].title, "Revenue");
        assert_eq!(toc[1].level, 2);
        assert_eq!(toc[1].page, 2);
    }

    #[test]
    fn test_find_component_by_id() {
        let mut doc = ReportDocument::new("report-1".to_string());
        doc.components.push(ReportComponent::new(
            ComponentKind::Text,
            "component-1".to_string(),
        ));

        assert!(doc.find_component("component-1").is_some());
        assert!(doc.find_component("component-99").is_none());
        assert_eq!(doc.component_index("component-1"), Some(0));
    }
}
