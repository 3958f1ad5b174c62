use crate::config::ComponentConfig;
use serde::{Deserialize, Serialize};

/// Closed set of component kinds a report can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Heading,
    Subheading,
    Text,
    Chart,
    Table,
    Image,
    Code,
    Divider,
    Quote,
    List,
    Section,
    Columns,
    Coverpage,
    Pagebreak,
    Toc,
    Kpi,
    Sparkline,
    LiveTable,
    DynamicChart,
    Signature,
    Disclaimer,
    Qrcode,
    Watermark,
}

impl ComponentKind {
    /// All kinds, in palette order.
    pub const ALL: [ComponentKind; 23] = [
        ComponentKind::Heading,
        ComponentKind::Subheading,
        ComponentKind::Text,
        ComponentKind::Chart,
        ComponentKind::Table,
        ComponentKind::Image,
        ComponentKind::Code,
        ComponentKind::Divider,
        ComponentKind::Quote,
        ComponentKind::List,
        ComponentKind::Section,
        ComponentKind::Columns,
        ComponentKind::Coverpage,
        ComponentKind::Pagebreak,
        ComponentKind::Toc,
        ComponentKind::Kpi,
        ComponentKind::Sparkline,
        ComponentKind::LiveTable,
        ComponentKind::DynamicChart,
        ComponentKind::Signature,
        ComponentKind::Disclaimer,
        ComponentKind::Qrcode,
        ComponentKind::Watermark,
    ];

    /// The serialized tag, usable as a display label key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Heading => "heading",
            ComponentKind::Subheading => "subheading",
            ComponentKind::Text => "text",
            ComponentKind::Chart => "chart",
            ComponentKind::Table => "table",
            ComponentKind::Image => "image",
            ComponentKind::Code => "code",
            ComponentKind::Divider => "divider",
            ComponentKind::Quote => "quote",
            ComponentKind::List => "list",
            ComponentKind::Section => "section",
            ComponentKind::Columns => "columns",
            ComponentKind::Coverpage => "coverpage",
            ComponentKind::Pagebreak => "pagebreak",
            ComponentKind::Toc => "toc",
            ComponentKind::Kpi => "kpi",
            ComponentKind::Sparkline => "sparkline",
            ComponentKind::LiveTable => "liveTable",
            ComponentKind::DynamicChart => "dynamicChart",
            ComponentKind::Signature => "signature",
            ComponentKind::Disclaimer => "disclaimer",
            ComponentKind::Qrcode => "qrcode",
            ComponentKind::Watermark => "watermark",
        }
    }

    /// Whether this kind is a container with child slots.
    ///
    /// Child slots are carried through serialization and duplication but
    /// have no recursive semantics: no operation descends into them.
    pub fn is_container(&self) -> bool {
        matches!(self, ComponentKind::Section | ComponentKind::Columns)
    }

    /// Default text payload for a freshly added component of this kind.
    pub fn default_content(&self) -> Option<String> {
        let content = match self {
            ComponentKind::Heading => "New Heading",
            ComponentKind::Subheading => "New Subheading",
            ComponentKind::Text => "Enter your text here...",
            ComponentKind::Quote => "Insert a notable quotation.",
            ComponentKind::Code => "print(\"hello, world\")",
            ComponentKind::Disclaimer => {
                "This report is for informational purposes only and does \
                 not constitute investment advice. Past performance is not \
                 indicative of future results."
            }
            _ => return None,
        };
        Some(content.to_string())
    }
}

/// A single typed content block in a report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportComponent {
    /// Unique within the document, assigned at creation, immutable.
    pub id: String,

    /// Kind discriminant. Always agrees with `config.kind()`.
    #[serde(rename = "type")]
    pub kind: ComponentKind,

    /// Free-form text payload; meaning depends on `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Kind-specific configuration record.
    pub config: ComponentConfig,

    /// Child slots for container kinds. Present but inert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ReportComponent>>,
}

impl ReportComponent {
    /// Build a component of `kind` with its default content and config.
    pub fn new(kind: ComponentKind, id: String) -> Self {
        Self {
            id,
            kind,
            content: kind.default_content(),
            config: ComponentConfig::default_for(kind),
            children: kind.is_container().then(Vec::new),
        }
    }

    /// Clone all fields under a new id.
    pub fn duplicate_as(&self, id: String) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}
