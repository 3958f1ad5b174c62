//! Per-kind configuration records.
//!
//! Every component kind has exactly one config variant, selected by the
//! same discriminant as [`ComponentKind`](crate::ComponentKind). The
//! defaults here are what a freshly added component starts with; the
//! editor merges partial updates on top of them.

use crate::component::ComponentKind;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of block content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

/// Chart rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Area,
}

/// Divider line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    Solid,
    Dashed,
    Dotted,
}

/// One KPI tile: label, headline value, period-over-period delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiEntry {
    pub label: String,
    pub value: String,
    pub delta: String,
}

impl KpiEntry {
    pub fn new(label: &str, value: &str, delta: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            delta: delta.to_string(),
        }
    }
}

/// Kind-specific configuration, one variant per component kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ComponentConfig {
    Heading {
        level: u8,
        align: Align,
        font_size: u32,
        color: String,
    },
    Subheading {
        level: u8,
        align: Align,
        font_size: u32,
        color: String,
    },
    Text {
        align: Align,
        font_size: u32,
        line_height: f32,
    },
    Chart {
        chart_type: ChartType,
        title: String,
        labels: Vec<String>,
        values: Vec<f64>,
        color: String,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        striped: bool,
        bordered: bool,
    },
    Image {
        url: String,
        width_percent: u32,
        align: Align,
        caption: String,
    },
    Code {
        language: String,
        show_line_numbers: bool,
        theme: String,
    },
    Divider {
        style: DividerStyle,
        thickness: u32,
        color: String,
    },
    Quote {
        attribution: String,
        align: Align,
    },
    List {
        ordered: bool,
        items: Vec<String>,
    },
    Section {
        title: String,
        collapsed: bool,
    },
    Columns {
        count: u32,
        gap: u32,
    },
    Coverpage {
        show_logo: bool,
        show_date: bool,
        background_color: String,
    },
    Pagebreak {},
    Toc {
        title: String,
        show_page_numbers: bool,
        depth: u8,
    },
    Kpi {
        kpis: Vec<KpiEntry>,
    },
    Sparkline {
        label: String,
        values: Vec<f64>,
        color: String,
    },
    LiveTable {
        source: String,
        refresh_seconds: u32,
        max_rows: u32,
    },
    DynamicChart {
        chart_type: ChartType,
        source: String,
        refresh_seconds: u32,
    },
    Signature {
        name: String,
        title: String,
        show_date: bool,
        show_line: bool,
    },
    Disclaimer {
        font_size: u32,
    },
    Qrcode {
        data: String,
        size: u32,
        caption: String,
    },
    Watermark {
        text: String,
        opacity: f32,
        rotation: f32,
        font_size: u32,
    },
}

impl ComponentConfig {
    /// Default config for a freshly added component of `kind`.
    pub fn default_for(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Heading => ComponentConfig::Heading {
                level: 1,
                align: Align::Left,
                font_size: 28,
                color: "#1a1a2e".to_string(),
            },
            ComponentKind::Subheading => ComponentConfig::Subheading {
                level: 2,
                align: Align::Left,
                font_size: 20,
                color: "#1a1a2e".to_string(),
            },
            ComponentKind::Text => ComponentConfig::Text {
                align: Align::Left,
                font_size: 12,
                line_height: 1.5,
            },
            ComponentKind::Chart => ComponentConfig::Chart {
                chart_type: ChartType::Bar,
                title: "Revenue by Quarter".to_string(),
                labels: vec![
                    "Q1".to_string(),
                    "Q2".to_string(),
                    "Q3".to_string(),
                    "Q4".to_string(),
                ],
                values: vec![120.0, 135.0, 148.0, 170.0],
                color: "#4f46e5".to_string(),
            },
            ComponentKind::Table => ComponentConfig::Table {
                headers: vec![
                    "Metric".to_string(),
                    "FY23".to_string(),
                    "FY24".to_string(),
                ],
                rows: vec![
                    vec![
                        "Revenue".to_string(),
                        "$3.8M".to_string(),
                        "$4.2M".to_string(),
                    ],
                    vec![
                        "Gross Margin".to_string(),
                        "61%".to_string(),
                        "64%".to_string(),
                    ],
                ],
                striped: true,
                bordered: true,
            },
            ComponentKind::Image => ComponentConfig::Image {
                url: String::new(),
                width_percent: 100,
                align: Align::Center,
                caption: String::new(),
            },
            ComponentKind::Code => ComponentConfig::Code {
                language: "python".to_string(),
                show_line_numbers: true,
                theme: "dark".to_string(),
            },
            ComponentKind::Divider => ComponentConfig::Divider {
                style: DividerStyle::Solid,
                thickness: 1,
                color: "#d1d5db".to_string(),
            },
            ComponentKind::Quote => ComponentConfig::Quote {
                attribution: String::new(),
                align: Align::Left,
            },
            ComponentKind::List => ComponentConfig::List {
                ordered: false,
                items: vec![
                    "First item".to_string(),
                    "Second item".to_string(),
                    "Third item".to_string(),
                ],
            },
            ComponentKind::Section => ComponentConfig::Section {
                title: "New Section".to_string(),
                collapsed: false,
            },
            ComponentKind::Columns => ComponentConfig::Columns { count: 2, gap: 24 },
            ComponentKind::Coverpage => ComponentConfig::Coverpage {
                show_logo: true,
                show_date: true,
                background_color: "#ffffff".to_string(),
            },
            ComponentKind::Pagebreak => ComponentConfig::Pagebreak {},
            ComponentKind::Toc => ComponentConfig::Toc {
                title: "Table of Contents".to_string(),
                show_page_numbers: true,
                depth: 2,
            },
            ComponentKind::Kpi => ComponentConfig::Kpi {
                kpis: vec![
                    KpiEntry::new("Revenue", "$4.2M", "+12%"),
                    KpiEntry::new("Net Margin", "18.3%", "+2.1%"),
                    KpiEntry::new("Operating Costs", "$1.1M", "-4%"),
                ],
            },
            ComponentKind::Sparkline => ComponentConfig::Sparkline {
                label: "Trend".to_string(),
                values: vec![3.0, 5.0, 4.0, 7.0, 6.0, 9.0],
                color: "#16a34a".to_string(),
            },
            ComponentKind::LiveTable => ComponentConfig::LiveTable {
                source: String::new(),
                refresh_seconds: 60,
                max_rows: 10,
            },
            ComponentKind::DynamicChart => ComponentConfig::DynamicChart {
                chart_type: ChartType::Line,
                source: String::new(),
                refresh_seconds: 60,
            },
            ComponentKind::Signature => ComponentConfig::Signature {
                name: "Full Name".to_string(),
                title: "Title, Company".to_string(),
                show_date: true,
                show_line: true,
            },
            ComponentKind::Disclaimer => ComponentConfig::Disclaimer { font_size: 8 },
            ComponentKind::Qrcode => ComponentConfig::Qrcode {
                data: "https://example.com".to_string(),
                size: 96,
                caption: String::new(),
            },
            ComponentKind::Watermark => ComponentConfig::Watermark {
                text: "CONFIDENTIAL".to_string(),
                opacity: 0.1,
                rotation: -45.0,
                font_size: 72,
            },
        }
    }

    /// Kind discriminant this config belongs to.
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentConfig::Heading { .. } => ComponentKind::Heading,
            ComponentConfig::Subheading { .. } => ComponentKind::Subheading,
            ComponentConfig::Text { .. } => ComponentKind::Text,
            ComponentConfig::Chart { .. } => ComponentKind::Chart,
            ComponentConfig::Table { .. } => ComponentKind::Table,
            ComponentConfig::Image { .. } => ComponentKind::Image,
            ComponentConfig::Code { .. } => ComponentKind::Code,
            ComponentConfig::Divider { .. } => ComponentKind::Divider,
            ComponentConfig::Quote { .. } => ComponentKind::Quote,
            ComponentConfig::List { .. } => ComponentKind::List,
            ComponentConfig::Section { .. } => ComponentKind::Section,
            ComponentConfig::Columns { .. } => ComponentKind::Columns,
            ComponentConfig::Coverpage { .. } => ComponentKind::Coverpage,
            ComponentConfig::Pagebreak {} => ComponentKind::Pagebreak,
            ComponentConfig::Toc { .. } => ComponentKind::Toc,
            ComponentConfig::Kpi { .. } => ComponentKind::Kpi,
            ComponentConfig::Sparkline { .. } => ComponentKind::Sparkline,
            ComponentConfig::LiveTable { .. } => ComponentKind::LiveTable,
            ComponentConfig::DynamicChart { .. } => ComponentKind::DynamicChart,
            ComponentConfig::Signature { .. } => ComponentKind::Signature,
            ComponentConfig::Disclaimer { .. } => ComponentKind::Disclaimer,
            ComponentConfig::Qrcode { .. } => ComponentKind::Qrcode,
            ComponentConfig::Watermark { .. } => ComponentKind::Watermark,
        }
    }
}
