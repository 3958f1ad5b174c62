//! # Reportcraft Model
//!
//! Typed document model for report authoring.
//!
//! A report is an ordered tree of typed components (headings, charts,
//! tables, KPIs, ...) plus document-level metadata and page styles.
//! This crate defines the data shapes and nothing else: mutations live in
//! `reportcraft-editor`, satellite collaboration records in
//! `reportcraft-collab`.
//!
//! ## Core Principles
//!
//! 1. **The document is plain data**: every type derives `Serialize`,
//!    `Deserialize`, `Clone` and `PartialEq`; a document round-trips
//!    through JSON losslessly.
//! 2. **Config is a closed union**: each component kind carries its own
//!    config record, selected by the kind discriminant, so config access
//!    is exhaustively checked instead of stringly-typed.
//! 3. **Ids are opaque strings**: generated once, never rewritten.

mod component;
mod config;
mod document;
mod id_generator;

pub use component::{ComponentKind, ReportComponent};
pub use config::{
    Align, ChartType, ComponentConfig, DividerStyle, KpiEntry,
};
pub use document::{
    DocumentMetadata, Margins, Orientation, PageSize, PageStyles,
    ReportDocument, TocItem,
};
pub use id_generator::IdGenerator;
