//! The editable dashboard definition.
//!
//! A [`DashboardDocument`] is what a dashboard XML file deserialises into:
//! a title, a list of named data sources, and the widget items that make up
//! the layout. The session layer only ever touches the title and the data
//! sources; items round-trip through load/save untouched.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::OrderRecord;

/// Name of the single data source dashboards bind against.
pub const OPPORTUNITIES_SOURCE: &str = "Opportunities";

// ── DashboardDocument ─────────────────────────────────────────────────────────

/// One dashboard definition, persisted as a single XML file.
///
/// The serde shape targets quick-xml: `@`-prefixed fields become XML
/// attributes, `Vec` fields become repeated child elements.
///
/// ```xml
/// <Dashboard Title="Sales Overview">
///   <DataSource Name="Opportunities"/>
///   <Item Kind="Chart" Caption="Sales by State" DataMember="store_state"/>
/// </Dashboard>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Dashboard")]
pub struct DashboardDocument {
    /// Display title; doubles as the file stem on save.
    #[serde(rename = "@Title", default)]
    pub title: String,
    /// Ordered data sources. Bound dashboards carry at most one source named
    /// [`OPPORTUNITIES_SOURCE`].
    #[serde(rename = "DataSource", default)]
    pub data_sources: Vec<DataSource>,
    /// Widget layout. Opaque to the session layer.
    #[serde(rename = "Item", default)]
    pub items: Vec<DashboardItem>,
}

impl DashboardDocument {
    /// Create an empty document with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parse a document from its XML representation.
    pub fn from_xml(xml: &str) -> Result<Self> {
        Ok(quick_xml::de::from_str(xml)?)
    }

    /// Serialise the document to XML.
    ///
    /// Data-source records are runtime state and are not written out; a
    /// loaded document has empty record sets until it is bound again.
    pub fn to_xml(&self) -> Result<String> {
        Ok(quick_xml::se::to_string(self)?)
    }
}

// ── DataSource ────────────────────────────────────────────────────────────────

/// A named data source attached to a dashboard.
///
/// Only the name persists; the record set is attached at bind time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    /// Data-source name referenced by the dashboard's widgets.
    #[serde(rename = "@Name")]
    pub name: String,
    /// Live records bound to this source. Never serialised.
    #[serde(skip)]
    pub records: Vec<OrderRecord>,
}

impl DataSource {
    /// Create an empty data source with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Create a data source carrying the given records.
    pub fn with_records(name: impl Into<String>, records: Vec<OrderRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

// ── DashboardItem ─────────────────────────────────────────────────────────────

/// Kind of widget a dashboard item renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    #[default]
    Grid,
    Chart,
    Pie,
    Map,
    Card,
}

/// One widget in the dashboard layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardItem {
    /// Widget kind.
    #[serde(rename = "@Kind", default)]
    pub kind: ItemKind,
    /// Caption shown above the widget.
    #[serde(rename = "@Caption", default)]
    pub caption: String,
    /// Record field the widget is driven by.
    #[serde(rename = "@DataMember", default)]
    pub data_member: String,
}

impl DashboardItem {
    /// Create an item of the given kind bound to a record field.
    pub fn new(kind: ItemKind, caption: impl Into<String>, data_member: impl Into<String>) -> Self {
        Self {
            kind,
            caption: caption.into(),
            data_member: data_member.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
