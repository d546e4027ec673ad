//! Core domain types for salesdash.
//!
//! Defines the dashboard document model, the flattened order record bound to
//! dashboards, the event contract between a session and its subscribers, the
//! error taxonomy, and CLI/persisted settings.

pub mod document;
pub mod error;
pub mod events;
pub mod models;
pub mod settings;

pub use document::{DashboardDocument, DataSource, OPPORTUNITIES_SOURCE};
pub use error::{DashboardError, Result};
pub use events::{DashboardEvent, DashboardEventKind, Notifier};
pub use models::OrderRecord;
