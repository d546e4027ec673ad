//! Session layer for salesdash.
//!
//! Owns the current dataset snapshot and the set of known dashboard files,
//! and provides the bind/open/save/refresh operations that keep the two in
//! sync with the host application.

pub mod documents;
pub mod session;

pub use dash_core as core;
pub use dash_data as data;

pub use documents::{DocumentManager, EditorDocument, LoggingDocumentManager, EDITOR_TEMPLATE};
pub use session::DashboardSession;
