//! The dashboard session manager.
//!
//! A [`DashboardSession`] owns the current set of dashboard definition files,
//! the current in-memory dataset snapshot, and the bind/open/save/refresh
//! operations that keep the two in sync with the host application. Every
//! operation is synchronous and runs to completion on the caller's thread;
//! the session is single-owner and not shared across threads.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use dash_core::document::{DashboardDocument, DataSource, OPPORTUNITIES_SOURCE};
use dash_core::error::{DashboardError, Result};
use dash_core::events::{DashboardEvent, Notifier};
use dash_core::models::OrderRecord;
use dash_data::orders::{snapshot_orders, OrderSource};
use dash_data::store::DashboardStore;
use tracing::debug;

use crate::documents::{DocumentManager, EDITOR_TEMPLATE};

// ── DashboardSession ──────────────────────────────────────────────────────────

/// Coordinates the dataset snapshot, the known dashboard files, and the
/// currently selected one.
///
/// Construction runs one [`DashboardSession::refresh`], so a freshly built
/// session already has its dataset and file list populated.
pub struct DashboardSession {
    /// File store rooted at the session's dashboard directory.
    store: DashboardStore,
    /// Provider the dataset snapshot is copied from on every refresh.
    orders: Box<dyn OrderSource>,
    /// Optional collaborator that creates and shows editor windows.
    documents: Option<Box<dyn DocumentManager>>,
    /// Event fan-out owned by this session.
    notifier: Notifier,
    /// Current dataset snapshot; replaced wholesale on refresh.
    dataset: Vec<OrderRecord>,
    /// Discovered dashboard files, sorted by path; replaced wholesale on
    /// refresh and save.
    dashboards: Vec<PathBuf>,
    /// Currently selected dashboard file, if any.
    current: Option<PathBuf>,
}

impl DashboardSession {
    /// Create a session and perform the initial refresh.
    ///
    /// `documents` is the optional editor collaborator; without one, open
    /// requests are silently dropped.
    pub fn new(
        store: DashboardStore,
        orders: Box<dyn OrderSource>,
        documents: Option<Box<dyn DocumentManager>>,
    ) -> Result<Self> {
        let mut session = Self {
            store,
            orders,
            documents,
            notifier: Notifier::new(),
            dataset: Vec::new(),
            dashboards: Vec::new(),
            current: None,
        };
        session.refresh()?;
        Ok(session)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The dashboard directory this session works against.
    pub fn directory(&self) -> &Path {
        self.store.directory()
    }

    /// The discovered dashboard files, sorted by path.
    pub fn dashboards(&self) -> &[PathBuf] {
        &self.dashboards
    }

    /// The currently selected dashboard file.
    pub fn current_dashboard(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Select a dashboard file. No validation happens until it is loaded.
    pub fn set_current(&mut self, path: impl Into<PathBuf>) {
        self.current = Some(path.into());
    }

    /// The current dataset snapshot.
    pub fn dataset(&self) -> &[OrderRecord] {
        &self.dataset
    }

    /// Register an event subscriber.
    pub fn subscribe(&mut self) -> Receiver<DashboardEvent> {
        self.notifier.subscribe()
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Re-snapshot the dataset and re-discover the saved dashboards.
    ///
    /// Creates the dashboard directory if it is absent. When the directory
    /// holds at least one dashboard, the first entry (lexicographic by path)
    /// becomes the current selection; otherwise the selection is cleared.
    /// An empty directory is a valid state, not an error.
    pub fn refresh(&mut self) -> Result<()> {
        self.dataset = snapshot_orders(self.orders.as_ref());

        self.store.ensure_directory()?;
        self.dashboards = self.store.list()?;
        self.current = self.dashboards.first().cloned();

        debug!(
            records = self.dataset.len(),
            dashboards = self.dashboards.len(),
            current = ?self.current,
            "session refreshed"
        );
        Ok(())
    }

    /// Load the currently selected dashboard and bind the dataset to it.
    pub fn current_document(&self) -> Result<DashboardDocument> {
        let path = self
            .current
            .as_ref()
            .ok_or(DashboardError::NoCurrentDashboard)?;
        let mut document = self.store.load(path)?;
        self.bind(&mut document);
        Ok(document)
    }

    /// Attach the current dataset to `document`.
    ///
    /// A document with no data sources gains one named
    /// [`OPPORTUNITIES_SOURCE`]; a document whose first source already has
    /// that name gets its records replaced. Any other first source leaves the
    /// document untouched; only position 0 is ever inspected. Binding twice
    /// replaces the records, never duplicates the source.
    pub fn bind(&self, document: &mut DashboardDocument) {
        if document.data_sources.is_empty() {
            document.data_sources.push(DataSource::with_records(
                OPPORTUNITIES_SOURCE,
                self.dataset.clone(),
            ));
        } else if document.data_sources[0].name == OPPORTUNITIES_SOURCE {
            document.data_sources[0].records = self.dataset.clone();
        }
    }

    /// Ask the document-manager collaborator to create and show an editor
    /// for `document`.
    ///
    /// With no collaborator registered, or when the collaborator returns no
    /// editor, this is a silent no-op.
    pub fn open(&self, document: DashboardDocument) {
        let Some(manager) = self.documents.as_ref() else {
            debug!("no document manager registered; dropping open request");
            return;
        };

        if let Some(editor) = manager.create_document(EDITOR_TEMPLATE, document) {
            editor.show();
        }
    }

    /// Create an empty dashboard, bind the dataset, and open it for editing.
    /// Nothing is persisted until the editor saves.
    pub fn new_dashboard(&self) {
        let mut document = DashboardDocument::default();
        self.bind(&mut document);
        self.open(document);
    }

    /// Load the currently selected dashboard and open it for editing.
    pub fn edit_dashboard(&self) -> Result<()> {
        let document = self.current_document()?;
        self.open(document);
        Ok(())
    }

    /// Persist `document` into the session's directory and re-discover the
    /// file list.
    ///
    /// The saved file becomes the current selection, then a `View` event and
    /// a `Refresh` event are published, in that order, so subscribers first
    /// switch to showing the dashboard and then reload any cached lists.
    pub fn save(&mut self, document: &DashboardDocument) -> Result<PathBuf> {
        let path = self.store.save(document)?;

        // Refresh the dashboard list just in case.
        self.dashboards = self.store.list()?;
        self.current = Some(path.clone());

        self.notifier.publish(DashboardEvent::view());
        self.notifier.publish(DashboardEvent::refresh());

        Ok(path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
