//! Dashboard file discovery and XML load/save.
//!
//! A [`DashboardStore`] owns one directory of dashboard definition files
//! (`<stem>.xml`, stem = dashboard title) and performs every file-system
//! operation the session needs: ensuring the directory exists, listing the
//! saved definitions, and loading/saving individual documents.

use std::path::{Path, PathBuf};

use dash_core::document::DashboardDocument;
use dash_core::error::{DashboardError, Result};
use tracing::{debug, warn};

/// File extension of dashboard definition files.
pub const DASHBOARD_EXTENSION: &str = "xml";

/// Name of the default dashboard directory under the working directory.
pub const DEFAULT_DIRECTORY_NAME: &str = "Dashboards";

// ── DashboardStore ────────────────────────────────────────────────────────────

/// File store for dashboard definitions rooted at a single directory.
///
/// # Example
///
/// ```no_run
/// use dash_data::store::DashboardStore;
///
/// let store = DashboardStore::new("/srv/Dashboards");
/// for path in store.list().unwrap() {
///     println!("{}", path.display());
/// }
/// ```
pub struct DashboardStore {
    /// Root folder for dashboard files. Fixed for the store's lifetime.
    directory: PathBuf,
}

impl DashboardStore {
    /// Create a store rooted at `directory`. No file-system access happens
    /// until one of the operations is called.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Create a store rooted at `<current-working-directory>/Dashboards`.
    pub fn in_current_dir() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(cwd.join(DEFAULT_DIRECTORY_NAME))
    }

    /// The directory this store is rooted at.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Create the dashboard directory (and any missing parents) if absent.
    pub fn ensure_directory(&self) -> Result<()> {
        std::fs::create_dir_all(&self.directory).map_err(|source| {
            DashboardError::DirectoryAccess {
                path: self.directory.clone(),
                source,
            }
        })
    }

    /// List all dashboard files in the directory, sorted by path.
    ///
    /// The ordering is lexicographic and therefore stable across platforms;
    /// "first file in the directory" is well defined. A missing directory
    /// yields an empty list rather than an error.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.directory.exists() {
            warn!(
                "Dashboard directory does not exist: {}",
                self.directory.display()
            );
            return Ok(Vec::new());
        }

        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(&self.directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry
                        .path()
                        .extension()
                        .map(|ext| ext == DASHBOARD_EXTENSION)
                        .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect();

        files.sort();
        debug!(
            count = files.len(),
            directory = %self.directory.display(),
            "listed dashboard files"
        );
        Ok(files)
    }

    /// Load the dashboard definition stored at `path`.
    ///
    /// The returned document carries no live records; bind it before use.
    pub fn load(&self, path: &Path) -> Result<DashboardDocument> {
        if !path.exists() {
            return Err(DashboardError::NotFound(path.to_path_buf()));
        }

        let xml = std::fs::read_to_string(path).map_err(|source| DashboardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let document = DashboardDocument::from_xml(&xml)?;
        debug!(
            title = %document.title,
            path = %path.display(),
            "loaded dashboard"
        );
        Ok(document)
    }

    /// Save `document` to `<directory>/<title>.xml` and return the path.
    ///
    /// The title is used verbatim as the file stem: no escaping and no
    /// collision check; an existing file with the same title is silently
    /// overwritten. An empty title is rejected.
    pub fn save(&self, document: &DashboardDocument) -> Result<PathBuf> {
        if document.title.is_empty() {
            return Err(DashboardError::EmptyTitle);
        }

        let path = self
            .directory
            .join(format!("{}.{}", document.title, DASHBOARD_EXTENSION));

        let xml = document.to_xml()?;
        std::fs::write(&path, xml).map_err(|source| DashboardError::FileWrite {
            path: path.clone(),
            source,
        })?;

        debug!(
            title = %document.title,
            path = %path.display(),
            "saved dashboard"
        );
        Ok(path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
