use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the salesdash crates.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The dashboard directory could not be created or scanned.
    #[error("Failed to access dashboard directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dashboard file does not exist on disk.
    #[error("Dashboard file not found: {0}")]
    NotFound(PathBuf),

    /// A dashboard file could not be read from disk.
    #[error("Failed to read dashboard {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dashboard file could not be written to disk.
    #[error("Failed to write dashboard {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dashboard definition could not be serialised to or parsed from XML.
    #[error("Failed to process dashboard XML: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// No dashboard is currently selected in the session.
    #[error("No dashboard is currently selected")]
    NoCurrentDashboard,

    /// A dashboard title is empty and cannot name a file.
    #[error("Dashboard title is empty; cannot derive a file name")]
    EmptyTitle,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the salesdash crates.
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_directory_access() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DashboardError::DirectoryAccess {
            path: PathBuf::from("/srv/Dashboards"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to access dashboard directory"));
        assert!(msg.contains("/srv/Dashboards"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_display_not_found() {
        let err = DashboardError::NotFound(PathBuf::from("/srv/Dashboards/Q1.xml"));
        let msg = err.to_string();
        assert_eq!(msg, "Dashboard file not found: /srv/Dashboards/Q1.xml");
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = DashboardError::FileRead {
            path: PathBuf::from("/srv/Dashboards/Q1.xml"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read dashboard"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_file_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = DashboardError::FileWrite {
            path: PathBuf::from("/srv/Dashboards/Q1.xml"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to write dashboard"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_error_display_no_current_dashboard() {
        let err = DashboardError::NoCurrentDashboard;
        assert_eq!(err.to_string(), "No dashboard is currently selected");
    }

    #[test]
    fn test_error_display_empty_title() {
        let err = DashboardError::EmptyTitle;
        assert!(err.to_string().contains("title is empty"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DashboardError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_quick_xml() {
        let xml_err = quick_xml::de::from_str::<crate::document::DashboardDocument>("<not-xml")
            .unwrap_err();
        let err: DashboardError = xml_err.into();
        assert!(err.to_string().contains("Failed to process dashboard XML"));
    }
}
