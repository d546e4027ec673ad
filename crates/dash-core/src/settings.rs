use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Dashboard session manager for the in-memory sales order dataset
#[derive(Parser, Debug, Clone)]
#[command(
    name = "salesdash",
    about = "Dashboard session manager for the in-memory sales order dataset",
    version
)]
pub struct Settings {
    /// Dashboard directory (defaults to ./Dashboards)
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// What to do after the session is refreshed
    #[arg(long, default_value = "list", value_parser = ["list", "new", "edit", "seed"])]
    pub action: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.salesdash/last_used.json`.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    /// Uses `~/.salesdash/last_used.json`.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(".salesdash").join("last_used.json")
    }

    /// Load persisted params from the default path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load persisted params from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to the default path, creating parent
    /// directories if needed.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::config_path())
    }

    /// Atomically write params to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the default config file if it exists.
    pub fn clear() -> Result<(), std::io::Error> {
        Self::clear_at(&Self::config_path())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &std::path::Path) -> Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl From<&Settings> for LastUsedParams {
    fn from(settings: &Settings) -> Self {
        Self {
            directory: settings
                .directory
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            log_level: Some(settings.log_level.clone()),
        }
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, and persist the result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Same as [`Settings::load_with_last_used`] but accepts an explicit
    /// argument list, enabling unit-testing without spawning subprocesses.
    pub fn load_with_last_used_from_args(args: Vec<std::ffi::OsString>) -> Self {
        Self::load_with_last_used_impl(args, &LastUsedParams::config_path())
    }

    /// Full implementation – accepts args and an explicit config path so that
    /// tests can redirect to a temporary directory.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &std::path::Path,
    ) -> Self {
        // Build raw ArgMatches so we can query ValueSource.
        let matches = Settings::command().get_matches_from(args.clone());

        // Parse into the typed struct using the same args.
        let mut settings = Settings::parse_from(args);

        if settings.clear {
            let _ = LastUsedParams::clear_at(config_path);
            return Self::apply_debug(settings);
        }

        let last = LastUsedParams::load_from(config_path);

        // Merge last-used values for fields that were NOT explicitly set on
        // the command line (CLI always wins). 'action' is never persisted.
        if !is_arg_explicitly_set(&matches, "directory") && settings.directory.is_none() {
            settings.directory = last.directory.map(PathBuf::from);
        }
        if !is_arg_explicitly_set(&matches, "log_level") {
            if let Some(v) = last.log_level {
                settings.log_level = v;
            }
        }

        settings = Self::apply_debug(settings);

        // Persist current settings for next run.
        let params = LastUsedParams::from(&settings);
        let _ = params.save_to(config_path);

        settings
    }

    /// `--debug` overrides the configured log level.
    fn apply_debug(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

/// `true` when `id` was supplied on the command line rather than defaulted.
fn is_arg_explicitly_set(matches: &clap::ArgMatches, id: &str) -> bool {
    matches
        .value_source(id)
        .map(|source| source == clap::parser::ValueSource::CommandLine)
        .unwrap_or(false)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("salesdash")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("last_used.json");
        let settings = Settings::load_with_last_used_impl(args(&[]), &config);

        assert!(settings.directory.is_none());
        assert_eq!(settings.action, "list");
        assert_eq!(settings.log_level, "INFO");
        assert!(!settings.debug);
    }

    #[test]
    fn test_debug_flag_overrides_log_level() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("last_used.json");
        let settings = Settings::load_with_last_used_impl(args(&["--debug"]), &config);
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_last_used_directory_is_merged() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("last_used.json");

        LastUsedParams {
            directory: Some("/srv/boards".to_string()),
            log_level: None,
        }
        .save_to(&config)
        .unwrap();

        let settings = Settings::load_with_last_used_impl(args(&[]), &config);
        assert_eq!(settings.directory, Some(PathBuf::from("/srv/boards")));
    }

    #[test]
    fn test_cli_directory_wins_over_last_used() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("last_used.json");

        LastUsedParams {
            directory: Some("/srv/old".to_string()),
            log_level: None,
        }
        .save_to(&config)
        .unwrap();

        let settings =
            Settings::load_with_last_used_impl(args(&["--directory", "/srv/new"]), &config);
        assert_eq!(settings.directory, Some(PathBuf::from("/srv/new")));
    }

    #[test]
    fn test_settings_are_persisted_for_next_run() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("last_used.json");

        Settings::load_with_last_used_impl(
            args(&["--directory", "/srv/boards", "--log-level", "ERROR"]),
            &config,
        );

        let last = LastUsedParams::load_from(&config);
        assert_eq!(last.directory.as_deref(), Some("/srv/boards"));
        assert_eq!(last.log_level.as_deref(), Some("ERROR"));
    }

    #[test]
    fn test_clear_removes_saved_configuration() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("last_used.json");

        LastUsedParams {
            directory: Some("/srv/boards".to_string()),
            log_level: None,
        }
        .save_to(&config)
        .unwrap();

        let settings = Settings::load_with_last_used_impl(args(&["--clear"]), &config);
        assert!(!config.exists());
        // Cleared run does not re-merge the stale directory.
        assert!(settings.directory.is_none());
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let last = LastUsedParams::load_from(std::path::Path::new("/does/not/exist.json"));
        assert!(last.directory.is_none());
        assert!(last.log_level.is_none());
    }

    #[test]
    fn test_load_from_invalid_json_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("last_used.json");
        std::fs::write(&path, "not json").unwrap();
        let last = LastUsedParams::load_from(&path);
        assert!(last.directory.is_none());
    }

    #[test]
    fn test_config_path_in() {
        let path = LastUsedParams::config_path_in(std::path::Path::new("/home/demo"));
        assert_eq!(
            path,
            PathBuf::from("/home/demo/.salesdash/last_used.json")
        );
    }
}
