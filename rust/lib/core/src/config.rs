use std::path::PathBuf;

/// Runtime configuration shared by the server binary and tests.
///
/// The binary fills this from its config file and command-line flags,
/// then hands it to storage initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Directory holding the database file.
    pub data_dir: Option<PathBuf>,

    /// Path to the SQLite database file.
    /// Defaults to `{data_dir}/tuiter.sqlite` if not specified.
    pub sqlite_path: Option<PathBuf>,

    /// Listen address for the HTTP server.
    pub listen: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            sqlite_path: None,
            listen: "0.0.0.0:4000".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolve the SQLite database path, falling back to `{data_dir}/tuiter.sqlite`.
    pub fn resolve_sqlite_path(&self) -> PathBuf {
        self.sqlite_path.clone().unwrap_or_else(|| {
            self.data_dir
                .as_ref()
                .map(|d| d.join("tuiter.sqlite"))
                .unwrap_or_else(|| PathBuf::from("tuiter.sqlite"))
        })
    }
}
