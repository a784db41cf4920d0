//! Server configuration file.
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:4000"
//!
//! [storage]
//! data_dir = "/var/lib/tuiter"
//! sqlite_path = "/var/lib/tuiter/tuiter.sqlite"   # optional
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use tuiter_core::ServiceConfig;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    pub listen: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSection {
    pub data_dir: Option<PathBuf>,
    pub sqlite_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Merge with command-line overrides. Flags win over the file.
    pub fn into_service_config(
        self,
        listen: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> ServiceConfig {
        let defaults = ServiceConfig::default();
        ServiceConfig {
            data_dir: data_dir.or(self.storage.data_dir),
            sqlite_path: self.storage.sqlite_path,
            listen: listen.or(self.server.listen).unwrap_or(defaults.listen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_merge() {
        let config: ServerConfig = toml::from_str(
            r#"
            [server]
            listen = "127.0.0.1:9000"

            [storage]
            data_dir = "/srv/tuiter"
            "#,
        )
        .unwrap();

        let merged = config.clone().into_service_config(None, None);
        assert_eq!(merged.listen, "127.0.0.1:9000");
        assert_eq!(merged.resolve_sqlite_path(), PathBuf::from("/srv/tuiter/tuiter.sqlite"));

        let merged = config.into_service_config(Some("0.0.0.0:1".into()), Some("/tmp/t".into()));
        assert_eq!(merged.listen, "0.0.0.0:1");
        assert_eq!(merged.data_dir, Some(PathBuf::from("/tmp/t")));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        let merged = config.into_service_config(None, None);
        assert_eq!(merged, ServiceConfig::default());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuiter.toml");
        std::fs::write(&path, "[storage]\nsqlite_path = \"/x/db.sqlite\"\n").unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.storage.sqlite_path, Some(PathBuf::from("/x/db.sqlite")));
        assert!(ServerConfig::load(&dir.path().join("missing.toml")).is_err());
    }
}
