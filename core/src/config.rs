//! Run configuration — store path, source path, and import options.
//!
//! The original deployment used hardcoded literals for both paths; they
//! are injected here instead so the runner and tests can point the ETL
//! path anywhere.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtlConfig {
    /// SQLite database file, or ":memory:".
    pub db_path: String,
    /// CSV source file, columns [0]=name, [1]=email, [2]=phone.
    pub source_path: String,
    /// Treat the source's first row as a header and skip it.
    /// Off by default: row 1 is imported as data.
    #[serde(default)]
    pub source_has_header: bool,
}

impl EtlConfig {
    /// Load from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            db_path: ":memory:".into(),
            source_path: "investors_data.csv".into(),
            source_has_header: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_reads_json_and_defaults_the_header_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("etl.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"db_path": "investments.db", "source_path": "contacts.csv"}}"#
        )
        .unwrap();
        drop(file);

        let config = EtlConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.db_path, "investments.db");
        assert_eq!(config.source_path, "contacts.csv");
        assert!(!config.source_has_header, "header flag defaults to off");
    }

    #[test]
    fn load_fails_with_the_path_in_the_message() {
        let err = EtlConfig::load("no/such/etl.json").unwrap_err();
        assert!(err.to_string().contains("no/such/etl.json"));
    }

    #[test]
    fn test_defaults_point_at_memory_store() {
        assert_eq!(EtlConfig::default_test().db_path, ":memory:");
    }
}
