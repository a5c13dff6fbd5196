use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_SRS_NAME};
use crate::dataset::DatasetInfo;
use crate::error::{EngineError, Result};

/// Target schema generation. Selects the standards tag namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemaVersion {
    #[default]
    #[serde(rename = "s125", alias = "S125")]
    S125,
    #[serde(rename = "s201", alias = "S201")]
    S201,
}

impl SchemaVersion {
    /// Namespace prefix of the standards tag keys
    pub fn tag_namespace(&self) -> &'static str {
        match self {
            SchemaVersion::S125 => "s125",
            SchemaVersion::S201 => "s100",
        }
    }
}

/// Settings that shape the output independent of any one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub schema_version: SchemaVersion,
    /// Language code stamped on feature names and information
    pub language: String,
    /// Spatial reference of envelopes and geometries
    pub srs_name: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            srs_name: DEFAULT_SRS_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetInfo,
    #[serde(default)]
    pub engine: EngineSettings,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.engine.srs_name.trim().is_empty() {
            return Err(EngineError::Config("engine.srs_name must not be empty".to_string()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.engine, EngineSettings::default());
        assert_eq!(config.engine.schema_version.tag_namespace(), "s125");
        assert_eq!(config.dataset, DatasetInfo::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[dataset]
dataset_id = "urn:mrn:test:dataset:1"
title = "Test AtoN dataset"
language = "eng"

[engine]
schema_version = "s201"
language = "fra"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dataset.dataset_id, "urn:mrn:test:dataset:1");
        assert_eq!(config.dataset.title, "Test AtoN dataset");
        assert_eq!(config.engine.schema_version, SchemaVersion::S201);
        assert_eq!(config.engine.schema_version.tag_namespace(), "s100");
        assert_eq!(config.engine.language, "fra");
        assert_eq!(config.engine.srs_name, "EPSG:4326");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = Config::load("/definitely/not/here.toml");
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn test_blank_srs_rejected() {
        let result = Config::from_toml_str("[engine]\nsrs_name = \"\"\n");
        assert!(matches!(result, Err(EngineError::Config(_))));
    }
}
