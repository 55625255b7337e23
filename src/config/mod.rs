
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::Bool;
use crate::errors::{Error, Result};

/// One config entry as stored on disk: the value plus a human-oriented
/// description. The file is edited by hand; there is no in-app editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    data: ConfigFile,
}

impl Config {
    /// Reads `path` if it exists. A missing file is not an error and yields
    /// the defaults; the program must run with zero files on disk.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self { data })
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.value.0
    }
}
