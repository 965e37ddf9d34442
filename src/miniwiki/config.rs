use crate::error::{Result, WikiError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = ".md";

/// Configuration for miniwiki, read from config.json in the data directory.
///
/// The file is hand-edited; the server only ever reads it at startup, so
/// there is no write path here.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WikiConfig {
    /// File extension for entry files (e.g., ".md", ".txt")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            file_ext: DEFAULT_FILE_EXT.to_string(),
        }
    }
}

impl WikiConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WikiError::Io)?;
        let config: WikiConfig =
            serde_json::from_str(&content).map_err(WikiError::Serialization)?;
        Ok(config)
    }

    /// Get the file extension (as written in the config file)
    pub fn get_file_ext(&self) -> &str {
        &self.file_ext
    }
}
