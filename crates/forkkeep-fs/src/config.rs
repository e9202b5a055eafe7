//! Configuration loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Loads typed configuration from disk.
///
/// The format is detected from the file extension. Only TOML is
/// understood; anything else is rejected rather than guessed at.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => {
                let content = io::read_text(path)?;
                toml::from_str(&content).map_err(|e| Error::ConfigParse {
                    path: path.to_native(),
                    format: "TOML".into(),
                    message: e.to_string(),
                })
            }
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Load configuration if the file exists, `None` otherwise.
    pub fn load_optional<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<Option<T>> {
        if !path.is_file() {
            tracing::debug!(path = %path, "No config file, using defaults");
            return Ok(None);
        }
        self.load(path).map(Some)
    }
}
