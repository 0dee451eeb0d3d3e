//! Display options.
//!
//! Options are plain values handed to the renderer. They can come from a
//! YAML file, from command-line flags, or both:
//!
//! ```yaml
//! capo: true
//! strumming: true
//! compact: false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SongError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Options {
    /// Show the `Capo:` field in the song header.
    pub capo: bool,
    /// Show the `Note:` field in the song header.
    pub note: bool,
    /// Show strumming pattern tables in the song header.
    pub strumming: bool,
    /// Put section headings on the same line as their content.
    pub compact: bool,
}

impl Options {
    /// Parse options from a YAML string. Missing keys are `false`.
    pub fn from_yaml(yaml: &str) -> Result<Self, SongError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| SongError::ConfigError(e.to_string()))
    }

    /// Load options from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SongError> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            SongError::ConfigError(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_yaml(&contents)
    }

    /// Turn on every option that is on in `other`.
    pub fn merge(self, other: Options) -> Self {
        Self {
            capo: self.capo || other.capo,
            note: self.note || other.note,
            strumming: self.strumming || other.strumming,
            compact: self.compact || other.compact,
        }
    }

    /// Whether any optional header field is shown at all.
    pub fn shows_details(&self) -> bool {
        self.capo || self.note || self.strumming
    }
}
