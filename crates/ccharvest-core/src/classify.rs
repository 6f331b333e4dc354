//! Direct-download link classification.
//!
//! The heuristic is configuration, not logic: a link is "direct" when it
//! contains any configured marker substring or starts with any configured
//! prefix. The shipped defaults are placeholders carried over from the tool
//! this replaces; real deployments override them in config.toml.

use serde::{Deserialize, Serialize};

fn default_markers() -> Vec<String> {
    vec!["file?h=".to_string()]
}

/// Substring markers and URL prefixes that identify a direct download link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierRules {
    /// A link containing any of these substrings is direct.
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
    /// A link starting with any of these prefixes is direct.
    #[serde(default)]
    pub prefixes: Vec<String>,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            prefixes: Vec::new(),
        }
    }
}

impl ClassifierRules {
    /// Pure predicate; no I/O, never fails.
    ///
    /// Empty-string rules are skipped: an empty marker is a substring of
    /// every link and would classify the whole history as direct.
    pub fn is_direct_download_link(&self, link: &str) -> bool {
        self.markers
            .iter()
            .filter(|m| !m.is_empty())
            .any(|m| link.contains(m.as_str()))
            || self
                .prefixes
                .iter()
                .filter(|p| !p.is_empty())
                .any(|p| link.starts_with(p.as_str()))
    }
}
