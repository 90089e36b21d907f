//! Configuration for the acquisition engine.

use serde::{Deserialize, Serialize};

/// Tuning knobs for acquisition gating.
///
/// `accept_threshold` is expected to sit above `defer_threshold`; this is not
/// enforced, and an inverted pair simply leaves the defer band empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionConfig {
    /// Scores at or above this are accepted.
    pub accept_threshold: f64,
    /// Scores at or above this (but below accept) are deferred.
    pub defer_threshold: f64,
    /// Upper sizing reference for length shaping, in words.
    pub max_text_length: usize,
    /// Minimum word count before a candidate is penalized as too short.
    pub min_text_length: usize,
    /// Enables per-pair novelty memory. When false, every candidate is
    /// treated as a repeat and no pair state is kept.
    pub track_by_pair: bool,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            accept_threshold: 0.6,
            defer_threshold: 0.4,
            max_text_length: 320,
            min_text_length: 4,
            track_by_pair: true,
        }
    }
}

impl AcquisitionConfig {
    /// Load configuration from a file (TOML or JSON, by extension).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::error::AttuneResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| crate::error::AttuneError::Configuration(e.to_string())),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| crate::error::AttuneError::Configuration(e.to_string())),
            _ => Err(crate::error::AttuneError::Configuration(
                "Unsupported config file format. Use .toml or .json".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AcquisitionConfig::default();
        assert_eq!(config.accept_threshold, 0.6);
        assert_eq!(config.defer_threshold, 0.4);
        assert_eq!(config.max_text_length, 320);
        assert_eq!(config.min_text_length, 4);
        assert!(config.track_by_pair);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "accept_threshold = 0.75").unwrap();
        writeln!(file, "track_by_pair = false").unwrap();

        let config = AcquisitionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.accept_threshold, 0.75);
        assert!(!config.track_by_pair);
        assert_eq!(config.defer_threshold, 0.4);
        assert_eq!(config.max_text_length, 320);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        assert!(AcquisitionConfig::from_file(file.path()).is_err());
    }
}
