//! Engine configuration.
//!
//! Read from `sitelint.toml` when present. Every key is optional:
//!
//! ```toml
//! parallel = true
//!
//! [fetch]
//! timeout_secs = 10
//! user_agent = "sitelint/0.1.0"
//!
//! [evidence]
//! context_lines = 2
//! max_chars = 500
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "sitelint.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fetch: FetchConfig,
    pub evidence: EvidenceConfig,
    /// Evaluate rules on the rayon pool. Output order is identical either way.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            evidence: EvidenceConfig::default(),
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: format!("{}/{}", crate::TOOL_NAME, env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Size of the snippet window attached to a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Lines of context on each side of the matching line.
    pub context_lines: usize,
    pub max_chars: usize,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            context_lines: 2,
            max_chars: 500,
        }
    }
}

pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config: {}", path.display()))
}

/// `sitelint.toml` in `dir`, if there is one.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_config(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn defaults_match_reference_behaviour() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.fetch.timeout(), Duration::from_secs(10));
        assert!(cfg.fetch.user_agent.starts_with("sitelint/"));
        assert_eq!(cfg.evidence.context_lines, 2);
        assert_eq!(cfg.evidence.max_chars, 500);
        assert!(cfg.parallel);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let file = temp_config("parallel = false\n[fetch]\ntimeout_secs = 3\n");
        let cfg = load_config(file.path()).unwrap();
        assert!(!cfg.parallel);
        assert_eq!(cfg.fetch.timeout_secs, 3);
        assert!(cfg.fetch.user_agent.starts_with("sitelint/"));
        assert_eq!(cfg.evidence, EvidenceConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = temp_config("[fetch\ntimeout_secs = ");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config(Path::new("does-not-exist.toml")).is_err());
    }

    #[test]
    fn discover_finds_file_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_config(dir.path()).is_none());
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "parallel = true\n").unwrap();
        assert_eq!(
            discover_config(dir.path()),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }
}
