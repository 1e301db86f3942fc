//! Locating the config file from an ordered search path.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::parser;
use super::types::ResolvedConfig;

/// Config file name shared by every search location.
pub const CONFIG_FILE_NAME: &str = "mozdef_client_config.conf";

/// Default search path: project-local, then local-system, then system-wide.
pub const CONFIG_FILE_LOCATIONS: [&str; 3] = [
    CONFIG_FILE_NAME,
    "/usr/local/etc/mozdef_client_config.conf",
    "/etc/mozdef_client_config.conf",
];

/// Resolves configuration from the first usable file in an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResolver {
    candidates: Vec<PathBuf>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new(CONFIG_FILE_LOCATIONS)
    }
}

impl ConfigResolver {
    /// Create a resolver probing `candidates` in order.
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Candidate paths, in probe order.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Return the config parsed from the first candidate that exists and parses.
    ///
    /// Missing candidates are skipped. Unreadable or malformed ones are logged
    /// and skipped. When nothing is usable the result is empty; deciding
    /// whether that is acceptable is left to the caller.
    pub fn resolve(&self) -> ResolvedConfig {
        for path in &self.candidates {
            if !path.is_file() {
                debug!("Config candidate not present: {}", path.display());
                continue;
            }
            match load(path) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Skipping config candidate {}: {}", path.display(), e);
                }
            }
        }

        debug!(
            "No usable config among {} candidate(s)",
            self.candidates.len()
        );
        ResolvedConfig::empty()
    }
}

/// Read and parse a single config file.
pub fn load(path: &Path) -> anyhow::Result<ResolvedConfig> {
    let content = fs::read_to_string(path)?;
    let config = parser::parse(&content)?;
    Ok(config.with_origin(path))
}
