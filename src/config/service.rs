//! Generation of sample config files.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::resolver::CONFIG_FILE_NAME;

/// URL written into generated files when none is given.
pub const SAMPLE_URL: &str = "https://mozdef.example.com/events";

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Project-local config path, the first location searched.
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Write a commented sample config to `path`.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub fn generate_at(path: &Path, url: Option<&str>, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }

        // Create parent directories if needed
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = Self::default_config_content(url.unwrap_or(SAMPLE_URL));
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Sample configuration content with comments.
    pub fn default_config_content(url: &str) -> String {
        format!(
            r#"# mozdef_client_config.conf
#
# Searched in order, first readable and well-formed file wins:
#   ./mozdef_client_config.conf
#   /usr/local/etc/mozdef_client_config.conf
#   /etc/mozdef_client_config.conf

[mozdef]
# Endpoint events are POSTed to (required while send_events is on)
mozdef_url = {url}

# Set to false to turn every send into a no-op (default: true)
send_events = true

# Also write events to local syslog (default: false)
send_to_syslog = false

# With send_to_syslog, write to syslog only and skip the endpoint (default: false)
syslog_only = false
"#
        )
    }
}
