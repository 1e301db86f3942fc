//! Validated event settings derived from the `[mozdef]` section.

use super::parser::parse_bool;
use super::types::ResolvedConfig;
use crate::domain::ConfigurationError;

/// Section holding every recognized option.
pub const MOZDEF_SECTION: &str = "mozdef";

/// Endpoint used when sending is disabled and no URL is configured.
/// It is never dialed.
pub const PLACEHOLDER_URL: &str = "undefined.hostname.company.local";

const OPT_URL: &str = "mozdef_url";
const OPT_SEND_EVENTS: &str = "send_events";
const OPT_SEND_TO_SYSLOG: &str = "send_to_syslog";
const OPT_SYSLOG_ONLY: &str = "syslog_only";

/// Settings fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSettings {
    /// Destination endpoint handed to the event client
    pub destination_url: String,

    /// Whether the configured URL came from config (false means placeholder)
    pub url_from_config: bool,

    /// Guard for `send()`
    pub send_events: bool,

    /// Also write events to local syslog
    pub send_to_syslog: bool,

    /// Write events to local syslog only
    pub syslog_only: bool,
}

impl EventSettings {
    /// Derive settings from a resolved config.
    ///
    /// Absent options take their defaults. A boolean option that is present
    /// but unrecognized is an error, as is a missing URL while sending is on.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, ConfigurationError> {
        let send_events = read_bool(config, OPT_SEND_EVENTS, true)?;

        let url = config
            .get(MOZDEF_SECTION, OPT_URL)
            .map(str::trim)
            .filter(|url| !url.is_empty());
        let (destination_url, url_from_config) = match url {
            Some(url) => (url.to_string(), true),
            None if send_events => return Err(ConfigurationError::MissingUrl),
            None => (PLACEHOLDER_URL.to_string(), false),
        };

        Ok(Self {
            destination_url,
            url_from_config,
            send_events,
            send_to_syslog: read_bool(config, OPT_SEND_TO_SYSLOG, false)?,
            syslog_only: read_bool(config, OPT_SYSLOG_ONLY, false)?,
        })
    }
}

fn read_bool(
    config: &ResolvedConfig,
    option: &str,
    default: bool,
) -> Result<bool, ConfigurationError> {
    match config.get(MOZDEF_SECTION, option) {
        None => Ok(default),
        Some(raw) => parse_bool(raw).ok_or_else(|| ConfigurationError::InvalidBoolean {
            option: option.to_string(),
            value: raw.to_string(),
        }),
    }
}
