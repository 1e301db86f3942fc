//! Core domain types for MozDef events.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

/// Event severity, in MozDef's upper-case vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

impl Severity {
    /// All severities from least to most severe.
    pub const ALL: [Severity; 8] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Alert,
        Severity::Emergency,
    ];

    /// Upper-case name as it appears in event messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Alert => "ALERT",
            Severity::Emergency => "EMERGENCY",
        }
    }

    /// Parse leniently: unknown names become [`Severity::Info`].
    pub fn from_str_lossy(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Syslog priority level (0 = emergency .. 7 = debug).
    pub fn syslog_priority(&self) -> u8 {
        match self {
            Severity::Emergency => 0,
            Severity::Alert => 1,
            Severity::Critical => 2,
            Severity::Error => 3,
            Severity::Warning => 4,
            Severity::Notice => 5,
            Severity::Info => 6,
            Severity::Debug => 7,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str() == upper)
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

/// Per-send overrides for the stored event fields.
///
/// Every field left as `None` falls back to the value stored on the event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFields {
    /// RFC 3339 timestamp (defaults to the time of sending)
    pub timestamp: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub severity: Option<Severity>,
    pub tags: Option<Vec<String>>,
    pub details: Option<Map<String, Value>>,
    pub hostname: Option<String>,
}

/// Message as serialized to MozDef and syslog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMessage {
    pub timestamp: String,
    pub hostname: String,
    pub processname: String,
    pub processid: u32,
    pub severity: Severity,
    pub summary: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub tags: Vec<String>,
    pub details: Map<String, Value>,
}
