//! Error types for mozdef-client-config.

use thiserror::Error;

/// Construction-time failure of a configured event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Sending is enabled but no destination was configured
    #[error("Configuration error: config file lacks a \"mozdef_url\" option while send_events is enabled")]
    MissingUrl,

    /// A boolean option is present but is not a recognized boolean
    #[error("Configuration error: option \"{option}\" is not a boolean: {value:?}")]
    InvalidBoolean { option: String, value: String },
}

/// Failure to parse a sectioned config file.
///
/// Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Content found before the first `[section]` header
    #[error("line {line}: file contains no section headers: {content:?}")]
    MissingSectionHeader { line: usize, content: String },

    /// The same section header appears twice
    #[error("line {line}: section {section:?} already exists")]
    DuplicateSection { line: usize, section: String },

    /// The same option appears twice within one section
    #[error("line {line}: option {option:?} in section {section:?} already exists")]
    DuplicateOption {
        line: usize,
        section: String,
        option: String,
    },

    /// A line that is neither a header, an option, nor a continuation
    #[error("line {line}: unparsable line: {content:?}")]
    Syntax { line: usize, content: String },
}

/// Failure while sending an event through the default client.
#[derive(Debug, Error)]
pub enum SendError {
    /// Events must carry a summary
    #[error("Send error: summary is a required field")]
    MissingSummary,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Timestamp formatting error
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] time::error::Format),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("HTTP error: endpoint returned status {0}")]
    Status(u16),

    /// Local syslog write error
    #[error("Syslog error: {0}")]
    Syslog(#[source] std::io::Error),
}
