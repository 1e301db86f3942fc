//! Domain layer containing core business logic.
//!
//! This module contains:
//! - The event client trait and event data types
//! - The config-driven event wrapper and its builder
//! - Error types
//! - Logger setup

mod client;
mod configed;
mod error;
pub mod logger;
mod types;

pub use client::EventClient;
pub use configed::{ConfigedEvent, ConfigedEventBuilder};
pub use error::{ConfigurationError, ParseError, SendError};
pub use types::{EventFields, EventMessage, Severity, UnknownSeverity};
