//! Configuration management module.
//!
//! Handles locating the config file, parsing it, deriving validated event
//! settings from the `[mozdef]` section, and generating sample files.

pub mod parser;
mod resolver;
mod service;
mod settings;
mod types;

pub use resolver::{load, ConfigResolver, CONFIG_FILE_LOCATIONS, CONFIG_FILE_NAME};
pub use service::{ConfigService, SAMPLE_URL};
pub use settings::{EventSettings, MOZDEF_SECTION, PLACEHOLDER_URL};
pub use types::{ResolvedConfig, DEFAULT_SECTION};
