//! mozdef-client-config: MozDef events configured from one shared file
//!
//! The destination URL and delivery toggles come from the `[mozdef]` section of
//! the first usable `mozdef_client_config.conf` on the search path, instead of
//! being passed by every caller.
//!
//! ```no_run
//! use mozdef_client_config::{ConfigedEvent, EventFields, MozDefEvent};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut event = ConfigedEvent::<MozDefEvent>::new()?;
//! event.set_category("Authentication");
//! event.set_source("vpn");
//! event.event_mut().set_summary("user logged in");
//! event.send(EventFields::default())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod service;

pub use config::{ConfigResolver, EventSettings, ResolvedConfig};
pub use domain::{
    ConfigedEvent, ConfigedEventBuilder, ConfigurationError, EventClient, EventFields,
    EventMessage, ParseError, SendError, Severity,
};
pub use service::MozDefEvent;

/// A [`ConfigedEvent`] wrapping the default MozDef client.
pub type ConfigedMozDefEvent = ConfigedEvent<MozDefEvent>;
