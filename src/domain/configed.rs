//! Event wrapper whose destination and routing come from the config file.

use std::path::PathBuf;

use tracing::{debug, info};

use super::client::EventClient;
use super::error::ConfigurationError;
use crate::config::{ConfigResolver, EventSettings};

/// Builds [`ConfigedEvent`]s from the first usable config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigedEventBuilder {
    resolver: ConfigResolver,
}

impl ConfigedEventBuilder {
    /// Builder probing the default search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder probing a custom resolver's candidates.
    pub fn with_resolver(resolver: ConfigResolver) -> Self {
        Self { resolver }
    }

    /// Resolve config, validate it, and construct the wrapped client.
    ///
    /// Verification and syslog routing are applied after the client is
    /// constructed so the client's own defaults never win.
    pub fn build<C: EventClient>(&self) -> Result<ConfigedEvent<C>, ConfigurationError> {
        let config = self.resolver.resolve();
        let settings = EventSettings::from_config(&config)?;

        let mut event = C::with_url(&settings.destination_url);
        event.set_verify(true);
        event.set_send_to_syslog(settings.send_to_syslog);
        event.set_syslog_only(settings.syslog_only);

        info!(
            "Configured event: url_from_config={}, send_events={}, send_to_syslog={}, syslog_only={}",
            settings.url_from_config,
            settings.send_events,
            settings.send_to_syslog,
            settings.syslog_only
        );

        Ok(ConfigedEvent {
            event,
            settings,
            origin: config.origin().map(PathBuf::from),
        })
    }
}

/// An event client configured from file, with a guarded `send`.
#[derive(Debug)]
pub struct ConfigedEvent<C> {
    event: C,
    settings: EventSettings,
    origin: Option<PathBuf>,
}

impl<C: EventClient> ConfigedEvent<C> {
    /// Build from the default search path.
    pub fn new() -> Result<Self, ConfigurationError> {
        ConfigedEventBuilder::new().build()
    }

    /// Send the event unless sending is disabled by config.
    ///
    /// When disabled this returns `Ok(())` without touching the client.
    pub fn send(&mut self, fields: C::Fields) -> Result<(), C::Error> {
        if !self.settings.send_events {
            debug!("send_events is off; dropping event");
            return Ok(());
        }
        self.event.send(fields)
    }

    pub fn category(&self) -> &str {
        self.event.category()
    }

    /// Set the category, lower-cased.
    pub fn set_category(&mut self, category: &str) {
        self.event.store_category(category.to_lowercase());
    }

    pub fn source(&self) -> Option<&str> {
        self.event.source()
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.event.store_source(Some(source.into()));
    }

    pub fn settings(&self) -> &EventSettings {
        &self.settings
    }

    pub fn send_events(&self) -> bool {
        self.settings.send_events
    }

    pub fn send_to_syslog(&self) -> bool {
        self.settings.send_to_syslog
    }

    pub fn syslog_only(&self) -> bool {
        self.settings.syslog_only
    }

    /// File the settings were read from, if any.
    pub fn config_origin(&self) -> Option<&std::path::Path> {
        self.origin.as_deref()
    }

    /// The wrapped client, for its own field setters.
    pub fn event(&self) -> &C {
        &self.event
    }

    pub fn event_mut(&mut self) -> &mut C {
        &mut self.event
    }
}
