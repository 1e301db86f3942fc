//! Default MozDef event client.

use std::env;
use std::fs;

use serde_json::{Map, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, warn};

use super::{http, syslog};
use crate::domain::{EventClient, EventFields, EventMessage, SendError, Severity};

/// Category used until one is set.
pub const DEFAULT_CATEGORY: &str = "event";

/// A MozDef event: stored fields plus delivery settings.
///
/// Certificate verification is off until enabled with `set_verify`.
#[derive(Debug, Clone)]
pub struct MozDefEvent {
    url: String,
    verify_certificate: bool,
    send_to_syslog: bool,
    syslog_only: bool,
    summary: Option<String>,
    tags: Vec<String>,
    details: Map<String, Value>,
    category: String,
    source: Option<String>,
    severity: Severity,
    hostname: String,
    process_name: String,
    process_id: u32,
}

impl MozDefEvent {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            verify_certificate: false,
            send_to_syslog: false,
            syslog_only: false,
            summary: None,
            tags: Vec::new(),
            details: Map::new(),
            category: DEFAULT_CATEGORY.to_string(),
            source: None,
            severity: Severity::default(),
            hostname: local_hostname(),
            process_name: process_name(),
            process_id: std::process::id(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn verify_certificate(&self) -> bool {
        self.verify_certificate
    }

    pub fn send_to_syslog(&self) -> bool {
        self.send_to_syslog
    }

    pub fn syslog_only(&self) -> bool {
        self.syslog_only
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    pub fn set_details(&mut self, details: Map<String, Value>) {
        self.details = details;
    }

    /// Insert one detail, replacing any previous value under `key`.
    pub fn add_detail(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.details.insert(key.into(), value.into());
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    /// Set severity by name; unknown names become INFO.
    pub fn set_severity_from_string(&mut self, severity: &str) {
        self.severity = Severity::from_str_lossy(severity);
    }

    /// Syslog priority of the stored severity.
    pub fn syslog_convert(&self) -> u8 {
        self.severity.syslog_priority()
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn set_hostname(&mut self, hostname: impl Into<String>) {
        self.hostname = hostname.into();
    }

    /// Build the message that `send` would deliver.
    ///
    /// Fields given in `fields` override the stored values for this message only.
    pub fn construct(&self, fields: EventFields) -> Result<EventMessage, SendError> {
        let summary = fields
            .summary
            .or_else(|| self.summary.clone())
            .filter(|s| !s.is_empty())
            .ok_or(SendError::MissingSummary)?;

        let timestamp = match fields.timestamp {
            Some(ts) => ts,
            None => OffsetDateTime::now_utc().format(&Rfc3339)?,
        };

        Ok(EventMessage {
            timestamp,
            hostname: fields.hostname.unwrap_or_else(|| self.hostname.clone()),
            processname: self.process_name.clone(),
            processid: self.process_id,
            severity: fields.severity.unwrap_or(self.severity),
            summary,
            category: fields.category.unwrap_or_else(|| self.category.clone()),
            source: self.source.clone(),
            tags: fields.tags.unwrap_or_else(|| self.tags.clone()),
            details: fields.details.unwrap_or_else(|| self.details.clone()),
        })
    }
}

impl EventClient for MozDefEvent {
    type Fields = EventFields;
    type Error = SendError;

    fn with_url(url: &str) -> Self {
        Self::new(url)
    }

    fn set_verify(&mut self, verify: bool) {
        self.verify_certificate = verify;
    }

    fn set_send_to_syslog(&mut self, enabled: bool) {
        self.send_to_syslog = enabled;
    }

    fn set_syslog_only(&mut self, enabled: bool) {
        self.syslog_only = enabled;
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn store_category(&mut self, category: String) {
        self.category = category;
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn store_source(&mut self, source: Option<String>) {
        self.source = source;
    }

    /// Deliver to syslog and/or the MozDef endpoint.
    ///
    /// `syslog_only` only takes effect together with `send_to_syslog`. A syslog
    /// failure is an error only when syslog is the sole channel.
    fn send(&mut self, fields: EventFields) -> Result<(), SendError> {
        let message = self.construct(fields)?;
        let body = serde_json::to_vec(&message)?;

        if self.send_to_syslog {
            match syslog::send(&message, &body) {
                Ok(()) => {}
                Err(e) if self.syslog_only => return Err(SendError::Syslog(e)),
                Err(e) => warn!("Syslog delivery failed, continuing with HTTP: {}", e),
            }
            if self.syslog_only {
                debug!("syslog_only is on; skipping HTTP delivery");
                return Ok(());
            }
        }

        http::post(&self.url, self.verify_certificate, body)
    }
}

fn local_hostname() -> String {
    fs::read_to_string("/proc/sys/kernel/hostname")
        .or_else(|_| fs::read_to_string("/etc/hostname"))
        .ok()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or_else(|| env::var("HOSTNAME").ok())
        .unwrap_or_else(|| "localhost".to_string())
}

fn process_name() -> String {
    env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
