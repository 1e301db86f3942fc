//! Event client trait definition.

/// Surface of the underlying event client that a configured event drives.
pub trait EventClient {
    /// Field arguments accepted by [`EventClient::send`].
    type Fields;

    /// Error produced by [`EventClient::send`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct a client that will deliver to `url`.
    fn with_url(url: &str) -> Self
    where
        Self: Sized;

    /// Toggle TLS certificate verification.
    fn set_verify(&mut self, verify: bool);

    /// Also deliver events to local syslog.
    fn set_send_to_syslog(&mut self, enabled: bool);

    /// Deliver events to local syslog only.
    fn set_syslog_only(&mut self, enabled: bool);

    /// Stored category, as-is.
    fn category(&self) -> &str;

    /// Replace the stored category without normalization.
    fn store_category(&mut self, category: String);

    /// Stored source, as-is.
    fn source(&self) -> Option<&str>;

    /// Replace the stored source.
    fn store_source(&mut self, source: Option<String>);

    /// Deliver the event.
    fn send(&mut self, fields: Self::Fields) -> Result<(), Self::Error>;
}
