//! HTTP delivery of event messages.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::domain::SendError;

/// Upper bound on a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// POST a JSON body to `url`. Non-2xx responses are errors.
pub fn post(url: &str, verify_certificate: bool, body: Vec<u8>) -> Result<(), SendError> {
    let client = Client::builder()
        .danger_accept_invalid_certs(!verify_certificate)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    debug!("POST {} ({} bytes)", url, body.len());
    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(SendError::Status(status.as_u16()));
    }
    Ok(())
}
