//! Fontello font-compilation service client
//!
//! Thin blocking HTTP glue: upload the configuration to open a build
//! session, then download the resulting webfont archive. The protocol is
//! fontello's: POST the config as a multipart form, get a session id
//! back, GET `/{session}/get` for the ZIP.

use crate::error::{ClientError, Result};
use log::debug;
use std::path::Path;
use std::time::Duration;

/// Base URL of the font-compilation service
pub const SERVICE_URL: &str = "https://fontello.com";

fn http_client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .map_err(ClientError::from)
}

/// Upload the configuration file and open a build session.
///
/// The response body is the session id.
///
/// # Errors
///
/// Returns `ClientError::Io` when the config file cannot be read,
/// `ClientError::Http` on transport failure, and `ClientError::Status`
/// when the service answers with HTTP 400 or above.
pub fn open_session(config_path: &Path) -> Result<String> {
    let form = reqwest::blocking::multipart::Form::new().file("config", config_path)?;
    let response = http_client()?.post(SERVICE_URL).multipart(form).send()?;
    let status = response.status();
    let body = response.text()?;
    if status.as_u16() >= 400 {
        return Err(ClientError::Status {
            code: status.as_u16(),
            body,
        });
    }
    let session = body.trim().to_string();
    debug!("opened session {session}");
    Ok(session)
}

/// Download the generated webfont ZIP for an open session.
///
/// # Errors
///
/// Returns `ClientError::Http` on transport failure and
/// `ClientError::Status` when the service answers with HTTP 400 or above.
pub fn download(session_id: &str) -> Result<Vec<u8>> {
    let url = format!("{SERVICE_URL}/{session_id}/get");
    let response = http_client()?.get(&url).send()?;
    let status = response.status();
    if status.as_u16() >= 400 {
        return Err(ClientError::Status {
            code: status.as_u16(),
            body: response.text()?,
        });
    }
    let bytes = response.bytes()?;
    debug!("downloaded {} bytes from {url}", bytes.len());
    Ok(bytes.to_vec())
}
