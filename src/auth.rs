//! Request signing for the Plaza API.
//!
//! Every request carries three headers:
//! - `Content-Type: application/xml; charset=UTF-8`
//! - `X-BOL-Date`, the RFC 1123 date the request was signed at
//! - `X-BOL-Authorization: {public key}:{signature}`
//!
//! The signature is the base64 encoded HMAC-SHA256, keyed with the private key, of
//!
//! ```text
//! {METHOD}\n\n{content type}\n{date}\nx-bol-date:{date}\n{path}
//! ```

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac as _};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Deserialize;
use sha2::Sha256;

use crate::Result;
use crate::error::Error;

pub const XML_CONTENT_TYPE: &str = "application/xml; charset=UTF-8";
pub const DATE_HEADER: &str = "X-BOL-Date";
pub const AUTHORIZATION_HEADER: &str = "X-BOL-Authorization";

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Public/private key pair issued by the marketplace.
///
/// The private key never shows up in `Debug` output.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize)]
pub struct Credentials {
    #[serde(alias = "public_key")]
    key: String,
    #[serde(alias = "private_key")]
    secret: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(key: String, secret: SecretString) -> Self {
        Self { key, secret }
    }

    /// The public key, sent in clear as part of every authorization header.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Checks that the key material can be used to produce a header value.
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(Error::signing("public key is empty"));
        }
        if let Some(c) = self
            .key
            .chars()
            .find(|c| *c == ':' || !c.is_ascii_graphic())
        {
            return Err(Error::signing(format!(
                "public key contains invalid character {c:?}"
            )));
        }
        if self.secret.expose_secret().is_empty() {
            return Err(Error::signing("private key is empty"));
        }
        Ok(())
    }
}

/// Formats `timestamp` the way the `X-BOL-Date` header expects it.
#[must_use]
pub fn http_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format(HTTP_DATE_FORMAT).to_string()
}

/// Builds the string that gets signed for a request.
#[must_use]
pub fn signing_message(method: &Method, path: &str, date: &str) -> String {
    format!("{method}\n\n{XML_CONTENT_TYPE}\n{date}\nx-bol-date:{date}\n{path}")
}

/// Computes the `X-BOL-Authorization` value for a request.
///
/// Identical inputs always yield identical output; the only failure is malformed
/// key material.
pub fn signature(
    credentials: &Credentials,
    method: &Method,
    path: &str,
    timestamp: DateTime<Utc>,
) -> Result<String> {
    credentials.validate()?;

    let message = signing_message(method, path, &http_date(timestamp));
    let digest = hmac(&credentials.secret, &message)?;

    Ok(format!("{}:{digest}", credentials.key))
}

/// Returns the full set of headers for a signed request.
pub(crate) fn create_headers(
    credentials: &Credentials,
    method: &Method,
    path: &str,
    timestamp: DateTime<Utc>,
) -> Result<HeaderMap> {
    let authorization = signature(credentials, method, path, timestamp)?;
    let date = http_date(timestamp);

    let mut map = HeaderMap::new();
    map.insert(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE));
    map.insert(DATE_HEADER, header_value(&date)?);
    map.insert(AUTHORIZATION_HEADER, header_value(&authorization)?);

    Ok(map)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::signing(format!("unusable header value: {e}")))
}

fn hmac(secret: &SecretString, message: &str) -> Result<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.expose_secret().as_bytes())
        .map_err(|e| Error::signing(format!("invalid private key: {e}")))?;
    mac.update(message.as_bytes());

    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
