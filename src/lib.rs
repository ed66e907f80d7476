#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod orders;
pub mod payments;
pub mod xml;

use reqwest::blocking::{Client as ReqwestClient, Request};
use reqwest::header::HeaderMap;

pub use client::Client;
pub use config::{Config, Environment};
pub use error::{Error, Kind};

pub type Result<T> = std::result::Result<T, Error>;

/// Re-exports of the value types used in decoded records.
pub mod types {
    pub use chrono::NaiveDateTime;
    pub use rust_decimal::Decimal;
}

pub const PRODUCTION_HOST: &str = "https://plazaapi.bol.com";
pub const TEST_HOST: &str = "https://test-plazaapi.bol.com";

/// Executes a signed request and returns the body of a successful response.
///
/// Non-success statuses become [`Kind::Status`] errors carrying the response body.
fn request(client: &ReqwestClient, mut request: Request, headers: HeaderMap) -> Result<String> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    *request.headers_mut() = headers;

    #[cfg(feature = "tracing")]
    tracing::debug!(method = %method, path = %path, "sending request");

    let response = client.execute(request)?;
    let status_code = response.status();

    if !status_code.is_success() {
        let message = response
            .text()
            .unwrap_or_else(|e| format!("<unreadable body: {e}>"));

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    Ok(response.text()?)
}
