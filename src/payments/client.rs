use reqwest::Method;

use crate::Result;
use crate::client::Client;
use crate::error::Error;
use crate::payments::Payment;
use crate::xml;

const PAYMENTS_PATH: &str = "/services/rest/payments/v2";

/// Payment operations, borrowed from a [`Client`] via [`Client::payments`].
#[derive(Clone, Copy, Debug)]
pub struct PaymentMethods<'client> {
    client: &'client Client,
}

impl<'client> PaymentMethods<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Fetches the payments made in the given calendar month.
    pub fn report(&self, year: u16, month: u8) -> Result<Vec<Payment>> {
        let path = report_path(year, month)?;
        let body = self.client.send(Method::GET, &path, None)?;
        xml::decode_payments(&body)
    }
}

/// `/services/rest/payments/v2/YYYYMM`, month zero padded.
pub(crate) fn report_path(year: u16, month: u8) -> Result<String> {
    if year > 9999 {
        return Err(Error::validation(format!(
            "year {year} does not fit the YYYYMM period format"
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(Error::validation(format!(
            "month {month} is not between 1 and 12"
        )));
    }
    Ok(format!("{PAYMENTS_PATH}/{year:04}{month:02}"))
}
