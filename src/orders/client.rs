use reqwest::Method;

use crate::Result;
use crate::client::Client;
use crate::orders::{Order, Shipment};
use crate::xml;

const ORDERS_PATH: &str = "/services/rest/orders/v2/";
const PROCESS_PATH: &str = "/services/rest/orders/v2/process";

/// Order operations, borrowed from a [`Client`] via [`Client::orders`].
#[derive(Clone, Copy, Debug)]
pub struct OrderMethods<'client> {
    client: &'client Client,
}

impl<'client> OrderMethods<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Lists all orders that still have to be shipped.
    pub fn open(&self) -> Result<Vec<Order>> {
        let body = self.client.send(Method::GET, ORDERS_PATH, None)?;
        xml::decode_orders(&body)
    }

    /// Marks a shipment as sent and returns the `ProcessOrderId` token.
    ///
    /// The shipment is validated before anything is sent.
    pub fn process(&self, shipment: &Shipment) -> Result<String> {
        let document = xml::encode_process_orders(std::slice::from_ref(shipment))?;
        let body = self
            .client
            .send(Method::POST, PROCESS_PATH, Some(document))?;
        xml::decode_process_result(&body)
    }
}
