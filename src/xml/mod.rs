//! XML wire format of the Plaza API.
//!
//! Outgoing commands are written with [`encode_process_orders`]; response documents
//! are decoded into the records of [`crate::orders`] and [`crate::payments`] by
//! [`decode_orders`], [`decode_payments`] and [`decode_process_result`].
//!
//! # Conventions
//!
//! - Namespace: `http://plazaapi.bol.com/services/xsd/plazaapiservice-1.0.xsd`
//! - Timestamps: `YYYY-MM-DDTHH:MM:SS`, no offset
//! - Money: exact decimals, never floats

mod element;
mod writer;

pub(crate) use element::Element;
pub use writer::encode_process_orders;

use crate::Result;
use crate::orders::Order;
use crate::payments::Payment;

pub const NAMESPACE: &str = "http://plazaapi.bol.com/services/xsd/plazaapiservice-1.0.xsd";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A record materialized from exactly one schema element.
pub(crate) trait FromElement: Sized {
    fn from_element(element: &Element) -> Result<Self>;
}

/// Decodes every child `name` of `parent`, keeping document order.
pub(crate) fn decode_all<T: FromElement>(parent: &Element, name: &str) -> Result<Vec<T>> {
    parent.children(name).map(T::from_element).collect()
}

/// Decodes an `Orders` document.
pub fn decode_orders(xml: &str) -> Result<Vec<Order>> {
    let root = Element::parse_document(xml, "Orders")?;
    let orders = decode_all(&root, "Order")?;

    #[cfg(feature = "tracing")]
    tracing::trace!(count = orders.len(), "decoded orders");

    Ok(orders)
}

/// Decodes a `Payments` document.
pub fn decode_payments(xml: &str) -> Result<Vec<Payment>> {
    let root = Element::parse_document(xml, "Payments")?;
    let payments = decode_all(&root, "Payment")?;

    #[cfg(feature = "tracing")]
    tracing::trace!(count = payments.len(), "decoded payments");

    Ok(payments)
}

/// Extracts the `ProcessOrderId` token from a `ProcessOrdersResult` document.
pub fn decode_process_result(xml: &str) -> Result<String> {
    let root = Element::parse_document(xml, "ProcessOrdersResult")?;
    root.string("ProcessOrderId")
}
