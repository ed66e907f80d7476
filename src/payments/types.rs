use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use strum_macros::Display;

use crate::Result;
use crate::xml::{Element, FromElement, decode_all};

/// A payout by the marketplace, covering one or more shipments.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub credit_invoice_number: String,
    pub date_time_payment: NaiveDateTime,
    pub payment_amount: Decimal,
    pub payment_shipments: Vec<PaymentShipment>,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentShipment {
    pub shipment_id: String,
    pub order_id: String,
    pub payment_shipment_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub shipment_date: Option<NaiveDateTime>,
    pub payment_shipment_items: Vec<PaymentShipmentItem>,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentShipmentItem {
    pub order_item_id: String,
    pub ean: String,
    pub offer_reference: Option<String>,
    pub quantity: u32,
    pub offer_price: Decimal,
    pub shipping_contribution: Decimal,
    pub transaction_fee: Decimal,
    pub total_amount: Decimal,
    pub shipment_status: ShipmentStatus,
}

/// Settlement state of a paid shipment. Unknown values are kept verbatim.
#[non_exhaustive]
#[derive(Clone, Debug, Display, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Final,
    #[serde(untagged)]
    #[strum(to_string = "{0}")]
    Unknown(String),
}

/// Delivery state of a paid item. Unknown values are kept verbatim.
#[non_exhaustive]
#[derive(Clone, Debug, Display, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipmentStatus {
    Normal,
    #[serde(untagged)]
    #[strum(to_string = "{0}")]
    Unknown(String),
}

impl FromElement for Payment {
    fn from_element(element: &Element) -> Result<Self> {
        let shipments = element.required("PaymentShipments")?;

        Ok(Self {
            credit_invoice_number: element.string("CreditInvoiceNumber")?,
            date_time_payment: element.timestamp("DateTimePayment")?,
            payment_amount: element.decimal("PaymentAmount")?,
            payment_shipments: decode_all(shipments, "PaymentShipment")?,
        })
    }
}

impl FromElement for PaymentShipment {
    fn from_element(element: &Element) -> Result<Self> {
        let items = element.required("PaymentShipmentItems")?;

        Ok(Self {
            shipment_id: element.string("ShipmentId")?,
            order_id: element.string("OrderId")?,
            payment_shipment_amount: element.decimal("PaymentShipmentAmount")?,
            payment_status: PaymentStatus::from_element(element.required("PaymentStatus")?)?,
            shipment_date: element.optional_timestamp("ShipmentDate")?,
            payment_shipment_items: decode_all(items, "PaymentShipmentItem")?,
        })
    }
}

impl FromElement for PaymentShipmentItem {
    fn from_element(element: &Element) -> Result<Self> {
        Ok(Self {
            order_item_id: element.string("OrderItemId")?,
            ean: element.string("EAN")?,
            offer_reference: element.optional_string("OfferReference"),
            quantity: element.integer("Quantity")?,
            offer_price: element.decimal("OfferPrice")?,
            shipping_contribution: element.decimal("ShippingContribution")?,
            transaction_fee: element.decimal("TransactionFee")?,
            total_amount: element.decimal("TotalAmount")?,
            shipment_status: ShipmentStatus::from_element(element.required("ShipmentStatus")?)?,
        })
    }
}

impl From<&str> for PaymentStatus {
    fn from(value: &str) -> Self {
        match value {
            "FINAL" => Self::Final,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl FromElement for PaymentStatus {
    fn from_element(element: &Element) -> Result<Self> {
        Ok(Self::from(element.text()))
    }
}

impl From<&str> for ShipmentStatus {
    fn from(value: &str) -> Self {
        match value {
            "NORMAL" => Self::Normal,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl FromElement for ShipmentStatus {
    fn from_element(element: &Element) -> Result<Self> {
        Ok(Self::from(element.text()))
    }
}
