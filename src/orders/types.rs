use bon::Builder;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::Result;
use crate::error::Error;
use crate::xml::{Element, FromElement, decode_all};

/// An open order as listed by the marketplace.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Order {
    pub order_id: String,
    /// When the customer placed the order.
    pub date_time_customer: Option<NaiveDateTime>,
    /// When the order was handed to the seller.
    pub date_time_drop_shipper: Option<NaiveDateTime>,
    pub customer_details: CustomerDetails,
    pub order_items: Vec<OrderItem>,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomerDetails {
    pub shipment_details: Address,
    pub billing_details: Address,
}

/// Shipment or billing address. The marketplace may leave out any field.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    pub salutation_code: Option<String>,
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub streetname: Option<String>,
    pub housenumber: Option<String>,
    pub housenumber_extended: Option<String>,
    pub address_supplement: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
    pub email: Option<String>,
    pub delivery_phone_number: Option<String>,
    pub company: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub order_item_id: String,
    pub ean: String,
    pub offer_reference: Option<String>,
    pub title: Option<String>,
    pub quantity: u32,
    pub offer_price: Decimal,
    /// Free text, e.g. `Binnen 24 uur`.
    pub promised_delivery_date: Option<String>,
    pub transaction_fee: Decimal,
}

impl FromElement for Order {
    fn from_element(element: &Element) -> Result<Self> {
        let items = element.required("OrderItems")?;

        Ok(Self {
            order_id: element.string("OrderId")?,
            date_time_customer: element.optional_timestamp("DateTimeCustomer")?,
            date_time_drop_shipper: element.optional_timestamp("DateTimeDropShipper")?,
            customer_details: CustomerDetails::from_element(element.required("CustomerDetails")?)?,
            order_items: decode_all(items, "OrderItem")?,
        })
    }
}

impl FromElement for CustomerDetails {
    fn from_element(element: &Element) -> Result<Self> {
        Ok(Self {
            shipment_details: Address::from_element(element.required("ShipmentDetails")?)?,
            billing_details: Address::from_element(element.required("BillingDetails")?)?,
        })
    }
}

impl FromElement for Address {
    fn from_element(element: &Element) -> Result<Self> {
        Ok(Self {
            salutation_code: element.optional_string("SalutationCode"),
            firstname: element.optional_string("Firstname"),
            surname: element.optional_string("Surname"),
            streetname: element.optional_string("Streetname"),
            housenumber: element.optional_string("Housenumber"),
            housenumber_extended: element.optional_string("HousenumberExtended"),
            address_supplement: element.optional_string("AddressSupplement"),
            zip_code: element.optional_string("ZipCode"),
            city: element.optional_string("City"),
            country_code: element.optional_string("CountryCode"),
            email: element.optional_string("Email"),
            delivery_phone_number: element.optional_string("DeliveryPhoneNumber"),
            company: element.optional_string("Company"),
        })
    }
}

impl FromElement for OrderItem {
    fn from_element(element: &Element) -> Result<Self> {
        Ok(Self {
            order_item_id: element.string("OrderItemId")?,
            ean: element.string("EAN")?,
            offer_reference: element.optional_string("OfferReference"),
            title: element.optional_string("Title"),
            quantity: element.integer("Quantity")?,
            offer_price: element.decimal("OfferPrice")?,
            promised_delivery_date: element.optional_string("PromisedDeliveryDate"),
            transaction_fee: element.decimal("TransactionFee")?,
        })
    }
}

/// Carrier and tracking code of a shipment.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transporter {
    /// Carrier identifier, e.g. `DHLFORYOU` or `TNT`.
    pub code: String,
    pub track_and_trace_code: String,
}

impl Transporter {
    #[must_use]
    pub fn new<C: Into<String>, T: Into<String>>(code: C, track_and_trace_code: T) -> Self {
        Self {
            code: code.into(),
            track_and_trace_code: track_and_trace_code.into(),
        }
    }
}

/// Marks the listed items of an order as shipped.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Builder)]
pub struct Shipment {
    #[builder(into)]
    pub order_id: String,
    pub date_time: NaiveDateTime,
    pub transporter: Transporter,
    pub order_item_ids: Vec<String>,
}

impl Shipment {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.order_id.is_empty() {
            return Err(Error::validation("shipment order id is empty"));
        }
        if self.order_item_ids.is_empty() {
            return Err(Error::validation(format!(
                "shipment for order {} lists no order items",
                self.order_id
            )));
        }
        if self.order_item_ids.iter().any(String::is_empty) {
            return Err(Error::validation(format!(
                "shipment for order {} contains an empty order item id",
                self.order_id
            )));
        }
        Ok(())
    }
}
